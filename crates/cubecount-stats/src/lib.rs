pub mod report;
pub mod sampler;
