pub mod generator;
pub mod rng;
pub mod structure;

pub use generator::{LayerCounts, StructureGenerator};
pub use rng::{seeded, RandomSource, ScriptedDraws};
pub use structure::{Structure, StructureError};
