pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{GameConfig, GeneratorConfig};
pub use error::ConfigError;
pub use types::{Cell, Footprint, SoundKind};
