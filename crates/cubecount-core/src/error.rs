use thiserror::Error;

/// Errors raised while loading or validating a `GameConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse game config RON: {0}")]
    Parse(String),

    #[error("base layer range {min}..={max} must lie within 1..={limit}")]
    BaseRange { min: u32, max: u32, limit: usize },

    #[error("max_questions must be at least 1")]
    NoQuestions,

    #[error("rotation_sensitivity must be positive and finite, got {0}")]
    Sensitivity(f32),
}
