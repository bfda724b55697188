use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Tunables for the structure generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Smallest base-layer cube count (inclusive).
    pub base_min: u32,
    /// Largest base-layer cube count (inclusive). At most FOOTPRINT_COUNT.
    pub base_max: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_min: BASE_LAYER_MIN,
            base_max: BASE_LAYER_MAX,
        }
    }
}

/// Game tunables, loaded from RON. Every field is optional in the source;
/// missing fields take the values from `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_questions: u32,
    pub points_per_correct: u32,
    /// Radians per pixel of horizontal drag.
    pub rotation_sensitivity: f32,
    pub start_angle_degrees: f32,
    pub victory_delay_ms: u32,
    pub generator: GeneratorConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_questions: MAX_QUESTIONS,
            points_per_correct: POINTS_PER_CORRECT,
            rotation_sensitivity: ROTATION_SENSITIVITY,
            start_angle_degrees: START_ANGLE_DEGREES,
            victory_delay_ms: VICTORY_DELAY_MS,
            generator: GeneratorConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from RON and validate it.
    pub fn from_ron(ron_str: &str) -> Result<Self, ConfigError> {
        let options = ron::Options::default();
        let config: GameConfig = options
            .from_str(ron_str)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `ron_str`, falling back to defaults (with a warning) when it is
    /// malformed or out of range.
    pub fn from_ron_or_default(ron_str: &str) -> Self {
        match Self::from_ron(ron_str) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring game config: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let gen = &self.generator;
        if gen.base_min == 0 || gen.base_min > gen.base_max || gen.base_max as usize > FOOTPRINT_COUNT
        {
            return Err(ConfigError::BaseRange {
                min: gen.base_min,
                max: gen.base_max,
                limit: FOOTPRINT_COUNT,
            });
        }
        if self.max_questions == 0 {
            return Err(ConfigError::NoQuestions);
        }
        if !(self.rotation_sensitivity.is_finite() && self.rotation_sensitivity > 0.0) {
            return Err(ConfigError::Sensitivity(self.rotation_sensitivity));
        }
        Ok(())
    }

    /// Initial orientation of every new question, in radians (315° = 7π/4).
    pub fn start_angle(&self) -> f32 {
        self.start_angle_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = GameConfig::default();
        assert_eq!(config.max_questions, 10);
        assert_eq!(config.points_per_correct, 10);
        assert_eq!(config.rotation_sensitivity, 0.01);
        assert_eq!(config.generator.base_min, 4);
        assert_eq!(config.generator.base_max, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_start_angle_radians() {
        let angle = GameConfig::default().start_angle();
        assert!((angle - 7.0 * std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = GameConfig::from_ron("(max_questions: 3, generator: (base_max: 6))")
            .expect("valid config");
        assert_eq!(config.max_questions, 3);
        assert_eq!(config.generator.base_max, 6);
        assert_eq!(config.generator.base_min, BASE_LAYER_MIN);
        assert_eq!(config.points_per_correct, POINTS_PER_CORRECT);
    }

    #[test]
    fn test_empty_ron_is_default() {
        let config = GameConfig::from_ron("()").expect("valid config");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = GameConfig::from_ron("(max_questions: \"ten\")").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_oversized_base_layer() {
        let err = GameConfig::from_ron("(generator: (base_min: 4, base_max: 10))").unwrap_err();
        assert!(matches!(err, ConfigError::BaseRange { max: 10, .. }));
    }

    #[test]
    fn test_rejects_inverted_base_range() {
        let err = GameConfig::from_ron("(generator: (base_min: 7, base_max: 5))").unwrap_err();
        assert!(matches!(err, ConfigError::BaseRange { .. }));
    }

    #[test]
    fn test_rejects_zero_questions_and_bad_sensitivity() {
        assert!(matches!(
            GameConfig::from_ron("(max_questions: 0)").unwrap_err(),
            ConfigError::NoQuestions
        ));
        assert!(matches!(
            GameConfig::from_ron("(rotation_sensitivity: -0.5)").unwrap_err(),
            ConfigError::Sensitivity(_)
        ));
    }

    #[test]
    fn test_fallback_on_invalid() {
        let config = GameConfig::from_ron_or_default("not ron at all {");
        assert_eq!(config, GameConfig::default());
    }
}
