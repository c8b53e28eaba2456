//! Data-driven game balance
//!
//! Defaults mirror [`crate::consts`]. A tuning file may override any subset of fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a tuning document was refused
#[derive(Debug)]
pub enum TuningError {
    /// Not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// Parsed, but a value would break the simulation
    Invalid(String),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(e) => write!(f, "malformed tuning: {e}"),
            TuningError::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Balance parameters for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_bottom_margin: f32,
    pub paddle_base_speed: f32,
    pub item_size: f32,
    pub spawn_chance: f32,
    pub golden_threshold: f32,
    pub bomb_threshold: f32,
    pub fall_factor_min: f32,
    pub fall_factor_max: f32,
    pub max_misses: u32,
    pub difficulty_step: f32,
    pub difficulty_score_interval: i64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            paddle_base_speed: PADDLE_BASE_SPEED,
            item_size: ITEM_SIZE,
            spawn_chance: SPAWN_CHANCE,
            golden_threshold: GOLDEN_THRESHOLD,
            bomb_threshold: BOMB_THRESHOLD,
            fall_factor_min: FALL_FACTOR_MIN,
            fall_factor_max: FALL_FACTOR_MAX,
            max_misses: MAX_MISSES,
            difficulty_step: DIFFICULTY_STEP,
            difficulty_score_interval: DIFFICULTY_SCORE_INTERVAL,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make spawning or geometry degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("item_size", self.item_size),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(TuningError::Invalid(format!(
                "spawn_chance must be within [0, 1], got {}",
                self.spawn_chance
            )));
        }
        if !(self.fall_factor_min.is_finite()
            && self.fall_factor_max.is_finite()
            && self.fall_factor_min < self.fall_factor_max)
        {
            return Err(TuningError::Invalid(format!(
                "fall factor range [{}, {}) is empty",
                self.fall_factor_min, self.fall_factor_max
            )));
        }
        Ok(())
    }

    /// Rightmost legal paddle x (left edge)
    pub fn paddle_max_x(&self) -> f32 {
        (self.playfield_width - self.paddle_width).max(0.0)
    }

    /// Rightmost legal item spawn x (left edge)
    pub fn item_max_x(&self) -> f32 {
        (self.playfield_width - self.item_size).max(0.0)
    }

    /// Paddle top edge
    pub fn paddle_y(&self) -> f32 {
        self.playfield_height - self.paddle_height - self.paddle_bottom_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let tuning = Tuning::default();
        assert_eq!(tuning.paddle_max_x(), 420.0);
        assert_eq!(tuning.item_max_x(), 470.0);
        assert_eq!(tuning.paddle_y(), 570.0);
        assert_eq!(tuning.max_misses, 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "spawn_chance": 0.5, "max_misses": 3 }"#).unwrap();
        assert_eq!(tuning.spawn_chance, 0.5);
        assert_eq!(tuning.max_misses, 3);
        assert_eq!(tuning.playfield_width, PLAYFIELD_WIDTH);
        assert_eq!(tuning.difficulty_step, DIFFICULTY_STEP);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(matches!(
            Tuning::from_json("{ spawn_chance: }"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_empty_fall_factor_range_rejected() {
        let result = Tuning::from_json(
            r#"{ "spawn_chance": 1.0, "fall_factor_min": 3.0, "fall_factor_max": 3.0 }"#,
        );
        assert!(matches!(result, Err(TuningError::Invalid(_))));

        let result = Tuning::from_json(r#"{ "fall_factor_min": 4.0, "fall_factor_max": 2.0 }"#);
        assert!(matches!(result, Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_spawn_chance_out_of_range_rejected() {
        assert!(Tuning::from_json(r#"{ "spawn_chance": 1.5 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "spawn_chance": -0.1 }"#).is_err());
        assert!(Tuning::from_json(r#"{ "spawn_chance": 0.0 }"#).is_ok());
        assert!(Tuning::from_json(r#"{ "spawn_chance": 1.0 }"#).is_ok());
    }

    #[test]
    fn test_non_positive_sizes_rejected() {
        let fields = [
            "playfield_width",
            "playfield_height",
            "paddle_width",
            "paddle_height",
            "item_size",
        ];
        for field in fields {
            let json = format!(r#"{{ "{field}": 0.0 }}"#);
            let err = Tuning::from_json(&json).unwrap_err();
            assert!(err.to_string().contains(field), "{err}");
        }
    }
}
