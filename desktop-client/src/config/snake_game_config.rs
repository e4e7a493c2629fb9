use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::defaults::{GRID_COLS, GRID_ROWS, SCORE_PER_FOOD, TICK_INTERVAL_MS};
use snake_common::games::snake::SnakeSessionSettings;
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeGameConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub tick_interval_ms: u32,
    pub score_per_food: u32,
}

impl Default for SnakeGameConfig {
    fn default() -> Self {
        Self {
            field_width: GRID_COLS,
            field_height: GRID_ROWS,
            tick_interval_ms: TICK_INTERVAL_MS,
            score_per_food: SCORE_PER_FOOD,
        }
    }
}

impl SnakeGameConfig {
    pub fn session_settings(&self) -> SnakeSessionSettings {
        SnakeSessionSettings {
            field_width: self.field_width,
            field_height: self.field_height,
            score_per_food: self.score_per_food,
            tick_interval: Duration::from_millis(self.tick_interval_ms as u64),
            ..SnakeSessionSettings::default()
        }
    }
}

impl Validate for SnakeGameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_height < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if self.field_width > 50 || self.field_height > 50 {
            return Err("field dimensions must not exceed 50x50".to_string());
        }
        if self.tick_interval_ms < 50 {
            return Err("tick_interval_ms must be at least 50".to_string());
        }
        if self.tick_interval_ms > 5000 {
            return Err("tick_interval_ms must not exceed 5000".to_string());
        }
        if self.score_per_food == 0 {
            return Err("score_per_food must be greater than 0".to_string());
        }
        let max_score_per_food = u32::MAX / (self.field_width * self.field_height);
        if self.score_per_food > max_score_per_food {
            return Err(format!(
                "score_per_food must not exceed {} on a {}x{} field",
                max_score_per_food, self.field_width, self.field_height
            ));
        }
        self.session_settings().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_maps_to_default_session_settings() {
        let settings = SnakeGameConfig::default().session_settings();

        assert_eq!(settings, SnakeSessionSettings::default());
    }

    #[test]
    fn test_too_fast_tick_is_rejected() {
        let config = SnakeGameConfig {
            tick_interval_ms: 10,
            ..SnakeGameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_score_per_food_is_rejected() {
        let config = SnakeGameConfig {
            score_per_food: u32::MAX,
            ..SnakeGameConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_small_field_is_rejected() {
        let config = SnakeGameConfig {
            field_width: 4,
            ..SnakeGameConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
