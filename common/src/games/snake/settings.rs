use std::time::Duration;

use crate::defaults::{
    GRID_COLS, GRID_ROWS, INITIAL_LENGTH, SCORE_PER_FOOD, START_X, START_Y, TICK_INTERVAL_MS,
};
use super::types::{FieldSize, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub field_width: u32,
    pub field_height: u32,
    pub initial_length: usize,
    pub start_position: Point,
    pub score_per_food: u32,
    pub tick_interval: Duration,
}

impl Default for SnakeSessionSettings {
    fn default() -> Self {
        Self {
            field_width: GRID_COLS,
            field_height: GRID_ROWS,
            initial_length: INITIAL_LENGTH,
            start_position: Point::new(START_X, START_Y),
            score_per_food: SCORE_PER_FOOD,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS as u64),
        }
    }
}

impl SnakeSessionSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    /// Score of a snake that fills the whole field.
    pub fn max_score(&self) -> u64 {
        self.field_size().cell_count() as u64 * self.score_per_food as u64
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < 5 || self.field_height < 5 {
            return Err("Field must be at least 5x5".to_string());
        }
        if self.field_width > 100 || self.field_height > 100 {
            return Err("Field must not exceed 100x100".to_string());
        }
        if self.initial_length < INITIAL_LENGTH {
            return Err(format!(
                "Initial snake length must be at least {}",
                INITIAL_LENGTH
            ));
        }
        let start = self.start_position;
        let tail_x = start.x - (self.initial_length as i32 - 1);
        if tail_x < 0 || !self.field_size().contains(start) {
            return Err(format!(
                "Start position {} does not fit a snake of length {}",
                start, self.initial_length
            ));
        }
        if start.x + 1 >= self.field_width as i32 {
            return Err(format!("Start position {} leaves no room to move", start));
        }
        if self.score_per_food == 0 {
            return Err("Score per food must be greater than 0".to_string());
        }
        if self.max_score() > u32::MAX as u64 {
            return Err(format!(
                "Score per food {} can overflow the score on a {}x{} field",
                self.score_per_food, self.field_width, self.field_height
            ));
        }
        if self.tick_interval < Duration::from_millis(10) {
            return Err("Tick interval must be at least 10ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = SnakeSessionSettings::default();

        assert!(settings.validate().is_ok());
        assert_eq!(settings.field_size(), FieldSize::new(20, 20));
        assert_eq!(settings.tick_interval, Duration::from_millis(100));
    }

    #[test]
    fn test_start_too_close_to_left_edge_is_rejected() {
        let settings = SnakeSessionSettings {
            start_position: Point::new(1, 3),
            ..SnakeSessionSettings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_short_initial_snake_is_rejected() {
        let settings = SnakeSessionSettings {
            initial_length: 2,
            start_position: Point::new(5, 3),
            ..SnakeSessionSettings::default()
        };

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_score_per_food_that_can_overflow_is_rejected() {
        let settings = SnakeSessionSettings {
            score_per_food: u32::MAX,
            ..SnakeSessionSettings::default()
        };
        assert!(settings.validate().is_err());

        let largest = u32::MAX / settings.field_size().cell_count() as u32;
        let settings = SnakeSessionSettings {
            score_per_food: largest,
            ..settings
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_tiny_field_is_rejected() {
        let settings = SnakeSessionSettings {
            field_width: 4,
            ..SnakeSessionSettings::default()
        };

        assert!(settings.validate().is_err());
    }
}
