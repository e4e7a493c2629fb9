use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::defaults::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        if self.width < 200 || self.height < 200 {
            return Err("window must be at least 200x200".to_string());
        }
        if self.width > 4000 || self.height > 4000 {
            return Err("window must not exceed 4000x4000".to_string());
        }
        Ok(())
    }
}
