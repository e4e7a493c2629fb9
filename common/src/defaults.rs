pub const GRID_COLS: u32 = 20;
pub const GRID_ROWS: u32 = 20;
pub const INITIAL_LENGTH: usize = 3;
pub const SCORE_PER_FOOD: u32 = 100;
pub const TICK_INTERVAL_MS: u32 = 100;

// Head of a fresh snake; the body trails to the left of it.
pub const START_X: i32 = 3;
pub const START_Y: i32 = 3;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;

pub const HIGH_SCORE_KEY: &str = "high_score";
pub const HIGH_SCORE_FILE_NAME: &str = "highscore.yaml";
