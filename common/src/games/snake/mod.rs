mod events;
mod frame;
mod game_engine;
mod session;
mod settings;
mod snake;
mod types;

pub use events::{GameEvent, GameOverSummary};
pub use frame::SnakeFrame;
pub use game_engine::{GameEngine, TickOutcome};
pub use session::{SessionSummary, SnakeCommand, SnakeSession, SnakeSessionState};
pub use settings::SnakeSessionSettings;
pub use snake::Snake;
pub use types::{Direction, FieldSize, GameOverReason, Point};
