use std::future::Future;

use super::snake::{GameOverSummary, SnakeFrame};

/// Receives the session's output: one frame after every tick and a summary
/// after every game-over.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, frame: SnakeFrame) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
