use snake_common::games::GameBroadcaster;
use snake_common::games::snake::{GameOverSummary, SnakeFrame};

use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, frame: SnakeFrame) {
        self.shared_state.update_frame(frame);
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        self.shared_state.set_game_over(summary);
    }
}
