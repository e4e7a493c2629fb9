use eframe::egui;
use snake_common::games::snake::{GameOverSummary, SnakeCommand, SnakeFrame};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Game(SnakeCommand),
    Quit,
}

#[derive(Debug, Clone)]
pub struct GameOverNotice {
    pub summary: GameOverSummary,
    pub received_at: Instant,
}

#[derive(Default)]
struct Inner {
    frame: Option<SnakeFrame>,
    game_over: Option<GameOverNotice>,
    context: Option<egui::Context>,
}

/// State shared between the session thread and the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<Mutex<Inner>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves plain data behind, so keep using it.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn has_context(&self) -> bool {
        self.lock().context.is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        self.lock().context = Some(ctx);
    }

    pub fn update_frame(&self, frame: SnakeFrame) {
        let context = {
            let mut inner = self.lock();
            inner.frame = Some(frame);
            inner.context.clone()
        };
        if let Some(ctx) = context {
            ctx.request_repaint();
        }
    }

    pub fn frame(&self) -> Option<SnakeFrame> {
        self.lock().frame.clone()
    }

    pub fn set_game_over(&self, summary: GameOverSummary) {
        self.lock().game_over = Some(GameOverNotice {
            summary,
            received_at: Instant::now(),
        });
    }

    pub fn game_over(&self) -> Option<GameOverNotice> {
        self.lock().game_over.clone()
    }
}
