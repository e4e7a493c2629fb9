use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::time::interval;

use crate::games::{GameBroadcaster, SessionRng};
use crate::score_store::ScoreStore;
use crate::{log, log_warn};
use super::events::{GameEvent, GameOverSummary};
use super::game_engine::GameEngine;
use super::settings::SnakeSessionSettings;
use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub ticks: u64,
    pub rounds: u64,
    pub high_score: u32,
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub engine: Arc<Mutex<GameEngine>>,
    pub tick: Arc<Mutex<u64>>,
    pub tick_interval: Duration,
    pub seed: u64,
}

impl SnakeSessionState {
    pub fn create(
        settings: &SnakeSessionSettings,
        score_store: Box<dyn ScoreStore>,
        seed: u64,
    ) -> Self {
        let engine = GameEngine::new(settings, score_store, SessionRng::new(seed));

        Self {
            engine: Arc::new(Mutex::new(engine)),
            tick: Arc::new(Mutex::new(0u64)),
            tick_interval: settings.tick_interval,
            seed,
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Ticks the engine until `shutdown` becomes `true` or its sender is
    /// dropped. Ticks run one after another on this task only.
    pub async fn run(
        session_state: SnakeSessionState,
        broadcaster: impl GameBroadcaster,
        mut shutdown: watch::Receiver<bool>,
    ) -> SessionSummary {
        let mut tick_interval_timer = interval(session_state.tick_interval);
        log!(
            "Snake session started (seed {}, tick {:?})",
            session_state.seed,
            session_state.tick_interval
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = tick_interval_timer.tick() => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
            }

            let mut engine = session_state.engine.lock().await;
            engine.tick();
            let events = engine.take_events();

            let mut tick_value = session_state.tick.lock().await;
            *tick_value += 1;
            let frame = engine.frame(*tick_value);
            drop(tick_value);
            drop(engine);

            for summary in Self::collect_game_overs(&events, frame.round) {
                broadcaster.broadcast_game_over(summary).await;
            }
            broadcaster.broadcast_state(frame).await;
        }

        let summary = Self::summary(&session_state).await;
        log!(
            "Snake session stopped after {} ticks, {} rounds, high score {}",
            summary.ticks,
            summary.rounds,
            summary.high_score
        );
        summary
    }

    pub async fn handle_command(state: &SnakeSessionState, command: SnakeCommand) {
        let mut engine = state.engine.lock().await;
        match command {
            SnakeCommand::Turn(direction) => {
                engine.request_direction(direction);
            }
            SnakeCommand::Restart => {
                log!("Restarting round");
                engine.reset();
            }
        }
    }

    /// `round` is the round that is already running after the game-overs, so
    /// summaries count back from it.
    fn collect_game_overs(events: &[GameEvent], round: u64) -> Vec<GameOverSummary> {
        let game_overs: Vec<&GameEvent> = events
            .iter()
            .filter(|event| matches!(event, GameEvent::GameOver { .. }))
            .collect();
        let first_round = round.saturating_sub(game_overs.len() as u64);

        let mut summaries = Vec::with_capacity(game_overs.len());
        for event in events {
            match event {
                GameEvent::GameOver {
                    reason,
                    final_score,
                    high_score,
                    new_high_score,
                } => summaries.push(GameOverSummary {
                    round: first_round + summaries.len() as u64,
                    reason: *reason,
                    final_score: *final_score,
                    high_score: *high_score,
                    new_high_score: *new_high_score,
                }),
                GameEvent::HighScoreNotSaved { score, error } => {
                    log_warn!("High score {} is only kept in memory: {}", score, error);
                }
                GameEvent::FoodEaten { .. } | GameEvent::ScoreChanged { .. } => {}
            }
        }
        summaries
    }

    async fn summary(state: &SnakeSessionState) -> SessionSummary {
        let engine = state.engine.lock().await;
        let ticks = *state.tick.lock().await;
        SessionSummary {
            ticks,
            rounds: engine.round() + 1,
            high_score: engine.high_score(),
        }
    }
}
