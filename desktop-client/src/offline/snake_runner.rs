use snake_common::games::snake::{SnakeSession, SnakeSessionSettings, SnakeSessionState};
use snake_common::log;
use snake_common::score_store::ScoreStore;
use tokio::sync::{mpsc, watch};

use crate::state::{ClientCommand, SharedState};
use super::LocalBroadcaster;

/// Runs the session and forwards UI commands to it until `Quit` arrives or
/// every command sender is gone.
pub async fn run_snake_game(
    shared_state: SharedState,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    settings: SnakeSessionSettings,
    score_store: Box<dyn ScoreStore>,
    seed: u64,
) {
    let session_state = SnakeSessionState::create(&settings, score_store, seed);
    let broadcaster = LocalBroadcaster::new(shared_state);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let session_for_run = session_state.clone();
    let mut game_handle = tokio::spawn(async move {
        SnakeSession::run(session_for_run, broadcaster, shutdown_rx).await
    });

    loop {
        tokio::select! {
            result = &mut game_handle => {
                if let Err(e) = result {
                    log!("Snake session ended unexpectedly: {}", e);
                }
                return;
            }
            command = command_rx.recv() => {
                match command {
                    Some(ClientCommand::Game(command)) => {
                        SnakeSession::handle_command(&session_state, command).await;
                    }
                    Some(ClientCommand::Quit) | None => break,
                }
            }
        }
    }

    let _ = shutdown_tx.send(true);
    match game_handle.await {
        Ok(summary) => log!(
            "Played {} rounds, best score {}",
            summary.rounds,
            summary.high_score
        ),
        Err(e) => log!("Snake session ended unexpectedly: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::InMemoryContentProvider;
    use snake_common::games::snake::{Direction, SnakeCommand};
    use snake_common::score_store::ConfigScoreStore;
    use std::time::Duration;

    fn fast_settings() -> SnakeSessionSettings {
        SnakeSessionSettings {
            tick_interval: Duration::from_millis(10),
            ..SnakeSessionSettings::default()
        }
    }

    #[tokio::test]
    async fn test_quit_stops_runner_and_frames_were_published() {
        let shared_state = SharedState::new();
        let (command_tx, mut command_rx) = mpsc::unbounded_channel();
        let store = ConfigScoreStore::new(InMemoryContentProvider::new());

        let runner_state = shared_state.clone();
        let runner = tokio::spawn(async move {
            run_snake_game(
                runner_state,
                &mut command_rx,
                fast_settings(),
                Box::new(store),
                5,
            )
            .await;
        });

        command_tx
            .send(ClientCommand::Game(SnakeCommand::Turn(Direction::Down)))
            .unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        command_tx.send(ClientCommand::Quit).unwrap();

        tokio::time::timeout(Duration::from_secs(5), runner)
            .await
            .expect("runner should stop after Quit")
            .unwrap();

        let frame = shared_state.frame().expect("at least one frame");
        assert!(frame.tick >= 1);
    }

    #[tokio::test]
    async fn test_dropping_all_senders_stops_runner() {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<ClientCommand>();
        drop(command_tx);
        let store = ConfigScoreStore::new(InMemoryContentProvider::new());

        tokio::time::timeout(
            Duration::from_secs(5),
            run_snake_game(
                SharedState::new(),
                &mut command_rx,
                fast_settings(),
                Box::new(store),
                5,
            ),
        )
        .await
        .expect("runner should stop without senders");
    }
}
