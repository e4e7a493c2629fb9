use eframe::egui;
use snake_common::games::snake::SnakeCommand;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::state::{ClientCommand, SharedState};
use super::game_ui::GameUi;
use super::input;

// Keeps the game-over flash animating between session frames.
const REPAINT_INTERVAL: Duration = Duration::from_millis(30);

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    game_ui: GameUi,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, command_tx: mpsc::UnboundedSender<ClientCommand>) -> Self {
        Self {
            shared_state,
            command_tx,
            game_ui: GameUi::new(),
        }
    }

    fn send(&self, command: SnakeCommand) {
        let _ = self.command_tx.send(ClientCommand::Game(command));
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        for direction in input::pressed_directions(ctx) {
            self.send(SnakeCommand::Turn(direction));
        }

        let frame = self.shared_state.frame();
        let game_over = self.shared_state.game_over();

        egui::TopBottomPanel::top("score_bar").show(ctx, |ui| {
            self.game_ui.render_scores(ui, frame.as_ref());
        });

        let command = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.game_ui
                    .render_game(ui, frame.as_ref(), game_over.as_ref())
            })
            .inner;

        if let Some(command) = command {
            self.send(command);
        }

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
