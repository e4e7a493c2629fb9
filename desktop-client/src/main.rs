mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_common::config::ConfigManager;
use snake_common::score_store::ConfigScoreStore;
use snake_common::{log, log_warn, logger};
use tokio::sync::mpsc;

use config::{get_config_manager, Config};
use offline::run_snake_game;
use state::{ClientCommand, SharedState};
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    /// YAML config file; defaults to snake_client_config.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(path: Option<&str>) -> Config {
    let config_manager = match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };

    match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log_warn!("Using default config: {}", e);
            Config::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(args.config.as_deref());
    let settings = config.game.session_settings();
    let high_score_path = config.high_score_path();
    let seed = args.seed.unwrap_or_else(rand::random);
    log!("High scores are kept in {}", high_score_path.display());

    let shared_state = SharedState::new();
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let game_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log_warn!("Failed to start game runtime: {}", e);
                return;
            }
        };
        let score_store = ConfigScoreStore::from_yaml_file(high_score_path);
        rt.block_on(run_snake_game(
            shared_state_clone,
            &mut command_rx,
            settings,
            Box::new(score_store),
            seed,
        ));
    });

    let window_size = [config.window.width as f32, config.window.height as f32];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_resizable(false)
            .with_title("Snake"),
        ..Default::default()
    };

    let app_command_tx = command_tx.clone();
    let run_result = eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeApp::new(shared_state, app_command_tx)))),
    );

    let _ = command_tx.send(ClientCommand::Quit);
    if game_thread.join().is_err() {
        log_warn!("Game thread panicked");
    }

    run_result?;
    Ok(())
}
