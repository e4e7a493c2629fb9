mod app;
mod colors;
mod game_ui;
mod input;

pub use app::SnakeApp;
