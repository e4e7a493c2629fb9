use eframe::egui;
use snake_common::games::snake::Direction;

const KEY_BINDINGS: [(egui::Key, Direction); 8] = [
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::W, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
    (egui::Key::S, Direction::Down),
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::A, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
    (egui::Key::D, Direction::Right),
];

fn direction_for_key(key: egui::Key) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, direction)| *direction)
}

/// Directions pressed during this frame, in the order the keys went down.
pub fn pressed_directions(ctx: &egui::Context) -> Vec<Direction> {
    ctx.input(|i| directions_from_events(&i.events))
}

fn directions_from_events(events: &[egui::Event]) -> Vec<Direction> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => direction_for_key(*key),
            _ => None,
        })
        .collect()
}
