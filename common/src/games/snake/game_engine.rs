use std::mem;

use crate::games::SessionRng;
use crate::score_store::ScoreStore;
use crate::{log, log_warn};
use super::events::GameEvent;
use super::frame::SnakeFrame;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::types::{Direction, FieldSize, GameOverReason, Point};

const START_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver(GameOverReason),
}

/// Single-player snake rules. The engine never fails: collisions end the
/// round and restart it, persistence problems are logged and reported as
/// events.
pub struct GameEngine {
    field_size: FieldSize,
    initial_length: usize,
    start_position: Point,
    score_per_food: u32,
    snake: Snake,
    pending_direction: Direction,
    food: Point,
    score: u32,
    high_score: u32,
    round: u64,
    rng: SessionRng,
    score_store: Box<dyn ScoreStore>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    /// `settings` are expected to pass `SnakeSessionSettings::validate`.
    pub fn new(
        settings: &SnakeSessionSettings,
        score_store: Box<dyn ScoreStore>,
        rng: SessionRng,
    ) -> Self {
        let high_score = match score_store.get() {
            Ok(Some(score)) => score,
            Ok(None) => 0,
            Err(e) => {
                log_warn!("Could not load high score, starting from 0: {}", e);
                0
            }
        };

        let snake = Snake::new(
            settings.start_position,
            START_DIRECTION,
            settings.initial_length,
        );
        let mut engine = Self {
            field_size: settings.field_size(),
            initial_length: settings.initial_length,
            start_position: settings.start_position,
            score_per_food: settings.score_per_food,
            snake,
            pending_direction: START_DIRECTION,
            food: settings.start_position,
            score: 0,
            high_score,
            round: 0,
            rng,
            score_store,
            events: Vec::new(),
        };
        if let Some(food) = engine.place_food() {
            engine.food = food;
        }
        engine
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    pub fn frame(&self, tick: u64) -> SnakeFrame {
        SnakeFrame {
            tick,
            round: self.round,
            field_size: self.field_size,
            segments: self.snake.cells().collect(),
            head_direction: self.snake.direction(),
            food: self.food,
            score: self.score,
            high_score: self.high_score,
        }
    }

    /// Stores `direction` for the next tick unless it reverses the current
    /// travel direction. The latest accepted request wins.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.snake.direction()) {
            return false;
        }
        self.pending_direction = direction;
        true
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.snake.set_direction(self.pending_direction);
        let new_head = self.snake.head().step(self.snake.direction());

        if !self.field_size.contains(new_head) {
            return self.game_over(GameOverReason::WallCollision);
        }
        if self.snake.contains(new_head) {
            return self.game_over(GameOverReason::SelfCollision);
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);
        if !ate {
            return TickOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.score_per_food);
        log!("Food eaten at {}. Score: {}", new_head, self.score);
        self.events.push(GameEvent::FoodEaten {
            at: new_head,
            score: self.score,
        });
        self.events.push(GameEvent::ScoreChanged { score: self.score });

        match self.place_food() {
            Some(food) => {
                self.food = food;
                TickOutcome::Ate
            }
            None => self.game_over(GameOverReason::BoardFull),
        }
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(self.start_position, START_DIRECTION, self.initial_length);
        self.pending_direction = START_DIRECTION;
        if let Some(food) = self.place_food() {
            self.food = food;
        }
        self.score = 0;
        self.round += 1;
        self.events.push(GameEvent::ScoreChanged { score: 0 });
    }

    /// Uniform rejection sampling over the whole field. `None` only when the
    /// snake covers every cell.
    pub fn place_food(&mut self) -> Option<Point> {
        if self.snake.len() >= self.field_size.cell_count() {
            return None;
        }
        loop {
            let candidate = Point::new(
                self.rng.random_range(0..self.field_size.width as i32),
                self.rng.random_range(0..self.field_size.height as i32),
            );
            if !self.snake.contains(candidate) {
                return Some(candidate);
            }
        }
    }

    fn game_over(&mut self, reason: GameOverReason) -> TickOutcome {
        let final_score = self.score;
        let new_high_score = final_score > self.high_score;

        if new_high_score {
            self.high_score = final_score;
            match self.score_store.put(final_score) {
                Ok(()) => log!("New high score: {}", final_score),
                Err(e) => {
                    log_warn!("Failed to save high score {}: {}", final_score, e);
                    self.events.push(GameEvent::HighScoreNotSaved {
                        score: final_score,
                        error: e,
                    });
                }
            }
        }

        log!(
            "Game over: snake {} at {}. Score: {}, high score: {}",
            reason,
            self.snake.head(),
            final_score,
            self.high_score
        );
        self.events.push(GameEvent::GameOver {
            reason,
            final_score,
            high_score: self.high_score,
            new_high_score,
        });

        self.reset();
        TickOutcome::GameOver(reason)
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, cells: &[Point], direction: Direction) {
        self.snake = Snake::from_cells(cells.iter().copied(), direction);
        self.pending_direction = direction;
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
