pub mod app;
pub mod bridge;
pub mod components;
pub mod config;
pub mod game;
pub mod menu_types;
pub mod polyomino;
pub mod systems;
pub mod ui;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

/// Wall-clock frame timer feeding elapsed time into the session.
#[derive(Debug, Clone)]
pub struct Time {
    delta: Duration,
    last_update: Instant,
}

impl Time {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delta: Duration::default(),
            last_update: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_update);
        self.last_update = now;
    }

    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
