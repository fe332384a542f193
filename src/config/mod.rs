pub mod loader;

use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

use crate::game::VIEW_COLUMNS;

// Global presentation settings, read by the renderer and the main loop
pub static CONFIG: once_cell::sync::Lazy<RwLock<Config>> =
    once_cell::sync::Lazy::new(|| RwLock::new(Config::default()));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub session: SessionConfig,
}

// Largest display sizes a terminal can sensibly draw
pub const MAX_CELL_WIDTH: u16 = 8;
pub const MAX_VIEW_COLUMNS: u16 = 200;

// How the lane is drawn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frame_rate_ms: u64,
    pub cell_width: u16, // Terminal columns per lane cell
    pub view_columns: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_rate_ms: 33,
            cell_width: 2,
            view_columns: VIEW_COLUMNS,
        }
    }
}

impl DisplayConfig {
    /// Copy with `cell_width` and `view_columns` forced into `1..=MAX`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            cell_width: self.cell_width.clamp(1, MAX_CELL_WIDTH),
            view_columns: self.view_columns.clamp(1, MAX_VIEW_COLUMNS),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    // Fixed seed for a reproducible piece sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Config {
    /// Snapshot of the active configuration.
    #[must_use]
    pub fn current() -> Self {
        CONFIG
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the active configuration.
    pub fn install(config: Config) {
        *CONFIG.write().unwrap_or_else(PoisonError::into_inner) = config;
    }
}
