#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use std::num::NonZeroUsize;
use std::time::Duration;

use crate::game::{FIRST_PIECE_CELLS, INITIAL_STEP_PERIOD, MAX_PIECE_CELLS, MIN_PIECE_CELLS};
use crate::polyomino::{Cell, Polyomino};

/// Random source for piece generation. Seedable so tests can replay a game.
#[derive(Resource, Debug, Clone)]
pub struct PieceRng(pub fastrand::Rng);

impl PieceRng {
    #[must_use]
    pub fn new() -> Self {
        Self(fastrand::Rng::new())
    }

    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }

    /// Cell count for every piece after the first.
    pub fn piece_cells(&mut self) -> usize {
        self.0.usize(MIN_PIECE_CELLS..=MAX_PIECE_CELLS)
    }

    pub fn coin(&mut self) -> bool {
        self.0.bool()
    }

    /// A random shape of `cells` cells; a zero count yields a single cell.
    pub fn polyomino(&mut self, cells: usize) -> Polyomino {
        let count = NonZeroUsize::new(cells).unwrap_or(NonZeroUsize::MIN);
        Polyomino::grow(count, &mut self.0)
    }
}

impl Default for PieceRng {
    fn default() -> Self {
        Self::new()
    }
}

/// Direction the falling piece travels along the lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallDirection {
    Down,
    Up,
}

impl FallDirection {
    #[must_use]
    pub fn step(self) -> i32 {
        match self {
            FallDirection::Down => 1,
            FallDirection::Up => -1,
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            FallDirection::Down => FallDirection::Up,
            FallDirection::Up => FallDirection::Down,
        }
    }
}

/// The piece currently oscillating over the lane, and where it is.
#[derive(Resource, Debug, Clone)]
pub struct FallingPiece {
    pub shape: Polyomino,
    pub position: Cell,
    pub direction: FallDirection,
    // Reversing pieces bounce at the lane edges, the others wrap around
    pub reverses: bool,
}

impl FallingPiece {
    /// Places `shape` just above the lane at column `x`, heading down.
    #[must_use]
    pub fn spawn(shape: Polyomino, x: i32, reverses: bool) -> Self {
        let position = Cell::new(x, -shape.height());
        Self {
            shape,
            position,
            direction: FallDirection::Down,
            reverses,
        }
    }

    /// The opening piece of a game.
    #[must_use]
    pub fn first(rng: &mut PieceRng) -> Self {
        Self::spawn(rng.polyomino(FIRST_PIECE_CELLS), 0, false)
    }

    pub fn absolute_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.shape.absolute_cells(self.position)
    }
}

/// Fixed-step accumulator: elapsed frame time is banked and spent one period at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepClock {
    pub period: Duration,
    pub accumulated: Duration,
}

impl StepClock {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
        }
    }

    /// Banks `delta` and returns how many whole steps are now due.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.accumulated += delta;
        let mut steps = 0;
        while !self.period.is_zero() && self.accumulated > self.period {
            self.accumulated -= self.period;
            steps += 1;
        }
        steps
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(INITIAL_STEP_PERIOD)
    }
}

#[derive(Debug, Resource, Clone, Default)]
pub struct GameState {
    pub score: u32,
    pub pieces_placed: u32,
    pub game_over: bool,
    pub clock: StepClock,
}

impl GameState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// Input state for keyboard controls. Each flag is one press and is cleared after every tick.
#[derive(Resource, Debug, Clone, Default)]
pub struct Input {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub drop: bool,
}

impl Input {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Best score of the session. Survives game resets, never goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore(u32);

impl HighScore {
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Folds a finished game's score in. Returns true when it set a new record.
    pub fn commit(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}
