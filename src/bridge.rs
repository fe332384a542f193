#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::debug;

use crate::polyomino::{Cell, Polyomino};

/// Outcome of dropping a piece onto the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The piece was committed; carries the new right-edge profile.
    Accepted(Vec<i32>),
    /// The piece touches no row of the previous right edge. Nothing was committed.
    Rejected,
}

impl Placement {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Placement::Accepted(_))
    }
}

/// Every cell placed so far, plus the rows of the last piece's rightmost column.
#[derive(Resource, Debug, Clone, Default)]
pub struct BridgeTrack {
    cells: Vec<Cell>,
    right_edge: Vec<i32>,
}

impl BridgeTrack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn right_edge(&self) -> &[i32] {
        &self.right_edge
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.right_edge.clear();
    }

    /// Checks whether `piece` dropped at `position` touches the bridge and commits it if so.
    ///
    /// The first piece of a game always sticks. After that the piece's leftmost
    /// column must share at least one absolute row with the previous piece's
    /// rightmost column.
    pub fn try_place(&mut self, piece: &Polyomino, position: Cell) -> Placement {
        if !self.is_empty() {
            let left_edge = piece.left_edge(position.y);
            if !rows_touch(&self.right_edge, &left_edge) {
                debug!(
                    "Rejected piece at ({}, {}): left edge {left_edge:?} misses {:?}",
                    position.x, position.y, self.right_edge
                );
                return Placement::Rejected;
            }
        }

        self.cells.extend(piece.absolute_cells(position));
        self.right_edge = piece.right_edge(position.y);
        debug!(
            "Placed {} cells at ({}, {}), right edge now {:?}",
            piece.len(),
            position.x,
            position.y,
            self.right_edge
        );

        Placement::Accepted(self.right_edge.clone())
    }
}

/// Whether two sorted row lists share at least one row.
#[must_use]
pub fn rows_touch(a: &[i32], b: &[i32]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => return true,
        }
    }
    false
}
