#![warn(clippy::all, clippy::pedantic)]

pub mod game_tests;
pub mod systems_tests;

// Import test utilities
#[cfg(test)]
pub mod test_utils {
    use crate::bridge::BridgeTrack;
    use crate::components::{FallingPiece, PieceRng};
    use crate::polyomino::{Cell, Polyomino};
    use crate::systems::reset_game;
    use bevy_ecs::prelude::*;
    use std::collections::BTreeSet;

    // Helper function to create a seeded game world
    #[must_use]
    pub fn create_test_world(seed: u64) -> World {
        let mut world = World::new();
        world.insert_resource(PieceRng::with_seed(seed));
        reset_game(&mut world);
        world
    }

    // Helper to build a shape from (x, y) pairs
    #[must_use]
    pub fn shape(cells: &[(i32, i32)]) -> Polyomino {
        Polyomino::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y)))
            .expect("test shape should be valid")
    }

    // Vertical bar of `len` cells
    #[must_use]
    pub fn bar(len: i32) -> Polyomino {
        Polyomino::from_cells((0..len).map(|y| Cell::new(0, y))).expect("bar should be valid")
    }

    #[must_use]
    pub fn cell_set(piece: &Polyomino) -> BTreeSet<Cell> {
        piece.cells().iter().copied().collect()
    }

    // Bridge with one piece already placed
    #[must_use]
    pub fn bridge_with(piece: &Polyomino, position: Cell) -> BridgeTrack {
        let mut bridge = BridgeTrack::new();
        assert!(bridge.try_place(piece, position).is_accepted());
        bridge
    }

    // Replaces the falling piece, keeping it at `position`
    pub fn set_falling(world: &mut World, shape: Polyomino, position: Cell, reverses: bool) {
        let mut piece = FallingPiece::spawn(shape, position.x, reverses);
        piece.position = position;
        world.insert_resource(piece);
    }
}
