#![warn(clippy::all, clippy::pedantic)]

use bevy_ecs::prelude::*;
use log::{debug, info, trace};
use std::time::Duration;

use crate::bridge::{BridgeTrack, Placement};
use crate::components::{FallDirection, FallingPiece, GameState, Input, PieceRng};
use crate::game::{LANE_HEIGHT, step_period_for_score};

/// What a single game tick amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Placed,
    GameOver,
}

/// Puts a fresh game into the world: empty bridge, zero score, opening piece.
/// The random source is kept so a seeded session stays reproducible across games.
pub fn reset_game(world: &mut World) {
    if !world.contains_resource::<PieceRng>() {
        world.insert_resource(PieceRng::new());
    }
    world.insert_resource(BridgeTrack::new());
    world.insert_resource(GameState::default());
    world.insert_resource(Input::default());

    let first = FallingPiece::first(&mut world.resource_mut::<PieceRng>());
    debug!(
        "Spawned opening piece of {} cells ({}x{})",
        first.shape.len(),
        first.shape.width(),
        first.shape.height()
    );
    world.insert_resource(first);
}

pub fn rotation_system(world: &mut World) {
    let input = world.resource::<Input>().clone();
    if !input.rotate_left && !input.rotate_right {
        return;
    }

    let mut falling = world.resource_mut::<FallingPiece>();
    if input.rotate_left {
        falling.shape.rotate_left();
        debug!("Rotated piece left");
    }
    if input.rotate_right {
        falling.shape.rotate_right();
        debug!("Rotated piece right");
    }
}

/// Moves the piece along the lane by the number of steps the elapsed time pays for,
/// then bounces or wraps it at the lane edges.
pub fn movement_system(world: &mut World, delta: Duration) {
    let steps = world.resource_mut::<GameState>().clock.advance(delta);

    let mut falling = world.resource_mut::<FallingPiece>();
    let piece = &mut *falling;

    for _ in 0..steps {
        piece.position.y += piece.direction.step();
    }

    let height = piece.shape.height();
    let past_edge = match piece.direction {
        FallDirection::Up => piece.position.y <= -height,
        FallDirection::Down => piece.position.y >= LANE_HEIGHT,
    };

    if past_edge {
        if piece.reverses {
            piece.direction = piece.direction.reversed();
            trace!("Piece bounced, now heading {:?}", piece.direction);
        } else {
            piece.position.y -= (height + LANE_HEIGHT) * piece.direction.step();
            trace!("Piece wrapped to row {}", piece.position.y);
        }
    }
}

/// Drops the falling piece if requested. Returns the placement result, or `None`
/// when no drop was asked for.
pub fn drop_system(world: &mut World) -> Option<Placement> {
    if !world.resource::<Input>().drop {
        return None;
    }

    let falling = world.resource::<FallingPiece>().clone();
    let placement = world
        .resource_mut::<BridgeTrack>()
        .try_place(&falling.shape, falling.position);

    match placement {
        Placement::Rejected => {
            let mut game_state = world.resource_mut::<GameState>();
            game_state.game_over = true;
            info!("Piece missed the bridge, final score {}", game_state.score);
        }
        Placement::Accepted(_) => {
            {
                let mut game_state = world.resource_mut::<GameState>();
                game_state.score += u32::try_from(falling.shape.width()).unwrap_or(0);
                game_state.pieces_placed += 1;
                if let Some(period) = step_period_for_score(game_state.score) {
                    game_state.clock.period = period;
                }
                debug!(
                    "Score {} after {} pieces, step period {:?}",
                    game_state.score, game_state.pieces_placed, game_state.clock.period
                );
            }

            let next = {
                let mut rng = world.resource_mut::<PieceRng>();
                let cells = rng.piece_cells();
                let shape = rng.polyomino(cells);
                let reverses = rng.coin();
                FallingPiece::spawn(
                    shape,
                    falling.position.x + falling.shape.width(),
                    reverses,
                )
            };
            world.insert_resource(next);
        }
    }

    Some(placement)
}

/// Runs one frame of the game: rotation, movement, then drop. Input is consumed.
pub fn game_tick_system(world: &mut World, delta: Duration) -> TickOutcome {
    if world.resource::<GameState>().game_over {
        world.resource_mut::<Input>().clear();
        return TickOutcome::GameOver;
    }

    trace!("Game tick with delta: {delta:?}");

    rotation_system(world);
    movement_system(world, delta);
    let placement = drop_system(world);

    world.resource_mut::<Input>().clear();

    match placement {
        Some(Placement::Rejected) => TickOutcome::GameOver,
        Some(Placement::Accepted(_)) => TickOutcome::Placed,
        None => TickOutcome::Running,
    }
}
