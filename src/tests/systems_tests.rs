#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::bridge::{BridgeTrack, Placement};
    use crate::components::*;
    use crate::game::{FIRST_PIECE_CELLS, INITIAL_STEP_PERIOD, LANE_HEIGHT, step_period_for_score};
    use crate::polyomino::Cell;
    use crate::systems::*;
    use crate::tests::test_utils::{bar, cell_set, create_test_world, set_falling, shape};
    use bevy_ecs::prelude::*;
    use std::time::Duration;

    fn set_period(world: &mut World, millis: u64) {
        world.resource_mut::<GameState>().clock = StepClock::new(Duration::from_millis(millis));
    }

    #[test]
    fn test_reset_game() {
        let world = create_test_world(1);

        assert!(world.resource::<BridgeTrack>().is_empty());

        let game_state = world.resource::<GameState>();
        assert_eq!(game_state.score, 0);
        assert!(!game_state.game_over);
        assert_eq!(game_state.clock.period, INITIAL_STEP_PERIOD);

        let falling = world.resource::<FallingPiece>();
        assert_eq!(falling.shape.len(), FIRST_PIECE_CELLS);
        assert_eq!(falling.position, Cell::new(0, -falling.shape.height()));
        assert_eq!(falling.direction, FallDirection::Down);
        assert!(!falling.reverses);
    }

    #[test]
    fn test_movement_steps_with_elapsed_time() {
        let mut world = create_test_world(1);
        set_falling(&mut world, bar(2), Cell::new(0, 0), false);
        set_period(&mut world, 100);

        movement_system(&mut world, Duration::from_millis(250));

        assert_eq!(world.resource::<FallingPiece>().position.y, 2);
        assert_eq!(
            world.resource::<GameState>().clock.accumulated,
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_movement_wraps_past_bottom() {
        let mut world = create_test_world(1);
        set_falling(&mut world, bar(2), Cell::new(0, LANE_HEIGHT - 1), false);
        set_period(&mut world, 100);

        movement_system(&mut world, Duration::from_millis(150));

        let falling = world.resource::<FallingPiece>();
        assert_eq!(falling.position.y, -2);
        assert_eq!(falling.direction, FallDirection::Down);
    }

    #[test]
    fn test_movement_bounces_at_bottom() {
        let mut world = create_test_world(1);
        set_falling(&mut world, bar(2), Cell::new(0, LANE_HEIGHT - 1), true);
        set_period(&mut world, 100);

        movement_system(&mut world, Duration::from_millis(150));

        let falling = world.resource::<FallingPiece>();
        assert_eq!(falling.position.y, LANE_HEIGHT);
        assert_eq!(falling.direction, FallDirection::Up);

        // Heading up now, so the next step moves back into the lane
        movement_system(&mut world, Duration::from_millis(100));
        assert_eq!(world.resource::<FallingPiece>().position.y, LANE_HEIGHT - 1);
    }

    #[test]
    fn test_movement_wraps_past_top() {
        let mut world = create_test_world(1);
        set_falling(&mut world, bar(2), Cell::new(0, -1), false);
        world.resource_mut::<FallingPiece>().direction = FallDirection::Up;
        set_period(&mut world, 100);

        movement_system(&mut world, Duration::from_millis(150));

        assert_eq!(world.resource::<FallingPiece>().position.y, LANE_HEIGHT);
    }

    #[test]
    fn test_movement_bounces_at_top() {
        let mut world = create_test_world(1);
        set_falling(&mut world, bar(3), Cell::new(0, -2), true);
        world.resource_mut::<FallingPiece>().direction = FallDirection::Up;
        set_period(&mut world, 100);

        movement_system(&mut world, Duration::from_millis(150));

        let falling = world.resource::<FallingPiece>();
        assert_eq!(falling.position.y, -3);
        assert_eq!(falling.direction, FallDirection::Down);
    }

    #[test]
    fn test_rotation_system() {
        let mut world = create_test_world(1);
        let piece = shape(&[(0, 0), (0, 1), (0, 2), (1, 2)]);
        set_falling(&mut world, piece.clone(), Cell::new(0, 0), false);
        world.resource_mut::<Input>().rotate_right = true;

        rotation_system(&mut world);

        let mut expected = piece;
        expected.rotate_right();
        assert_eq!(world.resource::<FallingPiece>().shape, expected);
    }

    #[test]
    fn test_opposite_rotations_cancel() {
        let mut world = create_test_world(1);
        let piece = shape(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        set_falling(&mut world, piece.clone(), Cell::new(0, 0), false);
        {
            let mut input = world.resource_mut::<Input>();
            input.rotate_left = true;
            input.rotate_right = true;
        }

        rotation_system(&mut world);

        assert_eq!(
            cell_set(&world.resource::<FallingPiece>().shape),
            cell_set(&piece)
        );
    }

    #[test]
    fn test_no_drop_without_input() {
        let mut world = create_test_world(1);
        assert_eq!(drop_system(&mut world), None);
        assert!(world.resource::<BridgeTrack>().is_empty());
    }

    #[test]
    fn test_first_drop_is_accepted() {
        let mut world = create_test_world(4);
        let first = world.resource::<FallingPiece>().clone();
        world.resource_mut::<Input>().drop = true;

        let placement = drop_system(&mut world);
        assert!(matches!(placement, Some(Placement::Accepted(_))));

        let score = world.resource::<GameState>().score;
        assert_eq!(score, u32::try_from(first.shape.width()).unwrap());
        assert_eq!(world.resource::<GameState>().pieces_placed, 1);
        assert_eq!(
            Some(world.resource::<GameState>().clock.period),
            step_period_for_score(score)
        );

        let bridge = world.resource::<BridgeTrack>();
        let expected: Vec<Cell> = first.absolute_cells().collect();
        assert_eq!(bridge.cells(), expected.as_slice());

        // Next piece starts one bridge-width further right, just above the lane
        let next = world.resource::<FallingPiece>();
        assert_eq!(next.position.x, first.position.x + first.shape.width());
        assert_eq!(next.position.y, -next.shape.height());
        assert_eq!(next.direction, FallDirection::Down);
    }

    #[test]
    fn test_missed_drop_ends_game() {
        let mut world = create_test_world(4);
        world.resource_mut::<Input>().drop = true;
        assert!(drop_system(&mut world).is_some_and(|p| p.is_accepted()));

        let score = world.resource::<GameState>().score;
        let bridge_len = world.resource::<BridgeTrack>().cells().len();
        let x = world.resource::<FallingPiece>().position.x;
        set_falling(&mut world, bar(2), Cell::new(x, 100), false);

        assert_eq!(drop_system(&mut world), Some(Placement::Rejected));

        let game_state = world.resource::<GameState>();
        assert!(game_state.game_over);
        assert_eq!(game_state.score, score);
        assert_eq!(world.resource::<BridgeTrack>().cells().len(), bridge_len);
    }

    #[test]
    fn test_tick_consumes_input() {
        let mut world = create_test_world(2);
        world.resource_mut::<Input>().rotate_left = true;

        assert_eq!(
            game_tick_system(&mut world, Duration::from_millis(16)),
            TickOutcome::Running
        );

        let input = world.resource::<Input>();
        assert!(!input.rotate_left);
        assert!(!input.rotate_right);
        assert!(!input.drop);
    }

    #[test]
    fn test_tick_reports_placement_and_game_over() {
        let mut world = create_test_world(2);

        world.resource_mut::<Input>().drop = true;
        assert_eq!(
            game_tick_system(&mut world, Duration::ZERO),
            TickOutcome::Placed
        );

        let x = world.resource::<FallingPiece>().position.x;
        set_falling(&mut world, bar(1), Cell::new(x, 50), false);
        world.resource_mut::<Input>().drop = true;
        assert_eq!(
            game_tick_system(&mut world, Duration::ZERO),
            TickOutcome::GameOver
        );

        // Finished games stay finished
        world.resource_mut::<Input>().drop = true;
        assert_eq!(
            game_tick_system(&mut world, Duration::ZERO),
            TickOutcome::GameOver
        );
        assert!(!world.resource::<Input>().drop);
    }
}
