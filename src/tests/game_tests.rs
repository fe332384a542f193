#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::game::*;
    use std::time::Duration;

    #[test]
    fn test_lane_dimensions() {
        assert_eq!(LANE_HEIGHT, 10);
        assert_eq!(VIEW_COLUMNS, 12);
    }

    #[test]
    fn test_piece_sizes() {
        assert_eq!(FIRST_PIECE_CELLS, 4);
        assert!(MIN_PIECE_CELLS >= 1);
        assert!(MIN_PIECE_CELLS <= MAX_PIECE_CELLS);
        assert_eq!((MIN_PIECE_CELLS, MAX_PIECE_CELLS), (4, 8));
    }

    #[test]
    fn test_step_period_for_score() {
        assert_eq!(INITIAL_STEP_PERIOD, Duration::from_millis(400));
        assert_eq!(step_period_for_score(0), None);
        assert_eq!(step_period_for_score(1), Some(Duration::from_millis(500)));
        assert_eq!(step_period_for_score(4), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_step_period_shrinks_with_score() {
        let mut previous = step_period_for_score(1).unwrap();
        for score in 2..200 {
            let period = step_period_for_score(score).unwrap();
            assert!(period < previous);
            previous = period;
        }
    }
}
