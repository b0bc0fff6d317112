//! Point-in-envelope queries on an ST diagram.

use crate::math::StPoint;
use crate::obstacle::Obstacle;
use smallvec::SmallVec;
use std::cmp::Ordering;

/// Finds the obstacle whose envelope contains the point.
///
/// When several envelopes contain the point, the one with the smallest
/// [Obstacle::area] wins; equal areas resolve to the earliest obstacle.
/// Obstacles with a zero-duration window never match.
pub fn hit_test(obstacles: &[Obstacle], point: StPoint) -> Option<&Obstacle> {
    // `min_by` keeps the first of equal elements; -0.0 and 0.0 are equal
    obstacles
        .iter()
        .filter(|obs| obs.contains(point))
        .min_by(|a, b| a.area().partial_cmp(&b.area()).unwrap_or(Ordering::Equal))
}

/// Finds every obstacle whose envelope contains the point, in input order.
pub fn hits(obstacles: &[Obstacle], point: StPoint) -> SmallVec<[&Obstacle; 4]> {
    obstacles.iter().filter(|obs| obs.contains(point)).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::st;

    fn obstacle(id: i64, end_t: f64, start_up_s: f64) -> Obstacle {
        Obstacle {
            id,
            start_t: 0.0,
            end_t,
            start_low_s: 0.0,
            end_low_s: 0.0,
            start_up_s,
            end_up_s: start_up_s + 10.0,
        }
    }

    #[test]
    fn single_match() {
        let obstacles = [obstacle(1, 10.0, 10.0)];
        assert_eq!(hit_test(&obstacles, st(5.0, 10.0)).map(|o| o.id), Some(1));
        assert_eq!(hit_test(&obstacles, st(5.0, 16.0)), None);
        assert_eq!(hit_test(&obstacles, st(10.5, 1.0)), None);
    }

    #[test]
    fn smallest_area_wins() {
        // Areas 100 and 50
        let obstacles = [obstacle(1, 10.0, 10.0), obstacle(2, 5.0, 10.0)];
        assert_eq!(hit_test(&obstacles, st(5.0, 10.0)).map(|o| o.id), Some(2));
        assert_eq!(hits(&obstacles, st(5.0, 10.0)).len(), 2);
        // Only the larger one reaches t = 8
        assert_eq!(hit_test(&obstacles, st(8.0, 10.0)).map(|o| o.id), Some(1));
    }

    #[test]
    fn equal_areas_keep_input_order() {
        let obstacles = [obstacle(7, 10.0, 10.0), obstacle(-2, 10.0, 10.0)];
        assert_eq!(hit_test(&obstacles, st(1.0, 1.0)).map(|o| o.id), Some(7));
        let obstacles = [obstacle(-2, 10.0, 10.0), obstacle(7, 10.0, 10.0)];
        assert_eq!(hit_test(&obstacles, st(1.0, 1.0)).map(|o| o.id), Some(-2));
    }

    #[test]
    fn signed_zero_areas_keep_input_order() {
        let flat = Obstacle {
            start_up_s: 0.0,
            ..obstacle(1, 10.0, 0.0)
        };
        let negative_flat = Obstacle {
            id: 2,
            start_up_s: -0.0,
            ..flat
        };
        assert!(negative_flat.area().is_sign_negative());
        let obstacles = [flat, negative_flat];
        assert_eq!(hit_test(&obstacles, st(0.0, 0.0)).map(|o| o.id), Some(1));
    }

    #[test]
    fn degenerate_obstacles_are_skipped() {
        let obstacles = [obstacle(1, 0.0, 10.0), obstacle(2, 10.0, 10.0)];
        assert_eq!(hit_test(&obstacles, st(0.0, 5.0)).map(|o| o.id), Some(2));
        let obstacles = [obstacle(1, 0.0, 10.0)];
        assert_eq!(hit_test(&obstacles, st(0.0, 5.0)), None);
        assert!(hits(&obstacles, st(0.0, 5.0)).is_empty());
    }

    #[test]
    fn nothing_to_hit() {
        assert_eq!(hit_test(&[], st(0.0, 0.0)), None);
    }
}
