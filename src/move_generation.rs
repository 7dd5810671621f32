//! Knight move generation.

use smallvec::SmallVec;

use crate::board::Square;

/// The eight knight-move offsets in (row, col) order.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A list of candidate squares sized for the knight's branching factor.
pub type SquareList = SmallVec<[Square; 8]>;

/// All eight candidate destinations for a knight standing on `origin`.
///
/// No bounds filtering happens here; some candidates may be off-board, and
/// it is the caller's job to exclude them.
pub fn knight_targets(origin: Square) -> SquareList {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(dr, dc)| Square::new(origin.row + dr, origin.col + dc))
        .collect()
}

/// Whether `from` -> `to` has the shape of a knight move.
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let dr = (from.row - to.row).abs();
    let dc = (from.col - to.col).abs();
    (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_eight_candidates() {
        for &origin in &[
            Square::new(0, 0),
            Square::new(2, 2),
            Square::new(-3, 7),
            Square::new(100, -100),
        ] {
            assert_eq!(knight_targets(origin).len(), 8);
        }
    }

    #[test]
    fn test_offsets_symmetric_under_negation() {
        for &(dr, dc) in KNIGHT_OFFSETS.iter() {
            assert!(
                KNIGHT_OFFSETS.contains(&(-dr, -dc)),
                "offset ({}, {}) has no negated counterpart",
                dr,
                dc
            );
        }
    }

    #[test]
    fn test_targets_are_mutual() {
        let origin = Square::new(3, 3);
        for target in knight_targets(origin) {
            assert!(knight_targets(target).contains(&origin));
        }
    }

    #[test]
    fn test_no_bounds_filtering() {
        let targets = knight_targets(Square::new(0, 0));
        assert!(targets.contains(&Square::new(-2, -1)));
        assert!(targets.contains(&Square::new(2, 1)));
    }

    #[test]
    fn test_is_knight_move() {
        let origin = Square::new(4, 4);
        for target in knight_targets(origin) {
            assert!(is_knight_move(origin, target));
            assert!(is_knight_move(target, origin));
        }
        assert!(!is_knight_move(origin, Square::new(4, 4)));
        assert!(!is_knight_move(origin, Square::new(5, 5)));
        assert!(!is_knight_move(origin, Square::new(4, 6)));
    }
}
