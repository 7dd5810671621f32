use crate::board::Square;
use crate::move_generation::knight_targets;

/// An in-progress knight's tour: the ordered sequence of squares visited so
/// far on a fixed-size board.
///
/// A tour is never mutated after construction. Continuations are built with
/// [`Tour::extended`], which leaves the parent untouched, so frontier
/// entries stay independent of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    size: i32,
    steps: Vec<Square>,
}

impl Tour {
    /// The empty tour on a `size` x `size` board. Nothing has been visited
    /// yet, so the knight may start anywhere.
    pub fn new(size: i32) -> Self {
        Self {
            size,
            steps: Vec::new(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Number of moves made so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Square] {
        &self.steps
    }

    pub fn last(&self) -> Option<Square> {
        self.steps.last().copied()
    }

    pub fn contains(&self, square: Square) -> bool {
        self.steps.contains(&square)
    }

    /// Whether every square on the board has been visited.
    pub fn is_complete(&self) -> bool {
        self.len() == (self.size * self.size) as usize
    }

    /// A new tour that continues this one with `step`.
    pub fn extended(&self, step: Square) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(step);
        Self {
            size: self.size,
            steps,
        }
    }

    /// Legal continuations of this tour.
    ///
    /// The empty tour may start on any square, so the whole board is
    /// returned in row-major order. Otherwise the last square's knight
    /// candidates are kept if they are on the board and not yet visited.
    pub fn legal_next_moves(&self) -> Vec<Square> {
        let prev = match self.last() {
            Some(square) => square,
            None => {
                let mut seeds = Vec::with_capacity((self.size * self.size) as usize);
                for row in 0..self.size {
                    for col in 0..self.size {
                        seeds.push(Square::new(row, col));
                    }
                }
                return seeds;
            }
        };

        knight_targets(prev)
            .into_iter()
            .filter(|candidate| candidate.is_within(self.size) && !self.contains(*candidate))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::is_knight_move;

    #[test]
    fn test_empty_tour_may_start_anywhere() {
        let tour = Tour::new(5);
        let moves = tour.legal_next_moves();
        assert_eq!(moves.len(), 25);
        for row in 0..5 {
            for col in 0..5 {
                assert!(moves.contains(&Square::new(row, col)));
            }
        }
    }

    #[test]
    fn test_legal_moves_are_valid_knight_moves() {
        let tour = Tour::new(5).extended(Square::new(0, 0));
        let moves = tour.legal_next_moves();
        assert_eq!(moves.len(), 2);
        for candidate in moves {
            assert!(candidate.is_within(5));
            assert!(is_knight_move(Square::new(0, 0), candidate));
            assert!(!tour.contains(candidate));
        }
    }

    #[test]
    fn test_visited_squares_are_excluded() {
        let tour = Tour::new(5)
            .extended(Square::new(0, 0))
            .extended(Square::new(1, 2));
        // (0, 0) is a knight move away from (1, 2) but already visited.
        assert!(!tour.legal_next_moves().contains(&Square::new(0, 0)));
    }

    #[test]
    fn test_legal_next_moves_is_idempotent() {
        let tour = Tour::new(5)
            .extended(Square::new(2, 2))
            .extended(Square::new(0, 3));
        assert_eq!(tour.legal_next_moves(), tour.legal_next_moves());
    }

    #[test]
    fn test_extended_leaves_parent_untouched() {
        let parent = Tour::new(5).extended(Square::new(0, 0));
        let child = parent.extended(Square::new(2, 1));
        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.steps()[0], Square::new(0, 0));
    }

    #[test]
    fn test_no_duplicates_along_a_greedy_walk() {
        // Follow the first legal move until boxed in; the sequence must
        // never revisit a square.
        let mut tour = Tour::new(5);
        loop {
            let moves = tour.legal_next_moves();
            match moves.first() {
                Some(&step) => tour = tour.extended(step),
                None => break,
            }
            let steps = tour.steps();
            for (i, a) in steps.iter().enumerate() {
                for b in &steps[i + 1..] {
                    assert_ne!(a, b, "tour revisited {}", a);
                }
            }
        }
        assert!(tour.len() > 0);
    }

    #[test]
    fn test_is_complete() {
        let mut tour = Tour::new(1);
        assert!(!tour.is_complete());
        tour = tour.extended(Square::new(0, 0));
        assert!(tour.is_complete());
    }

    #[test]
    fn test_trivial_board_has_no_continuation() {
        let tour = Tour::new(1).extended(Square::new(0, 0));
        assert!(tour.legal_next_moves().is_empty());
    }
}
