//! SlotSwap - exchanges the occupants of two arrangement slots.
//!
//! Both teams are viewed as one ten-slot arrangement (team A in slots
//! 0..5, team B in 5..10). Swapping two slots of the same team only
//! reassigns roles; swapping across teams also trades membership.

use teamforge_core::{TeamSplit, ROSTER_SIZE, TEAM_SIZE};

/// Number of unordered slot pairs, C(10, 2).
pub const NEIGHBORHOOD_SIZE: usize = ROSTER_SIZE * (ROSTER_SIZE - 1) / 2;

/// A move that swaps two arrangement slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotSwap {
    left: usize,
    right: usize,
}

impl SlotSwap {
    /// Creates a swap of `left` and `right`, with `left < right < 10`.
    pub fn new(left: usize, right: usize) -> Self {
        debug_assert!(left < right && right < ROSTER_SIZE);
        Self { left, right }
    }

    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    /// Whether the two slots belong to different teams.
    pub fn is_cross_team(&self) -> bool {
        (self.left < TEAM_SIZE) != (self.right < TEAM_SIZE)
    }

    /// Returns the split after the swap. The input is untouched.
    pub fn apply(&self, split: &TeamSplit) -> TeamSplit {
        split.swapped(self.left, self.right)
    }
}

/// The full swap neighbourhood in lexicographic pair order:
/// (0,1), (0,2), ..., (8,9).
#[derive(Debug, Clone)]
pub struct SlotSwapSelector {
    moves: Vec<SlotSwap>,
}

impl SlotSwapSelector {
    pub fn new() -> Self {
        let mut moves = Vec::with_capacity(NEIGHBORHOOD_SIZE);
        for left in 0..ROSTER_SIZE {
            for right in left + 1..ROSTER_SIZE {
                moves.push(SlotSwap::new(left, right));
            }
        }
        Self { moves }
    }

    pub fn iter_moves(&self) -> impl Iterator<Item = &SlotSwap> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

impl Default for SlotSwapSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_covers_all_pairs_once() {
        let selector = SlotSwapSelector::new();
        assert_eq!(selector.len(), 45);

        let mut seen = std::collections::HashSet::new();
        for m in selector.iter_moves() {
            assert!(m.left() < m.right());
            assert!(seen.insert((m.left(), m.right())));
        }
        let first = selector.iter_moves().next().unwrap();
        assert_eq!((first.left(), first.right()), (0, 1));
    }

    #[test]
    fn test_cross_team_count() {
        let selector = SlotSwapSelector::new();
        let cross = selector.iter_moves().filter(|m| m.is_cross_team()).count();
        // 25 cross-team pairs, 10 within each team.
        assert_eq!(cross, 25);
    }

    #[test]
    fn test_every_swap_preserves_partition() {
        let split = TeamSplit::from_arrangement([3, 8, 1, 0, 6, 9, 2, 7, 5, 4]);
        for m in SlotSwapSelector::new().iter_moves() {
            assert!(m.apply(&split).is_valid());
        }
    }
}
