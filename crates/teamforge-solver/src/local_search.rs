//! Budget-bounded depth-first local search.
//!
//! Starting from a random split, each expanded node scores its whole
//! swap neighbourhood, sorts it best first, and descends into every
//! neighbour that does not score worse than the node itself before moving
//! on to the next one. A shared [`MoveBudget`] caps the number of
//! expansions for the whole tree.
//!
//! Every expanded node becomes a candidate once its subtree is done, so
//! candidates come out in post-order. The final pick is the first
//! candidate with the strictly highest score, starting from the initial
//! split. Nodes refused by the budget are not candidates.
//!
//! Because equal-score neighbours are explored too, the search can
//! revisit splits (swapping a pair back and forth); the budget is what
//! bounds it. The result is a local optimum at best, never a guaranteed
//! global one.

use std::time::Instant;

use rand::seq::{index, SliceRandom};
use rand::Rng;
use teamforge_core::{PlayerIndex, TeamSplit, ROSTER_SIZE, TEAM_SIZE};
use tracing::{debug, info, trace};

use crate::moves::SlotSwapSelector;
use crate::termination::MoveBudget;
use crate::{SearchOutcome, SearchStatistics};

/// A split reached during the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub split: TeamSplit,
    pub score: f64,
    /// Score of the node this one was expanded from; `None` for the root.
    pub parent_score: Option<f64>,
    pub depth: usize,
}

/// An expanded node whose children are still being visited.
struct Frame {
    split: TeamSplit,
    score: f64,
    parent_score: Option<f64>,
    depth: usize,
    /// Non-worsening neighbours, best first.
    children: Vec<(TeamSplit, f64)>,
    next: usize,
}

/// Depth-first hill climbing over slot swaps.
#[derive(Debug, Clone)]
pub struct LocalSearch {
    move_budget: u64,
    selector: SlotSwapSelector,
}

impl LocalSearch {
    /// Creates a search allowed `move_budget` expansions per run.
    pub fn new(move_budget: u64) -> Self {
        Self {
            move_budget,
            selector: SlotSwapSelector::new(),
        }
    }

    pub fn move_budget(&self) -> u64 {
        self.move_budget
    }

    /// Draws a random starting split.
    ///
    /// Team A is a uniformly random 5-subset in random order; team B is
    /// the rest, shuffled independently. Slot positions therefore start
    /// as a random role assignment on both sides.
    pub fn random_split<R: Rng + ?Sized>(rng: &mut R) -> TeamSplit {
        let mut team_a = [0; TEAM_SIZE];
        for (slot, player) in team_a
            .iter_mut()
            .zip(index::sample(rng, ROSTER_SIZE, TEAM_SIZE).iter())
        {
            *slot = player;
        }
        let mut rest: Vec<PlayerIndex> = (0..ROSTER_SIZE).filter(|p| !team_a.contains(p)).collect();
        rest.shuffle(rng);
        let mut team_b = [0; TEAM_SIZE];
        team_b.copy_from_slice(&rest);
        TeamSplit { team_a, team_b }
    }

    /// Runs a full search from a random start.
    ///
    /// `score_fn` receives the random source so it can add jitter.
    pub fn solve<R, F>(&self, rng: &mut R, mut score_fn: F) -> SearchOutcome
    where
        R: Rng + ?Sized,
        F: FnMut(&TeamSplit, &mut R) -> f64,
    {
        let start = Instant::now();
        info!(
            event = "search_start",
            search = "LocalSearch",
            move_budget = self.move_budget,
        );

        let initial = Self::random_split(rng);
        let initial_score = score_fn(&initial, rng);

        let mut statistics = SearchStatistics {
            score_calculations: 1,
            ..SearchStatistics::default()
        };
        let candidates = self.explore(
            initial,
            initial_score,
            |split| score_fn(split, rng),
            &mut statistics,
        );

        let (mut split, mut score) = (initial, initial_score);
        for candidate in &candidates {
            if candidate.score > score {
                split = candidate.split;
                score = candidate.score;
            }
        }

        statistics.duration = start.elapsed();
        info!(
            event = "search_end",
            search = "LocalSearch",
            duration_ms = statistics.duration.as_millis() as u64,
            expansions = statistics.expansions,
            score_calculations = statistics.score_calculations,
            speed = statistics.calculation_speed(),
            initial_score = initial_score,
            score = score,
        );

        SearchOutcome {
            split,
            score,
            initial_score,
            statistics,
        }
    }

    /// Explores the tree rooted at `root` and returns every candidate in
    /// the order it completed.
    pub fn explore<F>(
        &self,
        root: TeamSplit,
        root_score: f64,
        mut score_fn: F,
        statistics: &mut SearchStatistics,
    ) -> Vec<Candidate>
    where
        F: FnMut(&TeamSplit) -> f64,
    {
        let mut budget = MoveBudget::new(self.move_budget);
        let mut candidates = Vec::new();
        let mut stack = Vec::new();

        if let Some(frame) = self.expand(
            root,
            root_score,
            None,
            0,
            &mut budget,
            &mut score_fn,
            statistics,
        ) {
            stack.push(frame);
        }

        loop {
            let next = match stack.last_mut() {
                None => break,
                Some(top) => match top.children.get(top.next).copied() {
                    Some(child) => {
                        top.next += 1;
                        Some((child, top.score, top.depth + 1))
                    }
                    None => None,
                },
            };

            match next {
                Some(((split, score), parent_score, depth)) => {
                    if let Some(frame) = self.expand(
                        split,
                        score,
                        Some(parent_score),
                        depth,
                        &mut budget,
                        &mut score_fn,
                        statistics,
                    ) {
                        stack.push(frame);
                    }
                }
                None => {
                    if let Some(done) = stack.pop() {
                        candidates.push(Candidate {
                            split: done.split,
                            score: done.score,
                            parent_score: done.parent_score,
                            depth: done.depth,
                        });
                    }
                }
            }
        }

        statistics.candidates += candidates.len() as u64;
        candidates
    }

    /// Scores a node's neighbourhood, or returns `None` when the budget
    /// refuses the expansion.
    #[allow(clippy::too_many_arguments)]
    fn expand<F>(
        &self,
        split: TeamSplit,
        score: f64,
        parent_score: Option<f64>,
        depth: usize,
        budget: &mut MoveBudget,
        score_fn: &mut F,
        statistics: &mut SearchStatistics,
    ) -> Option<Frame>
    where
        F: FnMut(&TeamSplit) -> f64,
    {
        if !budget.try_consume() {
            if !statistics.budget_exhausted {
                debug!(
                    event = "budget_exhausted",
                    move_budget = budget.limit(),
                    depth = depth,
                );
                statistics.budget_exhausted = true;
            }
            return None;
        }
        statistics.expansions += 1;

        let mut children: Vec<(TeamSplit, f64)> = self
            .selector
            .iter_moves()
            .map(|m| {
                let child = m.apply(&split);
                (child, score_fn(&child))
            })
            .collect();
        statistics.score_calculations += children.len() as u64;

        // Stable, so equal scores keep neighbourhood order.
        children.sort_by(|a, b| b.1.total_cmp(&a.1));
        let keep = children.iter().take_while(|(_, s)| *s >= score).count();
        children.truncate(keep);

        trace!(
            event = "expand",
            depth = depth,
            score = score,
            non_worsening = children.len() as u64,
            remaining_budget = budget.remaining(),
        );

        Some(Frame {
            split,
            score,
            parent_score,
            depth,
            children,
            next: 0,
        })
    }
}

#[cfg(test)]
mod tests;
