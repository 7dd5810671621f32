//! Exhaustive knight-tour search over board states.
//!
//! The driver keeps a frontier of pending tours and repeatedly expands the
//! tour removed from one end of it. Which end, when the search stops, and
//! how equal-length results are tie-broken are policy knobs bundled in
//! [`SearchStrategy`], so the breadth-first enumeration and the depth-first
//! first-solution dive share one loop.

use std::collections::VecDeque;
use std::str::FromStr;

use log::debug;

use crate::board::Tour;


/// Which end of the frontier tours are removed from. Children are always
/// inserted at the back, so front removal explores breadth-first and back
/// removal depth-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierDiscipline {
    Fifo,
    Lifo,
}

impl FromStr for FrontierDiscipline {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fifo" => Ok(FrontierDiscipline::Fifo),
            "lifo" => Ok(FrontierDiscipline::Lifo),
            _ => Err("invalid frontier order; options are: fifo, lifo"),
        }
    }
}

/// When the search stops: after the frontier drains, or as soon as the
/// first full-coverage tour is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionPolicy {
    Exhaustive,
    FirstFullTour,
}

/// How a terminal tour of equal length to the current best is treated.
/// `PreferFirst` keeps the earlier find (strictly-greater update);
/// `PreferLatest` lets the most recent find override (greater-or-equal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    PreferFirst,
    PreferLatest,
}

/// The policy knobs that distinguish the search variants.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy {
    pub discipline: FrontierDiscipline,
    pub completion: CompletionPolicy,
    pub tie_break: TieBreak,
}

impl SearchStrategy {
    /// Enumerate every terminal state, keeping the first longest tour.
    pub fn exhaustive(discipline: FrontierDiscipline) -> Self {
        Self {
            discipline,
            completion: CompletionPolicy::Exhaustive,
            tie_break: TieBreak::PreferFirst,
        }
    }

    /// Depth-first dive that stops at the first full-coverage tour. Ties
    /// go to the most recently found tour.
    pub fn first_tour() -> Self {
        Self {
            discipline: FrontierDiscipline::Lifo,
            completion: CompletionPolicy::FirstFullTour,
            tie_break: TieBreak::PreferLatest,
        }
    }
}

/// Progress sink for the search loop: called once per removed tour and
/// once per best-result improvement.
pub trait SearchRenderer {
    fn render_progress(&mut self, tour: &Tour, frontier_len: usize);
    fn render_best(&mut self, tour: &Tour);
}

/// Renderer that discards all progress.
pub struct SilentRenderer;

impl SearchRenderer for SilentRenderer {
    fn render_progress(&mut self, _tour: &Tour, _frontier_len: usize) {}
    fn render_best(&mut self, _tour: &Tour) {}
}

/// Outcome of a finished search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The longest terminal tour observed.
    pub best: Option<Tour>,
    /// Number of terminal (dead-end or complete) tours reached.
    pub terminal_count: usize,
    /// Number of tours removed from the frontier.
    pub expanded_count: usize,
    /// Tours still pending when the search stopped. Nonzero only when a
    /// full tour ended the search early.
    pub frontier_remaining: usize,
    /// Whether a full-coverage tour was found.
    pub solved: bool,
}

pub struct Searcher {
    strategy: SearchStrategy,
    frontier: VecDeque<Tour>,
    best: Option<Tour>,
    terminal_count: usize,
    expanded_count: usize,
}

impl Searcher {
    /// A searcher seeded with the single empty tour on a `size` x `size`
    /// board.
    pub fn new(size: i32, strategy: SearchStrategy) -> Self {
        let mut frontier = VecDeque::new();
        frontier.push_back(Tour::new(size));
        Self {
            strategy,
            frontier,
            best: None,
            terminal_count: 0,
            expanded_count: 0,
        }
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn terminal_count(&self) -> usize {
        self.terminal_count
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded_count
    }

    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Runs the search to completion under the configured strategy.
    pub fn run<R: SearchRenderer>(&mut self, renderer: &mut R) -> SearchReport {
        while let Some(tour) = self.pop() {
            self.expanded_count += 1;
            if self.expanded_count % 100_000 == 0 {
                debug!(
                    "expanded {} boards, {} in progress",
                    self.expanded_count,
                    self.frontier.len()
                );
            }
            renderer.render_progress(&tour, self.frontier.len());

            let next_moves = tour.legal_next_moves();
            if next_moves.is_empty() {
                self.terminal_count += 1;
                let complete = tour.is_complete();
                if self.improves_best(&tour) {
                    debug!("new best tour: {} steps", tour.len());
                    renderer.render_best(&tour);
                    self.best = Some(tour);
                }
                if complete && self.strategy.completion == CompletionPolicy::FirstFullTour {
                    break;
                }
                continue;
            }

            for step in next_moves {
                self.frontier.push_back(tour.extended(step));
            }
        }

        let solved = self.best.as_ref().map_or(false, |best| best.is_complete());
        SearchReport {
            best: self.best.clone(),
            terminal_count: self.terminal_count,
            expanded_count: self.expanded_count,
            frontier_remaining: self.frontier.len(),
            solved,
        }
    }

    fn pop(&mut self) -> Option<Tour> {
        match self.strategy.discipline {
            FrontierDiscipline::Fifo => self.frontier.pop_front(),
            FrontierDiscipline::Lifo => self.frontier.pop_back(),
        }
    }

    fn improves_best(&self, tour: &Tour) -> bool {
        match &self.best {
            None => true,
            Some(best) => match self.strategy.tie_break {
                TieBreak::PreferFirst => tour.len() > best.len(),
                TieBreak::PreferLatest => tour.len() >= best.len(),
            },
        }
    }
}
