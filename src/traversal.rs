//! Frontier-driven graph search over maze passages.
//!
//! The same search loop serves breadth-first and depth-first traversal; only the [`Frontier`]
//! discipline changes. A traversal records every expanded cell in visitation order and remembers,
//! for each discovered cell, the cell it was first discovered from.

use std::collections::VecDeque;

use clap::ValueEnum;
use log::debug;

use crate::{
    grid::{CellId, Grid},
    path,
};

/// Order in which pending cells are taken from the frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// First in, first out.
    #[default]
    BreadthFirst,
    /// Last in, first out.
    DepthFirst,
}

impl Strategy {
    /// Returns the command-line name of the strategy.
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
        }
    }
}

/// Collection of cells waiting to be expanded.
pub trait Frontier {
    /// Adds a cell to the collection.
    fn push(&mut self, id: CellId);

    /// Removes and returns the next cell to expand.
    fn pop(&mut self) -> Option<CellId>;

    /// Returns `true` if no cell is waiting.
    fn is_empty(&self) -> bool;
}

/// First-in first-out frontier, yielding breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct Queue {
    /// Pending cells, oldest at the front.
    pending: VecDeque<CellId>,
}

impl Frontier for Queue {
    fn push(&mut self, id: CellId) {
        self.pending.push_back(id);
    }

    fn pop(&mut self) -> Option<CellId> {
        self.pending.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Last-in first-out frontier, yielding depth-first search.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    /// Pending cells, newest at the front.
    pending: VecDeque<CellId>,
}

impl Frontier for Stack {
    fn push(&mut self, id: CellId) {
        self.pending.push_front(id);
    }

    fn pop(&mut self) -> Option<CellId> {
        self.pending.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Map from each discovered cell to the cell it was first discovered from.
///
/// This structure holds one optional entry per cell of the searched grid. An entry is written the
/// first time a search pushes the cell onto its frontier and is never overwritten afterwards, so
/// following the entries back from any discovered cell always ends at the start of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predecessors {
    /// Predecessor of each cell, addressed by cell index.
    ///
    /// This field holds `None` for the start cell and for every cell the search never reached.
    from: Vec<Option<CellId>>,
}

impl Predecessors {
    /// Creates an empty map sized for `cell_count` cells.
    pub fn new(cell_count: usize) -> Self {
        Self {
            from: vec![None; cell_count],
        }
    }

    /// Returns the predecessor of `id`, if one was recorded.
    pub fn get(&self, id: CellId) -> Option<CellId> {
        self.from.get(id.index()).copied().flatten()
    }

    /// Records `from` as the predecessor of `id` unless one is already recorded.
    ///
    /// Returns `true` if the entry was written. Later discoveries never overwrite the first one.
    pub fn record(&mut self, id: CellId, from: CellId) -> bool {
        match self.from.get_mut(id.index()) {
            Some(slot) if slot.is_none() => {
                *slot = Some(from);
                true
            }
            _ => false,
        }
    }

    /// Returns the number of cells the map can address.
    pub fn capacity(&self) -> usize {
        self.from.len()
    }

    /// Returns the number of cells with a recorded predecessor.
    pub fn len(&self) -> usize {
        self.from.iter().flatten().count()
    }

    /// Returns `true` if no predecessor has been recorded.
    pub fn is_empty(&self) -> bool {
        self.from.iter().all(Option::is_none)
    }
}

/// Outcome of a single search.
///
/// This structure holds everything a caller needs after a search has run to completion: where it
/// started and what it looked for, the cells in the order they were processed, and the predecessor
/// map from which the solution path is rebuilt. It is created fresh by every search and never
/// updated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Traversal {
    /// Cell the search started from.
    pub start: CellId,
    /// Cell the search was looking for.
    pub goal: CellId,
    /// Cells in the order they were taken from the frontier and processed.
    ///
    /// This field holds each processed cell once, ending with the goal when it was reached.
    /// Playback code can replay it one entry at a time to show how the search spread.
    pub order: Vec<CellId>,
    /// First-discovery predecessor of every discovered cell.
    ///
    /// This field holds the map [`Traversal::path`] walks backwards from the goal.
    pub predecessors: Predecessors,
    /// Whether the goal was taken from the frontier.
    ///
    /// This field is always `true` for searches over a built maze, since its passages connect
    /// every cell.
    pub reached: bool,
}

impl Traversal {
    /// Returns the path from the start to the goal, both included.
    ///
    /// Returns `None` if the goal was not reached.
    pub fn path(&self) -> Option<Vec<CellId>> {
        if !self.reached {
            return None;
        }
        path::reconstruct_path(&self.predecessors, self.start, self.goal)
    }
}

/// Searches `grid` from `start` towards `goal` using the frontier discipline of `strategy`.
pub fn traverse(grid: &Grid, start: CellId, goal: CellId, strategy: Strategy) -> Traversal {
    let traversal = match strategy {
        Strategy::BreadthFirst => search(grid, start, goal, Queue::default()),
        Strategy::DepthFirst => search(grid, start, goal, Stack::default()),
    };

    debug!(
        "{} search {start} -> {goal}: visited {} cells, reached: {}",
        strategy.name(),
        traversal.order.len(),
        traversal.reached
    );

    traversal
}

/// Runs the search loop with an explicit frontier.
///
/// Cells are taken from the frontier one at a time. A cell that was already expanded is skipped
/// without being recorded again. Otherwise the cell is appended to the visitation order; if it is
/// the goal the search stops, else each open neighbor that has not been expanded is pushed onto
/// the frontier and the current cell becomes its predecessor on first discovery.
pub fn search<F: Frontier>(grid: &Grid, start: CellId, goal: CellId, mut frontier: F) -> Traversal {
    let mut expanded = vec![false; grid.cell_count()];
    let mut order = Vec::new();
    let mut predecessors = Predecessors::new(grid.cell_count());
    let mut reached = false;

    frontier.push(start);
    while let Some(current) = frontier.pop() {
        let Some(done) = expanded.get(current.index()).copied() else {
            continue;
        };
        if done {
            continue;
        }

        order.push(current);
        if current == goal {
            reached = true;
            break;
        }

        for next in grid.neighbors(current) {
            if expanded.get(next.index()).copied().unwrap_or(true) {
                continue;
            }
            frontier.push(next);
            let _ = predecessors.record(next, current);
        }

        if let Some(flag) = expanded.get_mut(current.index()) {
            *flag = true;
        }
    }

    Traversal {
        start,
        goal,
        order,
        predecessors,
        reached,
    }
}
