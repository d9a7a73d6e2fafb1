//! Randomized Kruskal maze construction.
//!
//! Every pair of adjacent cells gets a candidate edge with a random weight. The candidates are
//! sorted by weight and fed to Kruskal's algorithm, which keeps an edge only when it joins two
//! components that are not yet connected. The kept edges form a spanning tree and are carved into
//! the grid as passages.

use std::{collections::TryReserveError, mem};

use log::{debug, trace};
use rand::Rng;
use thiserror::Error;

use crate::{
    grid::{Cell, CellId, Grid, LinkError},
    traversal::{self, Strategy, Traversal},
    union_find::DisjointSet,
};

/// Exclusive upper bound of candidate edge weights.
///
/// Weights are drawn uniformly from `0..MAX_WEIGHT`.
pub const MAX_WEIGHT: u32 = 1000;

/// Largest number of cells a maze may have.
///
/// A maze holds one [`Cell`] per cell and up to two candidate [`Edge`]s per cell, and no single
/// allocation may exceed `isize::MAX` bytes.
pub const MAX_CELLS: usize =
    isize::MAX.unsigned_abs() / (mem::size_of::<Cell>() + 2 * mem::size_of::<Edge>());

/// A wall that may be removed, weighted for Kruskal's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Random weight deciding the order in which candidates are considered.
    pub weight: u32,
    /// The cell with the lower identifier.
    pub from: CellId,
    /// The cell to the right of or below `from`.
    pub to: CellId,
}

/// Failure to build a maze from the requested configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The maze must have at least one column.
    #[error("maze length must be at least 1")]
    ZeroLength,
    /// The maze must have at least one row.
    #[error("maze height must be at least 1")]
    ZeroHeight,
    /// The number of cells does not fit in memory addressing.
    #[error("a {length}x{height} maze has too many cells")]
    TooLarge {
        /// Requested number of columns.
        length: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// Memory for the cells or the candidate edges could not be reserved.
    #[error("failed to allocate maze storage: {0}")]
    Allocation(#[from] TryReserveError),
    /// A selected edge could not be carved into the grid.
    #[error("failed to carve passage: {0}")]
    Carve(#[from] LinkError),
}

/// A perfect maze: a grid whose passages form a spanning tree over all of its cells.
///
/// This structure holds everything produced by one build: the grid with its carved passages, the
/// full list of candidate walls and the subset of them that became passages. Because the passages
/// form a tree, exactly one simple path joins any two cells. A maze is never modified after it is
/// built; resetting means building a new one and dropping the old value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Cells and their passages.
    ///
    /// This field holds the cell arena whose links were opened for every edge in
    /// [`spanning`](Maze::spanning). Searches run over it directly.
    grid: Grid,
    /// Every candidate edge, sorted by ascending weight.
    ///
    /// This field holds one edge per pair of adjacent cells, kept after selection so callers can
    /// inspect the weights the maze was carved from.
    candidates: Vec<Edge>,
    /// Edges selected by Kruskal's algorithm, in selection order.
    ///
    /// This field holds exactly one edge fewer than there are cells.
    spanning: Vec<Edge>,
}

impl Maze {
    /// Builds a random maze of `length` columns by `height` rows.
    ///
    /// The result only depends on the dimensions and the values drawn from `rng`, so two builds
    /// with equally seeded generators produce identical mazes.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - Either dimension is zero
    /// - The number of cells exceeds [`MAX_CELLS`]
    /// - Memory for the cells or the candidate edges cannot be reserved
    pub fn build<R: Rng + ?Sized>(
        length: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, BuildError> {
        if length == 0 {
            return Err(BuildError::ZeroLength);
        }
        if height == 0 {
            return Err(BuildError::ZeroHeight);
        }
        let cell_count = length
            .checked_mul(height)
            .filter(|&count| count <= MAX_CELLS)
            .ok_or(BuildError::TooLarge { length, height })?;

        let mut grid = Grid::try_new(length, height)?;
        let mut candidates = candidate_edges(&grid, rng)?;
        candidates.sort_by_key(|edge| edge.weight);

        let spanning = spanning_tree(cell_count, &candidates);
        for edge in &spanning {
            grid.link(edge.from, edge.to)?;
        }

        debug!(
            "built {length}x{height} maze: {} candidates, {} passages",
            candidates.len(),
            spanning.len()
        );

        Ok(Self {
            grid,
            candidates,
            spanning,
        })
    }

    /// Returns the cell grid with its passages.
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of columns.
    pub const fn length(&self) -> usize {
        self.grid.length()
    }

    /// Returns the number of rows.
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns every candidate edge, sorted by ascending weight.
    pub fn candidates(&self) -> &[Edge] {
        &self.candidates
    }

    /// Returns the edges that were carved into passages, in the order they were selected.
    pub fn spanning_edges(&self) -> &[Edge] {
        &self.spanning
    }

    /// Returns the top-left cell, where the maze is entered.
    pub const fn entrance(&self) -> CellId {
        CellId(0)
    }

    /// Returns the bottom-right cell, where the maze is left.
    pub fn exit(&self) -> CellId {
        CellId(self.grid.cell_count().saturating_sub(1))
    }

    /// Searches the maze from `start` towards `goal` with the given strategy.
    pub fn traverse(&self, start: CellId, goal: CellId, strategy: Strategy) -> Traversal {
        traversal::traverse(&self.grid, start, goal, strategy)
    }

    /// Searches the maze from its entrance towards its exit.
    pub fn solve(&self, strategy: Strategy) -> Traversal {
        self.traverse(self.entrance(), self.exit(), strategy)
    }
}

/// Generates one randomly weighted candidate edge per pair of adjacent cells.
///
/// Horizontal pairs are emitted first, row by row, followed by vertical pairs, so the sequence of
/// weights drawn from `rng` is fixed for given dimensions. The result holds exactly
/// `length * (height - 1) + height * (length - 1)` edges.
///
/// # Errors
///
/// This function may return errors if memory for the edges cannot be reserved.
pub fn candidate_edges<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
) -> Result<Vec<Edge>, TryReserveError> {
    let (length, height) = (grid.length(), grid.height());
    let mut edges = Vec::new();
    edges.try_reserve_exact(
        length
            .saturating_mul(height.saturating_sub(1))
            .saturating_add(height.saturating_mul(length.saturating_sub(1))),
    )?;

    for row in 0..height {
        for col in 1..length {
            if let (Some(from), Some(to)) = (grid.id_at(row, col - 1), grid.id_at(row, col)) {
                edges.push(Edge {
                    weight: rng.random_range(0..MAX_WEIGHT),
                    from,
                    to,
                });
            }
        }
    }

    for row in 1..height {
        for col in 0..length {
            if let (Some(from), Some(to)) = (grid.id_at(row - 1, col), grid.id_at(row, col)) {
                edges.push(Edge {
                    weight: rng.random_range(0..MAX_WEIGHT),
                    from,
                    to,
                });
            }
        }
    }

    Ok(edges)
}

/// Selects a minimum spanning tree from weight-sorted candidate edges.
///
/// Edges are considered in the given order; an edge is kept when its endpoints still belong to
/// different components, and those components are then merged. Selection stops as soon as
/// `cell_count - 1` edges are kept. A single cell yields an empty tree.
pub fn spanning_tree(cell_count: usize, sorted: &[Edge]) -> Vec<Edge> {
    let target = cell_count.saturating_sub(1);
    let mut forest = DisjointSet::new(cell_count);
    let mut kept = Vec::with_capacity(target);

    for edge in sorted {
        if kept.len() >= target {
            break;
        }

        if forest.union(edge.from.index(), edge.to.index()) {
            trace!("keeping edge {} - {} ({})", edge.from, edge.to, edge.weight);
            kept.push(*edge);
        } else {
            trace!("discarding edge {} - {} ({})", edge.from, edge.to, edge.weight);
        }
    }

    kept
}
