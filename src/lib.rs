//! Randomized maze generation and solving.
//!
//! A maze is a rectangular grid of cells whose passages form a spanning tree, carved with a
//! randomized variant of Kruskal's algorithm. Once built, a maze can be searched breadth-first or
//! depth-first; a search yields the order in which cells were visited and a predecessor map from
//! which the unique path between two cells is reconstructed.
//!
//! Cell identifiers are row-major indices, so the entrance of a maze is always cell `0` and its
//! exit is the last cell.

#![expect(
    clippy::cargo_common_metadata,
    reason = "The crate is not published, so it carries no repository or readme."
)]

pub mod app;
pub mod config;
pub mod grid;
pub mod maze;
pub mod path;
pub mod traversal;
pub mod union_find;

use rand::Rng;

pub use crate::{
    app::App,
    config::Config,
    grid::{CellId, Direction, Grid},
    maze::{BuildError, Maze},
    path::reconstruct_path,
    traversal::{traverse, Strategy, Traversal},
};

/// Builds a random maze of `length` columns by `height` rows.
///
/// This is a shorthand for [`Maze::build`].
///
/// # Errors
///
/// This function may return errors if either dimension is zero or the maze cannot fit in memory.
pub fn build_maze<R: Rng + ?Sized>(
    length: usize,
    height: usize,
    rng: &mut R,
) -> Result<Maze, BuildError> {
    Maze::build(length, height, rng)
}
