//! Cell arena and passage topology of a rectangular maze.
//!
//! Cells live in a flat vector addressed by their row-major position. Neighbor links are stored
//! as optional indices into that vector, so the grid owns every cell and cells never own each
//! other. A link always exists in both directions; [`Grid::link`] is the only way to create one.

use std::{collections::TryReserveError, fmt};

use thiserror::Error;

/// Stable identifier of a cell.
///
/// This is the row-major index `row * length + col` of the cell in its grid. Presentation code
/// may rely on it to map cells back onto screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub usize);

impl CellId {
    /// Returns the row-major index of the cell.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One of the four sides of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous row.
    Up,
    /// Towards the next row.
    Down,
    /// Towards the previous column.
    Left,
    /// Towards the next column.
    Right,
}

impl Direction {
    /// All directions in the order in which traversals expand them.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the direction pointing back the way this one came.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// A single maze cell.
///
/// Each side is either a wall (`None`) or a passage to the neighboring cell (`Some`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Position of this cell in its grid.
    id: CellId,
    /// Passage through the top side.
    up: Option<CellId>,
    /// Passage through the bottom side.
    down: Option<CellId>,
    /// Passage through the left side.
    left: Option<CellId>,
    /// Passage through the right side.
    right: Option<CellId>,
}

impl Cell {
    /// Creates a cell with walls on every side.
    const fn walled(id: CellId) -> Self {
        Self {
            id,
            up: None,
            down: None,
            left: None,
            right: None,
        }
    }

    /// Returns the mutable side slot facing `direction`.
    fn side_mut(&mut self, direction: Direction) -> &mut Option<CellId> {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Returns the identifier of this cell.
    pub const fn id(&self) -> CellId {
        self.id
    }

    /// Returns the cell reached through the given side, if that side is open.
    pub const fn link(&self, direction: Direction) -> Option<CellId> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Returns the number of open sides.
    pub fn degree(&self) -> usize {
        [self.up, self.down, self.left, self.right]
            .iter()
            .flatten()
            .count()
    }
}

/// Failure to open a passage between two cells.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    /// One of the cells does not belong to the grid.
    #[error("cell {0} is outside of the grid")]
    OutOfRange(CellId),
    /// The cells do not share a side.
    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(CellId, CellId),
}

/// Rectangular arena of `length` columns by `height` rows of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    length: usize,
    /// Number of rows.
    height: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of fully walled cells.
    ///
    /// The caller is responsible for the dimensions being non-zero; the maze builder validates
    /// them before constructing a grid.
    pub fn new(length: usize, height: usize) -> Self {
        let cells = (0..length.saturating_mul(height))
            .map(|index| Cell::walled(CellId(index)))
            .collect();

        Self {
            length,
            height,
            cells,
        }
    }

    /// Creates a grid of fully walled cells, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    ///
    /// This function may return errors if memory for the cells cannot be reserved.
    pub fn try_new(length: usize, height: usize) -> Result<Self, TryReserveError> {
        let count = length.saturating_mul(height);
        let mut cells = Vec::new();
        cells.try_reserve_exact(count)?;
        cells.extend((0..count).map(|index| Cell::walled(CellId(index))));

        Ok(Self {
            length,
            height,
            cells,
        })
    }

    /// Returns the number of columns.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Returns the number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell with the given identifier.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Returns the cell reached from `id` through `direction`, if there is a passage there.
    pub fn neighbor(&self, id: CellId, direction: Direction) -> Option<CellId> {
        self.cell(id)?.link(direction)
    }

    /// Iterates over the open neighbors of `id` in [`Direction::ALL`] order.
    pub fn neighbors(&self, id: CellId) -> impl Iterator<Item = CellId> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(id, direction))
    }

    /// Returns the `(row, col)` coordinates of a cell.
    pub fn position(&self, id: CellId) -> Option<(usize, usize)> {
        (id.index() < self.cells.len())
            .then(|| (id.index() / self.length, id.index() % self.length))
    }

    /// Returns the identifier of the cell at `(row, col)`.
    pub fn id_at(&self, row: usize, col: usize) -> Option<CellId> {
        (row < self.height && col < self.length).then_some(CellId(row * self.length + col))
    }

    /// Returns the side of `from` that faces `to`, if the two cells are adjacent.
    ///
    /// Adjacency is decided on coordinates, so the last cell of a row and the first cell of the
    /// next row are never considered neighbors even though their indices differ by one.
    pub fn direction_between(&self, from: CellId, to: CellId) -> Option<Direction> {
        let (from_row, from_col) = self.position(from)?;
        let (to_row, to_col) = self.position(to)?;

        if from_row == to_row {
            if to_col == from_col + 1 {
                return Some(Direction::Right);
            }
            if from_col == to_col + 1 {
                return Some(Direction::Left);
            }
        } else if from_col == to_col {
            if to_row == from_row + 1 {
                return Some(Direction::Down);
            }
            if from_row == to_row + 1 {
                return Some(Direction::Up);
            }
        }

        None
    }

    /// Opens a passage between two adjacent cells.
    ///
    /// Both sides of the wall are written together, so `first`'s link towards `second` and
    /// `second`'s link back towards `first` always agree.
    ///
    /// # Errors
    ///
    /// This function may return errors if:
    /// - Either cell is outside of the grid
    /// - The cells do not share a side
    pub fn link(&mut self, first: CellId, second: CellId) -> Result<(), LinkError> {
        for id in [first, second] {
            if self.cell(id).is_none() {
                return Err(LinkError::OutOfRange(id));
            }
        }
        let direction = self
            .direction_between(first, second)
            .ok_or(LinkError::NotAdjacent(first, second))?;

        self.set_link(first, direction, second)?;
        self.set_link(second, direction.opposite(), first)
    }

    /// Writes one side of a passage.
    fn set_link(&mut self, id: CellId, direction: Direction, to: CellId) -> Result<(), LinkError> {
        let cell = self
            .cells
            .get_mut(id.index())
            .ok_or(LinkError::OutOfRange(id))?;
        *cell.side_mut(direction) = Some(to);

        Ok(())
    }

    /// Iterates over every passage once, as `(lower, higher)` pairs in row-major order.
    pub fn passages(&self) -> impl Iterator<Item = (CellId, CellId)> + '_ {
        self.cells.iter().flat_map(|cell| {
            [Direction::Right, Direction::Down]
                .into_iter()
                .filter_map(move |direction| cell.link(direction).map(|to| (cell.id, to)))
        })
    }

    /// Returns the number of passages in the grid.
    pub fn passage_count(&self) -> usize {
        self.passages().count()
    }

    /// Returns `true` if every link has a matching link pointing back.
    pub fn is_symmetric(&self) -> bool {
        self.cells.iter().all(|cell| {
            Direction::ALL.into_iter().all(|direction| {
                cell.link(direction).is_none_or(|to| {
                    self.neighbor(to, direction.opposite()) == Some(cell.id)
                })
            })
        })
    }
}
