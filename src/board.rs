//! Square grid of cell states plus the record of placed ships.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::ship::{Orientation, Ship};

/// State of a single board cell.
///
/// Legal transitions are `Empty -> Miss` and `ShipIntact -> Hit`; placement
/// additionally turns `Empty` into `ShipIntact` before play starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    ShipIntact,
    Miss,
    Hit,
}

/// What a renderer is allowed to know about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    Unknown,
    Miss,
    Hit,
}

impl From<Cell> for CellView {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty | Cell::ShipIntact => CellView::Unknown,
            Cell::Miss => CellView::Miss,
            Cell::Hit => CellView::Hit,
        }
    }
}

/// An N×N board stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    intact: usize,
}

/// Create an empty `size`×`size` board.
pub fn create_board(size: usize) -> Result<Board, BoardError> {
    Board::new(size)
}

impl Board {
    /// Create a board with every cell `Empty`. A zero size, or one whose cell
    /// count cannot be allocated, is rejected.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        let len = size.checked_mul(size).ok_or(BoardError::InvalidSize)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| BoardError::InvalidSize)?;
        cells.resize(len, Cell::Empty);
        Ok(Board {
            size,
            cells,
            ships: Vec::new(),
            intact: 0,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of `ShipIntact` cells left.
    pub fn remaining_ship_cells(&self) -> usize {
        self.intact
    }

    /// Cell state at (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Renderer-safe view of (`row`, `col`); intact ships read as unknown.
    pub fn view(&self, row: usize, col: usize) -> Result<CellView, BoardError> {
        self.cell(row, col).map(CellView::from)
    }

    /// Iterator over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Count cells currently holding `state`.
    pub fn count(&self, state: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Whether a ship of `length` anchored at (`row`, `col`) fits entirely on
    /// empty cells.
    pub fn can_place(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
    ) -> bool {
        let ship = Ship::new(length, orientation, row, col);
        length > 0
            && ship.fits(self.size)
            && ship
                .cells()
                .all(|(r, c)| self.cells[r * self.size + c] == Cell::Empty)
    }

    /// Place a single ship run, marking its cells `ShipIntact`.
    pub fn place_ship(
        &mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
        length: usize,
    ) -> Result<(), BoardError> {
        if length == 0 {
            return Err(BoardError::InvalidShipLength);
        }
        let ship = Ship::new(length, orientation, row, col);
        if !ship.fits(self.size) {
            return Err(BoardError::ShipOutOfBounds);
        }
        if !self.can_place(row, col, orientation, length) {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in ship.cells() {
            self.cells[r * self.size + c] = Cell::ShipIntact;
        }
        self.intact += length;
        self.ships.push(ship);
        Ok(())
    }

    /// Ship covering (`row`, `col`), if any.
    pub fn ship_at(&self, row: usize, col: usize) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(row, col))
    }

    /// `true` when every cell of `ship` has been hit.
    pub fn is_sunk(&self, ship: &Ship) -> bool {
        ship.cells()
            .all(|(r, c)| self.cells[r * self.size + c] == Cell::Hit)
    }

    /// Overwrite a single cell. Only the shot resolver mutates cells after
    /// placement, and it only performs the two legal transitions.
    pub(crate) fn set(&mut self, row: usize, col: usize, state: Cell) -> Result<(), BoardError> {
        let idx = self.index(row, col)?;
        let prev = self.cells[idx];
        if prev == Cell::ShipIntact && state != Cell::ShipIntact {
            self.intact -= 1;
        } else if prev != Cell::ShipIntact && state == Cell::ShipIntact {
            self.intact += 1;
        }
        self.cells[idx] = state;
        Ok(())
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(row * self.size + col)
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board<{}> (intact: {}):", self.size, self.intact)?;
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::ShipIntact => 'S',
                    Cell::Miss => 'o',
                    Cell::Hit => 'X',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
