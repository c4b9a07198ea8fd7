//! Ship runs: a length laid out from an anchor cell along one axis.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placed ship: anchor (`row`, `col`), orientation and length.
///
/// Horizontal runs extend towards higher columns, vertical runs towards
/// higher rows.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl Ship {
    pub const fn new(length: usize, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            length,
            orientation,
            row,
            col,
        }
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// `true` when every cell of the run lies inside an `n`×`n` board.
    pub fn fits(&self, n: usize) -> bool {
        if self.row >= n || self.col >= n {
            return false;
        }
        match self.orientation {
            Orientation::Horizontal => self.length <= n - self.col,
            Orientation::Vertical => self.length <= n - self.row,
        }
    }

    /// Cells covered by the ship, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let Ship {
            length,
            orientation,
            row,
            col,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether (`row`, `col`) is one of the ship's cells.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                row == self.row && col >= self.col && col - self.col < self.length
            }
            Orientation::Vertical => {
                col == self.col && row >= self.row && row - self.row < self.length
            }
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: ({}, {}), orientation: {:?} }}",
            self.length, self.row, self.col, self.orientation,
        )
    }
}
