#![cfg(feature = "std")]

//! Text rendering and coordinate input for the terminal frontend.
//!
//! Columns are lettered like spreadsheet columns (`A`..`Z`, then `AA`,
//! `AB`, ...), rows are 1-based numbers, so `B3` is row 2, column 1.

use std::fmt::Write;
use std::string::String;

use crate::board::{Board, Cell, CellView};

/// Letter label for column `c` (0 is `A`, 26 is `AA`).
pub fn column_label(c: usize) -> String {
    let mut letters = Vec::new();
    let mut n = c;
    loop {
        letters.push((b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Format (`r`, `c`) as e.g. `A1`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    format!("{}{}", column_label(c), r as u128 + 1)
}

/// Parse `A1`-style input for a board of side `size`.
pub fn parse_coord(input: &str, size: usize) -> Result<(usize, usize), String> {
    let input = input.trim();
    let split = input
        .find(|ch: char| !ch.is_ascii_alphabetic())
        .unwrap_or(input.len());
    let (letters, row_str) = input.split_at(split);
    if letters.is_empty() {
        return Err("Missing column letter - need e.g. A5".to_string());
    }
    if row_str.is_empty() {
        return Err("Missing row number - need e.g. A5".to_string());
    }
    let col = letters
        .bytes()
        .try_fold(0usize, |acc, b| {
            acc.checked_mul(26)?
                .checked_add((b.to_ascii_uppercase() - b'A') as usize + 1)
        })
        .map(|n| n - 1)
        .filter(|&col| col < size)
        .ok_or_else(|| format!("Column '{}' out of bounds", letters.to_ascii_uppercase()))?;
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, size))?;
    if row == 0 || row > size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, size));
    }
    Ok((row - 1, col))
}

/// Render the board. Without `reveal` only hits, misses and unknown cells
/// are distinguishable.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let size = board.size();
    let col_width = column_label(size - 1).len();
    let row_width = size.to_string().len().max(2);

    let mut out = String::new();
    let _ = write!(out, "{:row_width$} ", "");
    for c in 0..size {
        let _ = write!(out, " {:>col_width$}", column_label(c));
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:>row_width$} ", r + 1);
        for &cell in row {
            let ch = match (CellView::from(cell), reveal && cell == Cell::ShipIntact) {
                (_, true) => 'S',
                (CellView::Hit, _) => 'X',
                (CellView::Miss, _) => 'o',
                (CellView::Unknown, _) => '.',
            };
            let _ = write!(out, " {:>col_width$}", ch);
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    } else {
        out.push_str("Legend: X=Hit  o=Miss  .=Unknown\n");
    }
    out
}
