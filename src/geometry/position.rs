// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Position type for addressing glasses in the pyramid.
//!
//! Row `r` (0-indexed) holds `r + 1` glasses, numbered `0..=r`. Glasses are
//! stored row by row in a flat arena, so a position maps to the triangular
//! index `r * (r + 1) / 2 + c`.

use std::fmt;

use crate::geometry::constants::glass_count;

/// A (row, column) pair with `column <= row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Create a new position, panicking if the column is past the end of the row.
    ///
    /// # Panics
    ///
    /// Panics if `column > row`.
    pub fn new(row: usize, column: usize) -> Self {
        assert!(
            column <= row,
            "Position out of range: column {} in row {}",
            column,
            row
        );
        Self { row, column }
    }

    /// Try to create a new position, returning None if the column is past the end of the row.
    pub fn try_new(row: usize, column: usize) -> Option<Self> {
        if column <= row {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Convert the 1-based "row, glass" numbering used by the driver.
    pub fn from_one_based(row: usize, glass: usize) -> Option<Self> {
        if row == 0 || glass == 0 {
            return None;
        }
        Self::try_new(row - 1, glass - 1)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn column(self) -> usize {
        self.column
    }

    /// Index of this position in a row-major triangular arena.
    pub fn index(self) -> usize {
        glass_count(self.row) + self.column
    }

    /// The glass directly below and to the left: `(r + 1, c)`.
    pub fn left_child(self) -> Self {
        Self {
            row: self.row + 1,
            column: self.column,
        }
    }

    /// The glass directly below and to the right: `(r + 1, c + 1)`.
    pub fn right_child(self) -> Self {
        Self {
            row: self.row + 1,
            column: self.column + 1,
        }
    }

    /// Whether this position exists in a pyramid with `rows` rows.
    pub fn fits(self, rows: usize) -> bool {
        self.row < rows
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
