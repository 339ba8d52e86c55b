/*
grid.rs

Copyright 2025 The Wordhunt Authors

This file is part of Wordhunt.

Wordhunt is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordhunt is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordhunt. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Square letter grid.
//!
//! Cells are stored row by row in a flat vector.
//! A cell is either empty or holds one uppercase ASCII letter.

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::direction::Direction;
use super::rng::SeededRng;

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Cell coordinates. `row` 0 is the top row, `col` 0 the leftmost column.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position `steps` cells away in the given direction, or None if that would go
    /// above the top row or left of the first column.
    pub fn offset(self, direction: Direction, steps: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let steps: isize = isize::try_from(steps).ok()?;
        Some(Self {
            row: self.row.checked_add_signed(d_row.checked_mul(steps)?)?,
            col: self.col.checked_add_signed(d_col.checked_mul(steps)?)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A word written into the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Uppercase word, as written in the grid.
    pub word: String,

    /// Position of the first letter.
    pub origin: Position,

    pub direction: Direction,
}

impl Placement {
    /// Return the positions of the word letters, first letter first.
    pub fn cells(&self) -> Vec<Position> {
        (0..self.word.len())
            .filter_map(|i| self.origin.offset(self.direction, i))
            .collect()
    }
}

/// Letter grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a grid from rows of letters. Any character that is not an ASCII letter gives an
    /// empty cell.
    ///
    /// # Errors
    ///
    /// Return an error if the rows do not form a square.
    pub fn from_rows(rows: &[&str]) -> Result<Self, String> {
        let size: usize = rows.len();
        let mut grid: Grid = Grid::new(size);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != size {
                return Err(format!(
                    "Row {row} has {} cells instead of {size}",
                    line.len()
                ));
            }
            for (col, b) in line.bytes().enumerate() {
                if b.is_ascii_alphabetic() {
                    grid.set(Position::new(row, col), b.to_ascii_uppercase());
                }
            }
        }
        Ok(grid)
    }

    /// Grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Return the letter at the given position, or None if the cell is empty or outside the grid.
    pub fn get(&self, pos: Position) -> Option<u8> {
        if self.contains(pos) {
            self.cells[pos.row * self.size + pos.col]
        } else {
            None
        }
    }

    /// Write a letter. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Position, letter: u8) {
        if self.contains(pos) {
            self.cells[pos.row * self.size + pos.col] = Some(letter);
        }
    }

    /// Whether every cell holds a letter.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Return, for each cell in row order, whether the cell holds a letter.
    pub fn occupancy(&self) -> Vec<bool> {
        self.cells.iter().map(Option::is_some).collect()
    }

    /// Fill every empty cell with a random letter, in row order.
    pub fn fill_empty(&mut self, rng: &mut SeededRng) {
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(ALPHABET[rng.random_int(ALPHABET.len())]);
        }
    }

    /// Shuffle the letters of the cells that are not marked in `keep` among themselves.
    ///
    /// `keep` is indexed like the cells (see [`Grid::occupancy`]); the letters in the kept cells
    /// do not move.
    pub fn shuffle_free_cells(&mut self, keep: &[bool], rng: &mut SeededRng) {
        let free: Vec<usize> = (0..self.cells.len())
            .filter(|&i| !keep.get(i).copied().unwrap_or(false))
            .collect();
        let mut letters: Vec<Option<u8>> = free.iter().map(|&i| self.cells[i]).collect();
        rng.shuffle(&mut letters);
        for (i, letter) in free.into_iter().zip(letters) {
            self.cells[i] = letter;
        }
    }

    /// Return the grid as a matrix of characters. Empty cells are spaces.
    pub fn to_matrix(&self) -> Vec<Vec<char>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|c| c.map_or(' ', char::from)).collect())
            .collect()
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_matrix())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.to_matrix() {
            let line: Vec<String> = row
                .iter()
                .map(|c| if *c == ' ' { ".".to_string() } else { c.to_string() })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
