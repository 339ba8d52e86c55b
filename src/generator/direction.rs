/*
direction.rs

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

//! The eight compass directions a word can run along.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a word in the grid, from its first letter to its last.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
    Left,
    Up,
    UpLeft,
    DownLeft,
}

impl Direction {
    /// All the directions.
    ///
    /// The placer shuffles this list before use, but the order still matters for reproducing a
    /// grid from its seed.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
        Direction::Left,
        Direction::Up,
        Direction::UpLeft,
        Direction::DownLeft,
    ];

    /// Directions read by the verifier.
    /// Every line of the grid is covered once by one of them.
    pub const SCAN: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Row and column increments, as `(d_row, d_col)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::UpRight => (-1, 1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::DownLeft => (1, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::DownRight => Direction::UpLeft,
            Direction::UpRight => Direction::DownLeft,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownLeft => Direction::UpRight,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::DownRight => write!(f, "down-right"),
            Direction::UpRight => write!(f, "up-right"),
            Direction::Left => write!(f, "left"),
            Direction::Up => write!(f, "up"),
            Direction::UpLeft => write!(f, "up-left"),
            Direction::DownLeft => write!(f, "down-left"),
        }
    }
}
