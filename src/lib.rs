/*
lib.rs

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

//! Word search grid generator.
//!
//! Given a list of words, a grid size, and a seed, [`generator::generate`] hides the words in a
//! square grid of letters along any of the eight compass directions and fills the other cells
//! with random letters.
//! The result only depends on the inputs, so a grid can be rebuilt from its seed.
//!
//! ```
//! use wordhunt::generator::builder::generate_grid;
//!
//! let generated = generate_grid(&["bitcoin", "wallet"], 12, "5eed");
//! assert_eq!(generated.grid.size(), 12);
//! assert!(generated.placed_words.len() <= 2);
//! ```

pub mod config;
pub mod generator;
pub mod options;
pub mod word_lists;
