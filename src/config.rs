/*
config.rs

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

//! Build-time constants.

/// Default grid dimension (the grid is `DEFAULT_SIZE` x `DEFAULT_SIZE`).
pub const DEFAULT_SIZE: usize = 12;

/// Largest grid dimension.
pub const MAX_SIZE: usize = 256;

/// Number of random (origin, direction) draws tried for one word before giving up on it.
pub const MAX_WORD_ATTEMPTS: usize = 200;

/// Number of whole grids generated before reporting a failure when every word is required.
pub const MAX_GRID_ATTEMPTS: usize = 100;

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 The Wordhunt Authors
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);
