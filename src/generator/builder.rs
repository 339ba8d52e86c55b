/*
builder.rs

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

//! Build a complete grid from a list of words.
//!
//! The words are placed one after the other with a [`WordPlacer`].
//! The words that do not fit are skipped.
//! The remaining cells are then filled with random letters.

use log::{debug, warn};
use serde::Serialize;

use super::grid::{Grid, Placement};
use super::placer::WordPlacer;
use super::rng::SeededRng;
use crate::config::MAX_SIZE;
use crate::options::GeneratorOptions;

/// Result of a grid generation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGrid {
    /// Seed the grid was generated from.
    pub seed: String,

    pub size: usize,

    /// Completed grid. Every cell holds an uppercase letter.
    pub grid: Grid,

    /// Uppercase words that are in the grid, in the order they were placed.
    pub placed_words: Vec<String>,

    /// Where each word of [`GeneratedGrid::placed_words`] is, in the same order.
    pub placements: Vec<Placement>,
}

impl GeneratedGrid {
    /// Return the words from the given list that were not placed, after normalization.
    ///
    /// A word given several times is reported once for each copy that was not placed.
    pub fn unplaced_words<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let mut placed: Vec<&str> = self.placed_words.iter().map(String::as_str).collect();
        normalize_words(words)
            .into_iter()
            .filter(|w| match placed.iter().position(|p| p == w) {
                Some(i) => {
                    placed.swap_remove(i);
                    false
                }
                None => true,
            })
            .collect()
    }
}

/// Trim and uppercase a word.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

/// Trim and uppercase the words (see [`normalize_word`]).
///
/// Empty words and words with characters other than the letters A to Z are dropped: they could
/// not be found in a grid made of letters only.
pub fn normalize_words<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .filter_map(|w| {
            let word: String = normalize_word(w.as_ref());
            if !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase()) {
                Some(word)
            } else {
                warn!("Ignoring word {:?}: only letters A to Z are allowed", w.as_ref());
                None
            }
        })
        .collect()
}

/// [`GridBuilder`] object.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    /// Grid dimension.
    pub size: usize,

    /// Shuffle the filler letters after filling the grid.
    pub reshuffle_fill: bool,

    placer: WordPlacer,
}

impl GridBuilder {
    /// Create the object.
    ///
    /// A size larger than [`MAX_SIZE`] is reduced to [`MAX_SIZE`].
    pub fn new(options: &GeneratorOptions) -> Self {
        if options.size > MAX_SIZE {
            warn!("Grid size {} reduced to {MAX_SIZE}", options.size);
        }
        Self {
            size: options.size.min(MAX_SIZE),
            reshuffle_fill: options.reshuffle_fill,
            placer: WordPlacer::new(options.max_word_attempts),
        }
    }

    /// Build a complete grid.
    ///
    /// `words` must already be normalized (see [`normalize_words`]).
    /// The words are sorted longest first, and then shuffled.
    /// Return the grid and the placements of the words that fit, in placement order.
    pub fn build(&self, words: &[String], rng: &mut SeededRng) -> (Grid, Vec<Placement>) {
        let mut grid: Grid = Grid::new(self.size);

        let mut sorted: Vec<&String> = words.iter().collect();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()));
        rng.shuffle(&mut sorted);

        let placements: Vec<Placement> = sorted
            .into_iter()
            .filter_map(|word| self.placer.attempt_placement(word, &mut grid, rng))
            .collect();

        // Cells that belong to a word
        let occupied: Vec<bool> = grid.occupancy();

        grid.fill_empty(rng);
        if self.reshuffle_fill {
            grid.shuffle_free_cells(&occupied, rng);
        }
        (grid, placements)
    }
}

/// Generate a grid with the given options. Words that cannot be placed are skipped.
///
/// The [`GeneratorOptions::policy`] parameter is not used. See
/// [`crate::generator::verifier::generate_verified`] when every word must be in the grid.
pub fn generate_grid_with<S: AsRef<str>>(
    words: &[S],
    seed: &str,
    options: &GeneratorOptions,
) -> GeneratedGrid {
    let words: Vec<String> = normalize_words(words);
    let mut rng: SeededRng = SeededRng::from_seed(seed);
    let (grid, placements) = GridBuilder::new(options).build(&words, &mut rng);
    let generated: GeneratedGrid = GeneratedGrid {
        seed: seed.to_string(),
        size: grid.size(),
        grid,
        placed_words: placements.iter().map(|p| p.word.clone()).collect(),
        placements,
    };

    debug!(
        "Grid generation: seed = {}  total words = {}  placed words = {}  placed list = {}",
        seed,
        words.len(),
        generated.placed_words.len(),
        generated.placed_words.join(", ")
    );
    generated
}

/// Generate a `size` x `size` grid with the default options.
pub fn generate_grid<S: AsRef<str>>(words: &[S], size: usize, seed: &str) -> GeneratedGrid {
    generate_grid_with(words, seed, &GeneratorOptions::with_size(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize() {
        let words: Vec<String> = normalize_words(&[" bitcoin ", "Hash", "", "SMART CONTRACT", "fud2", "été"]);
        assert_eq!(words, vec!["BITCOIN".to_string(), "HASH".to_string()]);
    }

    #[test]
    fn build_places_words_and_fills() {
        let words: Vec<String> = normalize_words(&["wallet", "mining", "token"]);
        let mut rng: SeededRng = SeededRng::from_seed("5eed");
        let (grid, placements) =
            GridBuilder::new(&GeneratorOptions::default()).build(&words, &mut rng);

        assert!(grid.is_complete());
        assert_eq!(placements.len(), 3);
        for p in &placements {
            let read: Vec<u8> = p.cells().iter().filter_map(|c| grid.get(*c)).collect();
            assert_eq!(read, p.word.as_bytes());
        }
    }

    #[test]
    fn reshuffle_does_not_touch_words() {
        let words: Vec<String> = normalize_words(&["blockchain", "ledger", "defi", "staking"]);
        for reshuffle_fill in [false, true] {
            let options: GeneratorOptions = GeneratorOptions {
                reshuffle_fill,
                ..GeneratorOptions::default()
            };
            let mut rng: SeededRng = SeededRng::from_seed("ab12");
            let (grid, placements) = GridBuilder::new(&options).build(&words, &mut rng);
            assert!(grid.is_complete());
            for p in &placements {
                let read: Vec<u8> = p.cells().iter().filter_map(|c| grid.get(*c)).collect();
                assert_eq!(read, p.word.as_bytes());
            }
        }
    }

    #[test]
    fn reshuffle_changes_only_the_filler() {
        let words: Vec<String> = normalize_words(&["protocol"]);
        let mut rng: SeededRng = SeededRng::from_seed("77");
        let plain: GridBuilder = GridBuilder::new(&GeneratorOptions {
            reshuffle_fill: false,
            ..GeneratorOptions::default()
        });
        let (grid, placements) = plain.build(&words, &mut rng);

        // Same stream up to the fill, then a reshuffle
        let mut rng2: SeededRng = SeededRng::from_seed("77");
        let (shuffled, placements2) =
            GridBuilder::new(&GeneratorOptions::default()).build(&words, &mut rng2);
        assert_eq!(placements, placements2);

        let mut letters: Vec<char> = grid.to_matrix().concat();
        let mut letters2: Vec<char> = shuffled.to_matrix().concat();
        assert_ne!(letters, letters2);
        letters.sort_unstable();
        letters2.sort_unstable();
        assert_eq!(letters, letters2);
    }

    #[test]
    fn generate_is_deterministic() {
        let words = ["ethereum", "wallet", "node"];
        let a: GeneratedGrid = generate_grid(&words, 12, "feedface");
        let b: GeneratedGrid = generate_grid(&words, 12, "feedface");
        assert_eq!(a, b);
        assert_eq!(a.seed, "feedface");
        assert_eq!(a.size, 12);
    }

    #[test]
    fn different_seeds_differ() {
        let words = ["ethereum", "wallet", "node"];
        let a: GeneratedGrid = generate_grid(&words, 12, "1");
        let b: GeneratedGrid = generate_grid(&words, 12, "2");
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn unplaced_words() {
        let words = ["key", "cryptocurrency"];
        let generated: GeneratedGrid = generate_grid(&words, 6, "0");
        assert_eq!(generated.placed_words, vec!["KEY".to_string()]);
        assert_eq!(generated.unplaced_words(&words), vec!["CRYPTOCURRENCY".to_string()]);
    }

    #[test]
    fn unplaced_duplicates_are_counted() {
        let generated: GeneratedGrid = GeneratedGrid {
            seed: "0".to_string(),
            size: 3,
            grid: Grid::new(3),
            placed_words: vec!["KEY".to_string()],
            placements: Vec::new(),
        };
        assert_eq!(generated.unplaced_words(&["KEY", "key"]), vec!["KEY".to_string()]);
        assert_eq!(
            generated.unplaced_words(&["FUD", "KEY", "KEY", "KEY"]),
            vec!["FUD".to_string(), "KEY".to_string(), "KEY".to_string()]
        );
        assert!(generated.unplaced_words(&["key"]).is_empty());
    }

    #[test]
    fn oversized_grid_is_bounded() {
        let generated: GeneratedGrid = generate_grid(&["KEY"], usize::MAX / 2, "0");
        assert_eq!(generated.size, MAX_SIZE);
        assert_eq!(generated.grid.size(), MAX_SIZE);
        assert!(generated.grid.is_complete());
        assert_eq!(generated.placed_words, vec!["KEY".to_string()]);
    }

    #[test]
    fn serialize_camel_case() {
        let generated: GeneratedGrid = generate_grid(&["coin"], 5, "0");
        let json: serde_json::Value = serde_json::to_value(&generated).unwrap();
        assert_eq!(json["placedWords"][0], "COIN");
        assert_eq!(json["grid"].as_array().unwrap().len(), 5);
        assert_eq!(json["placements"][0]["word"], "COIN");
    }
}
