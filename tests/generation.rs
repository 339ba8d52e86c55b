/*
generation.rs

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

use wordhunt::generator::builder::{GeneratedGrid, generate_grid};
use wordhunt::generator::direction::Direction;
use wordhunt::generator::grid::{Grid, Position};
use wordhunt::generator::verifier::{GenerationError, verify};
use wordhunt::generator;
use wordhunt::options::{GeneratorOptions, PlacementPolicy};
use wordhunt::word_lists::{Difficulty, daily_words};

/// Whether the word can be read from some cell along some direction.
fn locate(grid: &Grid, word: &str) -> Option<(Position, Direction)> {
    let size: usize = grid.size();
    for row in 0..size {
        for col in 0..size {
            for direction in Direction::ALL {
                let origin: Position = Position::new(row, col);
                let matches: bool = word.bytes().enumerate().all(|(i, letter)| {
                    origin
                        .offset(direction, i)
                        .and_then(|pos| grid.get(pos))
                        == Some(letter)
                });
                if matches {
                    return Some((origin, direction));
                }
            }
        }
    }
    None
}

fn assert_full(generated: &GeneratedGrid, size: usize) {
    let matrix: Vec<Vec<char>> = generated.grid.to_matrix();
    assert_eq!(matrix.len(), size);
    for row in matrix {
        assert_eq!(row.len(), size);
        assert!(row.iter().all(|c| c.is_ascii_uppercase()));
    }
}

#[test]
fn single_word_with_zero_seed() {
    let generated: GeneratedGrid = generate_grid(&["BITCOIN"], 12, "0000000000000000");
    assert_full(&generated, 12);
    assert_eq!(generated.placed_words, vec!["BITCOIN".to_string()]);
    assert!(locate(&generated.grid, "BITCOIN").is_some());
}

#[test]
fn no_words() {
    let none: [&str; 0] = [];
    let generated: GeneratedGrid = generate_grid(&none, 10, "anyseed");
    assert_full(&generated, 10);
    assert!(generated.placed_words.is_empty());
    assert!(generated.placements.is_empty());
}

#[test]
fn same_seed_same_grid() {
    let words = ["ETHEREUM", "WALLET", "MINING"];
    let a: GeneratedGrid = generate_grid(&words, 12, "3f2a9c");
    let b: GeneratedGrid = generate_grid(&words, 12, "3f2a9c");
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.placed_words, b.placed_words);
    assert_eq!(a.placements, b.placements);
}

#[test]
fn word_longer_than_grid() {
    let words = ["ABCDEFGHIJKLMNOPQRST", "NODE"];
    for seed in ["0", "1", "anyseed", "ffffffffffffffff"] {
        let generated: GeneratedGrid = generate_grid(&words, 10, seed);
        assert_full(&generated, 10);
        assert!(
            !generated
                .placed_words
                .contains(&"ABCDEFGHIJKLMNOPQRST".to_string())
        );
    }
}

#[test]
fn placements_match_the_grid() {
    for game in 1..=3 {
        let words: Vec<String> = daily_words(
            chrono::NaiveDate::from_ymd_opt(2025, 2, 14).unwrap(),
            game,
        )
        .all_words();
        for seed in ["a", "b", "c", "0123456789abcdef"] {
            let generated: GeneratedGrid = generate_grid(&words, 15, seed);
            assert_full(&generated, 15);
            assert!(generated.placed_words.len() <= words.len());
            assert_eq!(generated.placed_words.len(), generated.placements.len());

            for (word, placement) in generated.placed_words.iter().zip(&generated.placements) {
                assert_eq!(word, &placement.word);
                let cells: Vec<Position> = placement.cells();
                assert_eq!(cells.len(), word.len());
                for (pos, letter) in cells.iter().zip(word.bytes()) {
                    assert_eq!(generated.grid.get(*pos), Some(letter));
                }
            }
            assert!(verify(&generated.grid, &generated.placed_words));
        }
    }
}

#[test]
fn lowercase_words_are_normalized() {
    let generated: GeneratedGrid = generate_grid(&["satoshi"], 12, "7");
    assert_eq!(generated.placed_words, vec!["SATOSHI".to_string()]);
    assert!(locate(&generated.grid, "SATOSHI").is_some());
}

#[test]
fn require_all_policy() {
    let words: Vec<String> = Difficulty::Easy
        .words()
        .iter()
        .map(|w| w.to_string())
        .collect();
    let options: GeneratorOptions = GeneratorOptions {
        policy: PlacementPolicy::require_all(),
        ..GeneratorOptions::default()
    };
    let generated: GeneratedGrid = generator::generate(&words, "beef", &options).unwrap();
    assert_eq!(generated.placed_words.len(), words.len());
    assert!(verify(&generated.grid, &words));

    let again: GeneratedGrid = generator::generate(&words, "beef", &options).unwrap();
    assert_eq!(generated, again);
}

#[test]
fn require_all_reports_failure() {
    let options: GeneratorOptions = GeneratorOptions {
        size: 10,
        policy: PlacementPolicy::RequireAll {
            max_grid_attempts: 5,
        },
        ..GeneratorOptions::default()
    };
    let result = generator::generate(&["HASH", "ABCDEFGHIJKLMNOPQRST"], "0", &options);
    assert_eq!(
        result,
        Err(GenerationError::MissingWords {
            attempts: 5,
            missing: vec!["ABCDEFGHIJKLMNOPQRST".to_string()],
        })
    );
}

#[test]
fn best_effort_policy_never_fails() {
    let options: GeneratorOptions = GeneratorOptions::with_size(10);
    let generated: GeneratedGrid =
        generator::generate(&["HASH", "ABCDEFGHIJKLMNOPQRST"], "0", &options).unwrap();
    assert_eq!(generated.placed_words, vec!["HASH".to_string()]);
}
