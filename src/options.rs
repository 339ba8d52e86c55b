/*
options.rs

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

//! Generator options.
//!
//! The options can be stored in a JSON file, which is a serialization of the
//! [`GeneratorOptions`] object by using [`serde`].
//! Missing fields take their default value.
//!
//! ```json
//! {
//!   "size": 15,
//!   "max_word_attempts": 200,
//!   "reshuffle_fill": true,
//!   "policy": { "mode": "require-all", "max_grid_attempts": 100 }
//! }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use crate::config::{DEFAULT_SIZE, MAX_GRID_ATTEMPTS, MAX_SIZE, MAX_WORD_ATTEMPTS};

/// What to do when some words cannot be placed.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum PlacementPolicy {
    /// Return the grid with the words that could be placed.
    #[default]
    BestEffort,

    /// Every word must be in the grid. Whole grids are generated again until that is the case,
    /// up to `max_grid_attempts` times.
    RequireAll { max_grid_attempts: usize },
}

impl PlacementPolicy {
    /// [`PlacementPolicy::RequireAll`] with the default number of attempts.
    pub fn require_all() -> Self {
        PlacementPolicy::RequireAll {
            max_grid_attempts: MAX_GRID_ATTEMPTS,
        }
    }
}

/// Grid generation parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Grid dimension.
    pub size: usize,

    /// Number of random positions tried for each word.
    pub max_word_attempts: usize,

    /// Shuffle the filler letters among themselves after filling the grid.
    pub reshuffle_fill: bool,

    pub policy: PlacementPolicy,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_word_attempts: MAX_WORD_ATTEMPTS,
            reshuffle_fill: true,
            policy: PlacementPolicy::BestEffort,
        }
    }
}

impl GeneratorOptions {
    /// Default options for the given grid size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Check the option values.
    ///
    /// # Errors
    ///
    /// The method returns an error message when the grid size is 0 or larger than [`MAX_SIZE`],
    /// or when the [`PlacementPolicy::RequireAll`] policy allows no attempt.
    pub fn validate(&self) -> Result<(), String> {
        if self.size == 0 {
            return Err("The grid size must be at least 1".to_string());
        }
        if self.size > MAX_SIZE {
            return Err(format!("The grid size must be at most {MAX_SIZE}"));
        }
        if let PlacementPolicy::RequireAll { max_grid_attempts: 0 } = self.policy {
            return Err("The number of grid attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Read the options from a JSON file.
///
/// Return the [`GeneratorOptions`] object or None if the file does not exist.
pub fn load_options(path: &Path) -> Result<Option<GeneratorOptions>, Box<dyn Error>> {
    debug!("Options file: {path:?}");
    let file: File = match File::open(path) {
        Ok(f) => f,
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Ok(None),
            _ => return Err(Box::new(error)),
        },
    };
    let reader: BufReader<File> = BufReader::new(file);
    let options: GeneratorOptions = serde_json::from_reader(reader)?;
    Ok(Some(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let options: GeneratorOptions = GeneratorOptions::default();
        assert_eq!(options.size, 12);
        assert_eq!(options.max_word_attempts, 200);
        assert!(options.reshuffle_fill);
        assert_eq!(options.policy, PlacementPolicy::BestEffort);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let options: GeneratorOptions =
            serde_json::from_str(r#"{"size": 15, "policy": {"mode": "require-all", "max_grid_attempts": 7}}"#)
                .unwrap();
        assert_eq!(options.size, 15);
        assert_eq!(options.max_word_attempts, 200);
        assert_eq!(
            options.policy,
            PlacementPolicy::RequireAll {
                max_grid_attempts: 7
            }
        );
    }

    #[test]
    fn json_round_trip() {
        let options: GeneratorOptions = GeneratorOptions {
            size: 10,
            max_word_attempts: 50,
            reshuffle_fill: false,
            policy: PlacementPolicy::require_all(),
        };
        let json: String = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r#""mode":"require-all""#));
        let back: GeneratorOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn validate() {
        assert!(GeneratorOptions::default().validate().is_ok());
        assert!(GeneratorOptions::with_size(1).validate().is_ok());
        assert!(GeneratorOptions::with_size(MAX_SIZE).validate().is_ok());
        assert!(GeneratorOptions::with_size(0).validate().is_err());
        assert!(GeneratorOptions::with_size(MAX_SIZE + 1).validate().is_err());
        assert!(GeneratorOptions::with_size(usize::MAX / 2).validate().is_err());

        let no_attempt: GeneratorOptions = GeneratorOptions {
            policy: PlacementPolicy::RequireAll {
                max_grid_attempts: 0,
            },
            ..GeneratorOptions::default()
        };
        assert!(no_attempt.validate().is_err());
    }

    #[test]
    fn load_missing_file() {
        let path = std::env::temp_dir().join("wordhunt-options-does-not-exist.json");
        assert!(load_options(&path).unwrap().is_none());
    }

    #[test]
    fn load_file() {
        let path = std::env::temp_dir().join(format!("wordhunt-options-{}.json", std::process::id()));
        let mut file: File = File::create(&path).unwrap();
        file.write_all(br#"{"size": 9, "reshuffle_fill": false}"#).unwrap();
        drop(file);

        let options: GeneratorOptions = load_options(&path).unwrap().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(options.size, 9);
        assert!(!options.reshuffle_fill);
    }

    #[test]
    fn load_invalid_file() {
        let path = std::env::temp_dir().join(format!("wordhunt-bad-{}.json", std::process::id()));
        std::fs::write(&path, "not json").unwrap();
        let result = load_options(&path);
        let _ = std::fs::remove_file(&path);
        assert!(result.is_err());
    }
}
