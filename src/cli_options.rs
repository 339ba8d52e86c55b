/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate the grid of the current daily game:
//!
//! ```
//! $ wordhunt --seed 5eed
//! ```
//!
//! Hide custom words in a 10x10 grid, fail if one of them does not fit, and print the result in
//! JSON:
//!
//! ```
//! $ wordhunt --size 10 --require-all --json hodl fomo satoshi
//! {
//!   "seed": "8f0c2b5e61d7a3c4",
//!   "size": 10,
//!   "grid": [
//!     ["K", "Q", "F", ...],
//!     ...
//!   ],
//!   "placedWords": ["SATOSHI", "FOMO", "HODL"],
//!   "placements": [...]
//! }
//! ```

use clap::Parser;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

use wordhunt::config::{COPYRIGHT_NOTICE, MAX_GRID_ATTEMPTS};
use wordhunt::generator;
use wordhunt::generator::builder::GeneratedGrid;
use wordhunt::options::{self, GeneratorOptions, PlacementPolicy};
use wordhunt::word_lists::{self, DailyWords, Difficulty};

/// Generate word search grids.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Words to hide in the grid. Without words, the words of the daily game are used
    words: Vec<String>,

    /// Grid size
    #[arg(short, long)]
    size: Option<usize>,

    /// Seed for the grid. A random seed is used when not provided
    #[arg(long)]
    seed: Option<String>,

    /// Daily game number (1 in the morning, 2 in the afternoon). Defaults to the current game
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    game: Option<u8>,

    /// Difficulty level for the daily words, instead of the level of the game
    #[arg(value_enum, short = 'f', long)]
    difficulty: Option<Difficulty>,

    /// Fail if a word cannot be placed, after generating several grids
    #[arg(short, long, default_value_t = false)]
    require_all: bool,

    /// Maximum number of grids to generate with --require-all
    #[arg(long, requires = "require_all")]
    grid_attempts: Option<usize>,

    /// Maximum number of random positions to try for each word
    #[arg(long)]
    word_attempts: Option<usize>,

    /// Do not shuffle the filler letters
    #[arg(long, default_value_t = false)]
    no_reshuffle: bool,

    /// Print the grid in JSON format
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// JSON file with the generator options. Command-line options take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// JSON output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Output<'a> {
    #[serde(flatten)]
    generated: &'a GeneratedGrid,

    #[serde(skip_serializing_if = "Option::is_none")]
    hidden_word: Option<&'a str>,
}

/// Return a random seed, as 16 hexadecimal digits.
fn random_seed() -> String {
    format!("{:016x}", rand::rng().random::<u64>())
}

/// Build the generator options from the options file and the command-line options.
fn build_options(args: &Args) -> Result<GeneratorOptions, String> {
    let mut gen_options: GeneratorOptions = match &args.config {
        Some(path) => match options::load_options(path) {
            Ok(Some(o)) => o,
            Ok(None) => return Err(format!("{}: file not found", path.display())),
            Err(e) => return Err(format!("{}: {e}", path.display())),
        },
        None => GeneratorOptions::default(),
    };

    if let Some(size) = args.size {
        gen_options.size = size;
    }
    if let Some(attempts) = args.word_attempts {
        gen_options.max_word_attempts = attempts;
    }
    if args.no_reshuffle {
        gen_options.reshuffle_fill = false;
    }
    if args.require_all {
        let current: usize = match gen_options.policy {
            PlacementPolicy::RequireAll { max_grid_attempts } => max_grid_attempts,
            PlacementPolicy::BestEffort => MAX_GRID_ATTEMPTS,
        };
        gen_options.policy = PlacementPolicy::RequireAll {
            max_grid_attempts: args.grid_attempts.unwrap_or(current),
        };
    }
    gen_options.validate()?;
    Ok(gen_options)
}

/// Print the grid and the list of words.
fn print_text(generated: &GeneratedGrid, words: &[String], daily: Option<&DailyWords>) {
    print!("{}", generated.grid);
    println!();
    println!("Seed: {}", generated.seed);
    if let Some(d) = daily {
        println!("Difficulty: {}", d.difficulty);
    }

    let mut total: usize = 0;
    for placement in &generated.placements {
        let points: usize = word_lists::word_points(&placement.word);
        total += points;
        let hidden: &str = match daily {
            Some(d) if d.is_hidden(&placement.word) => "  (hidden word)",
            _ => "",
        };
        println!(
            "  {:<14} {:<9} {:<11} {points:>3} points{hidden}",
            placement.word,
            placement.origin.to_string(),
            placement.direction.to_string(),
        );
    }
    println!("Total: {total} points");

    let unplaced: Vec<String> = generated.unplaced_words(words);
    if !unplaced.is_empty() {
        println!("Not placed: {}", unplaced.join(", "));
    }
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let gen_options: GeneratorOptions = match build_options(&args) {
        Ok(o) => o,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return 1;
        }
    };
    debug!("Options: {gen_options:?}");

    //
    // Select the words: from the command line, or the daily game
    //
    let daily: Option<DailyWords> = if args.words.is_empty() {
        let today = word_lists::key_date(&chrono::Local::now());
        let game: u8 = args.game.unwrap_or_else(word_lists::current_game);
        let difficulty: Difficulty = args
            .difficulty
            .unwrap_or_else(|| Difficulty::for_game(game));
        info!("Daily game {game} of {today} ({difficulty})");
        Some(word_lists::daily_words_with(today, game, difficulty))
    } else {
        None
    };
    let words: Vec<String> = match &daily {
        Some(d) => d.all_words(),
        None => args.words.clone(),
    };

    let seed: String = args.seed.clone().unwrap_or_else(random_seed);

    let generated: GeneratedGrid = match generator::generate(&words, &seed, &gen_options) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if args.json {
        let output: Output = Output {
            generated: &generated,
            hidden_word: daily.as_ref().map(|d| d.hidden_word.as_str()),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
    } else {
        print_text(&generated, &words, daily.as_ref());
    }
    0
}
