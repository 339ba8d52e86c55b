/*
word_lists.rs

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

//! Built-in word lists and the daily games.
//!
//! There are two games a day: game 1 in the morning and game 2 from noon.
//! Each game uses the regular words of its difficulty level, plus one hidden word that depends on
//! the date.
//! Everybody gets the same words for a given game.

use chrono::{DateTime, NaiveDate, TimeZone, Timelike, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

const EASY_WORDS: [&str; 10] = [
    "BITCOIN", "ETHEREUM", "WALLET", "MINING", "TOKEN", "BLOCK", "COIN", "HASH", "KEY", "NODE",
];

const MEDIUM_WORDS: [&str; 10] = [
    "BLOCKCHAIN",
    "CRYPTOGRAPHY",
    "ALTCOIN",
    "BINANCE",
    "STAKING",
    "DEFI",
    "METAMASK",
    "LEDGER",
    "PROTOCOL",
    "EXCHANGE",
];

const HARD_WORDS: [&str; 10] = [
    "CRYPTOCURRENCY",
    "DECENTRALIZED",
    "SMARTCONTRACT",
    "TOKENOMICS",
    "GOVERNANCE",
    "CONSENSUS",
    "VALIDATION",
    "LIQUIDITY",
    "CRYPTOGRAPHY",
    "BLOCKCHAIN",
];

const EASY_HIDDEN_WORDS: [&str; 5] = ["SATOSHI", "HODL", "FOMO", "DYOR", "FUD"];

const MEDIUM_HIDDEN_WORDS: [&str; 5] = ["POLYGON", "AVALANCHE", "CHAINLINK", "OPTIMISM", "ARBITRUM"];

const HARD_HIDDEN_WORDS: [&str; 5] = ["ZKSYNC", "STARKNET", "MOONSHOT", "DIAMONDHANDS", "WAGMI"];

/// Base points for finding a word.
const BASE_POINTS: usize = 100;

/// Extra points for each letter after the fourth.
const LETTER_BONUS: usize = 20;

/// Difficulty level.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(u8)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Difficulty of the given game of the day. Game 1 is easy, game 2 is medium, and game 3 is
    /// hard.
    pub fn for_game(game: u8) -> Self {
        Difficulty::from_repr(game.saturating_sub(1)).unwrap_or(Difficulty::Hard)
    }

    /// Regular words.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &EASY_WORDS,
            Difficulty::Medium => &MEDIUM_WORDS,
            Difficulty::Hard => &HARD_WORDS,
        }
    }

    /// Candidates for the hidden bonus word.
    pub fn hidden_words(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &EASY_HIDDEN_WORDS,
            Difficulty::Medium => &MEDIUM_HIDDEN_WORDS,
            Difficulty::Hard => &HARD_HIDDEN_WORDS,
        }
    }
}

/// Return the game number for the given hour of the day: 1 before noon, 2 after.
pub fn game_number(hour: u32) -> u8 {
    if hour < 12 { 1 } else { 2 }
}

/// Return the number of the current game, from the local time.
pub fn current_game() -> u8 {
    game_number(chrono::Local::now().hour())
}

/// Return the date used to select the hidden word: the UTC date of `now`.
///
/// Players in every time zone get the same hidden word at the same moment. The game number still
/// comes from the local hour (see [`current_game`]).
pub fn key_date<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.with_timezone(&Utc).date_naive()
}

/// Words of a game.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyWords {
    pub difficulty: Difficulty,

    /// Regular words, which are shown to the player.
    pub words: Vec<String>,

    /// Bonus word, which is not shown to the player.
    pub hidden_word: String,
}

impl DailyWords {
    /// Return the regular words followed by the hidden word.
    pub fn all_words(&self) -> Vec<String> {
        let mut all: Vec<String> = self.words.clone();
        all.push(self.hidden_word.clone());
        all
    }

    /// Whether the word is the hidden word. The comparison ignores case.
    pub fn is_hidden(&self, word: &str) -> bool {
        self.hidden_word.eq_ignore_ascii_case(word.trim())
    }
}

/// Return the words for the given date and game.
///
/// The hidden word is selected by reading the date as `YYYYMMDD`, followed by the game number, as
/// a decimal number, modulo the number of hidden word candidates.
pub fn daily_words(date: NaiveDate, game: u8) -> DailyWords {
    daily_words_with(date, game, Difficulty::for_game(game))
}

/// Return the words for the given date and game, but with the words of another difficulty level.
pub fn daily_words_with(date: NaiveDate, game: u8, difficulty: Difficulty) -> DailyWords {
    let key: String = format!("{}{game}", date.format("%Y%m%d"));
    // The year can be negative, which gives a leading minus sign
    let number: u64 = key.trim_start_matches('-').parse().unwrap_or(0);
    let hidden: &[&str] = difficulty.hidden_words();
    let index: usize = (number % hidden.len() as u64) as usize;

    DailyWords {
        difficulty,
        words: difficulty.words().iter().map(|w| w.to_string()).collect(),
        hidden_word: hidden[index].to_string(),
    }
}

/// Points earned for finding the word.
pub fn word_points(word: &str) -> usize {
    BASE_POINTS + word.len().saturating_sub(4) * LETTER_BONUS
}
