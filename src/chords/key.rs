//! Pitch model: the twelve-tone chromatic circle and its spelling rules.
//!
//! A [`SongKey`] is one of 17 named keys covering the 12 chromatic positions
//! (enharmonic spellings share a position). Spelling tables decide which name
//! a transposed position renders as. The `BFlat` → `"B"` / `B` → `"H"` pair
//! follows the regional convention the song data was written in; the mapping
//! is a fixed table, not derivable from standard notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Number of semitones in the chromatic circle.
pub const SONG_KEY_COUNT: i32 = 12;

/// Modulo that always yields a result in `[0, b)`: `((a % b) + b) % b`.
///
/// Used for every position computation so negative transposition steps wrap
/// correctly.
#[must_use]
pub const fn non_negative_mod(a: i32, b: i32) -> i32 {
    ((a % b) + b) % b
}

/// Reduce a (possibly negative) chromatic position to a table index.
#[allow(clippy::cast_sign_loss)] // non_negative_mod result is in [0, 12)
const fn table_index(position: i32) -> usize {
    non_negative_mod(position, SONG_KEY_COUNT) as usize
}

/// A named musical key.
///
/// Variant declaration order is significant: chord tokens are matched against
/// key names in this order, so multi-character names (`C#`) are tried before
/// their single-letter prefixes (`C`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SongKey {
    /// C sharp (displayed `C#`).
    CSharp,
    /// C natural.
    C,
    /// D flat (displayed `Db`).
    DFlat,
    /// D sharp (displayed `D#`).
    DSharp,
    /// D natural.
    D,
    /// E flat (displayed `Eb`).
    EFlat,
    /// E natural.
    E,
    /// F sharp (displayed `F#`).
    FSharp,
    /// F natural.
    F,
    /// G flat (displayed `Gb`).
    GFlat,
    /// G sharp (displayed `G#`).
    GSharp,
    /// G natural.
    G,
    /// A flat (displayed `Ab`).
    AFlat,
    /// A sharp (displayed `A#`).
    ASharp,
    /// A natural.
    A,
    /// B flat (displayed `B` in the regional convention).
    BFlat,
    /// B natural (displayed `H` in the regional convention).
    B,
}

/// A spelling policy: the key name chosen for each of the 12 positions.
pub type SpellingTable = [SongKey; 12];

/// Sharp-preferring table used for key-derived spelling.
pub const SHARPS: SpellingTable = [
    SongKey::C,
    SongKey::CSharp,
    SongKey::D,
    SongKey::DSharp,
    SongKey::E,
    SongKey::F,
    SongKey::FSharp,
    SongKey::G,
    SongKey::GSharp,
    SongKey::A,
    SongKey::BFlat,
    SongKey::B,
];

/// Table used when the user forces sharp spelling.
pub const ONLY_SHARPS: SpellingTable = [
    SongKey::C,
    SongKey::CSharp,
    SongKey::D,
    SongKey::EFlat,
    SongKey::E,
    SongKey::F,
    SongKey::FSharp,
    SongKey::G,
    SongKey::GSharp,
    SongKey::A,
    SongKey::BFlat,
    SongKey::B,
];

/// Flat-preferring table.
pub const FLATS: SpellingTable = [
    SongKey::C,
    SongKey::DFlat,
    SongKey::D,
    SongKey::EFlat,
    SongKey::E,
    SongKey::F,
    SongKey::GFlat,
    SongKey::G,
    SongKey::AFlat,
    SongKey::A,
    SongKey::BFlat,
    SongKey::B,
];

/// Keys whose key-derived spelling switches rendering to the flats table.
const FLAT_PREFERRING: [SongKey; 4] = [SongKey::F, SongKey::BFlat, SongKey::EFlat, SongKey::AFlat];

impl SongKey {
    /// All keys in declaration order, the order chord tokens are matched in.
    pub const ALL: [Self; 17] = [
        Self::CSharp,
        Self::C,
        Self::DFlat,
        Self::DSharp,
        Self::D,
        Self::EFlat,
        Self::E,
        Self::FSharp,
        Self::F,
        Self::GFlat,
        Self::GSharp,
        Self::G,
        Self::AFlat,
        Self::ASharp,
        Self::A,
        Self::BFlat,
        Self::B,
    ];

    /// Chromatic position in `[0, 11]`, C = 0, ascending by semitone.
    #[must_use]
    pub const fn position(self) -> i32 {
        match self {
            Self::C => 0,
            Self::CSharp | Self::DFlat => 1,
            Self::D => 2,
            Self::DSharp | Self::EFlat => 3,
            Self::E => 4,
            Self::F => 5,
            Self::FSharp | Self::GFlat => 6,
            Self::G => 7,
            Self::GSharp | Self::AFlat => 8,
            Self::A => 9,
            Self::ASharp | Self::BFlat => 10,
            Self::B => 11,
        }
    }

    /// Display name of this key.
    ///
    /// Naturals render as their letter. `BFlat` renders as `"B"` and `B` as
    /// `"H"`; this is the notation the song data uses and must match exactly.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::DFlat => "Db",
            Self::DSharp => "D#",
            Self::D => "D",
            Self::EFlat => "Eb",
            Self::E => "E",
            Self::FSharp => "F#",
            Self::F => "F",
            Self::GFlat => "Gb",
            Self::GSharp => "G#",
            Self::G => "G",
            Self::AFlat => "Ab",
            Self::ASharp => "A#",
            Self::A => "A",
            Self::BFlat => "B",
            Self::B => "H",
        }
    }

    /// Transpose this key by `steps` semitones, spelling the result with
    /// `table`.
    #[must_use]
    pub const fn transpose(self, steps: i32, table: &SpellingTable) -> Self {
        table[table_index(self.position() + steps)]
    }

    /// Parse a display name back into a key.
    ///
    /// Matching runs in declaration order, so `"B"` resolves to the flat
    /// spelling and `"H"` to B natural, consistent with [`Self::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }
}

impl fmt::Display for SongKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// User preference controlling which spelling table governs rendering, or
/// whether chords are hidden entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordDisplayMode {
    /// Spell chords based on the current song key (capo-adjusted).
    #[default]
    Key,
    /// Spell chords with preference of sharps (C#, F#, G#).
    Sharps,
    /// Spell chords with preference of flats (Db, Gb, Ab).
    Flats,
    /// Hide chords and the song BPM / capo information.
    Hidden,
}

impl FromStr for ChordDisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "key" => Ok(Self::Key),
            "sharps" => Ok(Self::Sharps),
            "flats" => Ok(Self::Flats),
            "hidden" => Ok(Self::Hidden),
            other => Err(Error::config(
                format!("unknown chord display mode {other:?}"),
                "Use one of: key, sharps, flats, hidden",
            )),
        }
    }
}

/// Pick the spelling table for a display mode, given the song key and capo.
///
/// Returns `None` for [`ChordDisplayMode::Hidden`]: chords are suppressed and
/// no transposition is performed.
#[must_use]
pub fn spelling_table(
    mode: ChordDisplayMode,
    key: SongKey,
    capo: i32,
) -> Option<&'static SpellingTable> {
    match mode {
        ChordDisplayMode::Key => {
            let derived = FLATS[table_index(key.position() + capo)];
            let use_flats = FLAT_PREFERRING.contains(&derived);
            Some(if use_flats { &FLATS } else { &SHARPS })
        }
        ChordDisplayMode::Sharps => Some(&ONLY_SHARPS),
        ChordDisplayMode::Flats => Some(&FLATS),
        ChordDisplayMode::Hidden => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn non_negative_mod_wraps_negatives() {
        assert_eq!(non_negative_mod(-1, 12), 11);
        assert_eq!(non_negative_mod(-13, 12), 11);
        assert_eq!(non_negative_mod(13, 12), 1);
        assert_eq!(non_negative_mod(0, 12), 0);
    }

    #[test]
    fn position_spelling_round_trips_in_every_table() {
        for table in [&SHARPS, &ONLY_SHARPS, &FLATS] {
            for (position, key) in table.iter().enumerate() {
                assert_eq!(key.position(), i32::try_from(position).unwrap());
            }
        }
    }

    #[test]
    fn transpose_then_invert_returns_original_position() {
        for table in [&SHARPS, &ONLY_SHARPS, &FLATS] {
            for key in SongKey::ALL {
                for steps in -11..=11 {
                    let there = key.transpose(steps, table);
                    let back = there.transpose(-steps, table);
                    assert_eq!(back.position(), key.position(), "steps {steps} for {key:?}");
                }
            }
        }
    }

    #[test]
    fn sharp_and_flat_spellings_of_position_one() {
        assert_eq!(SHARPS[1].name(), "C#");
        assert_eq!(FLATS[1].name(), "Db");
    }

    #[test]
    fn regional_names_at_the_top_of_the_circle() {
        assert_eq!(FLATS[11].name(), "H");
        assert_eq!(FLATS[10].name(), "B");
        assert_eq!(SongKey::B.name(), "H");
        assert_eq!(SongKey::BFlat.name(), "B");
    }

    #[test]
    fn key_mode_prefers_flats_for_f() {
        // F (position 5) with no capo sits in the flat-preferring set
        let table = spelling_table(ChordDisplayMode::Key, SongKey::F, 0).unwrap();
        assert_eq!(table, &FLATS);
    }

    #[test]
    fn key_mode_prefers_sharps_for_g() {
        let table = spelling_table(ChordDisplayMode::Key, SongKey::G, 0).unwrap();
        assert_eq!(table, &SHARPS);
    }

    #[test]
    fn key_mode_accounts_for_capo() {
        // D (2) + capo 1 = position 3 = Eb, flat-preferring
        let table = spelling_table(ChordDisplayMode::Key, SongKey::D, 1).unwrap();
        assert_eq!(table, &FLATS);
    }

    #[test]
    fn hidden_mode_has_no_table() {
        assert!(spelling_table(ChordDisplayMode::Hidden, SongKey::C, 0).is_none());
    }

    #[test]
    fn keys_serialize_in_wire_format() {
        assert_eq!(serde_json::to_string(&SongKey::CSharp).unwrap(), "\"C_SHARP\"");
        assert_eq!(serde_json::to_string(&SongKey::BFlat).unwrap(), "\"B_FLAT\"");
        let key: SongKey = serde_json::from_str("\"E_FLAT\"").unwrap();
        assert_eq!(key, SongKey::EFlat);
    }

    #[test]
    fn names_parse_back_with_regional_priority() {
        assert_eq!(SongKey::from_name("C#"), Some(SongKey::CSharp));
        assert_eq!(SongKey::from_name("B"), Some(SongKey::BFlat));
        assert_eq!(SongKey::from_name("H"), Some(SongKey::B));
        assert_eq!(SongKey::from_name("X"), None);
    }

    #[test]
    fn display_mode_parses_from_str() {
        assert_eq!("key".parse::<ChordDisplayMode>().unwrap(), ChordDisplayMode::Key);
        assert_eq!("hidden".parse::<ChordDisplayMode>().unwrap(), ChordDisplayMode::Hidden);
        assert!("mixed".parse::<ChordDisplayMode>().is_err());
    }
}
