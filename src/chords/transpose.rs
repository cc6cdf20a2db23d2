//! Chord-line transposition.
//!
//! A chord line is split on single spaces (keeping empty fields, which carry
//! the column alignment with the lyric line below). Each field is matched
//! against the key names of the current spelling policy and rewritten with
//! the transposed name; unrecognized fields pass through untouched.

use crate::chords::key::{spelling_table, ChordDisplayMode, SongKey};

/// Transpose a whole chord line by `capo` semitones.
///
/// Returns `None` when `mode` is [`ChordDisplayMode::Hidden`]: chords are
/// suppressed and no work is done.
///
/// Because transposed names can be shorter or longer than the originals
/// (`"C#"` vs `"Db"` vs `"D"`), the joined line is re-spaced to stay roughly
/// column-aligned with its lyric line: a field that shrank gets one trailing
/// space, a field that grew causes the next blank field to be dropped. This
/// is a deliberate approximation; length deltas greater than one character
/// are not fully compensated.
#[must_use]
pub fn transpose_line(
    chords: &str,
    song_key: SongKey,
    capo: i32,
    mode: ChordDisplayMode,
) -> Option<String> {
    let table = spelling_table(mode, song_key, capo)?;

    let transposed: Vec<(String, String)> = chords
        .split(' ')
        .map(|field| {
            for key in SongKey::ALL {
                if field.replace('(', "").starts_with(key.name()) {
                    let replacement = key.transpose(capo, table);
                    return (field.to_string(), field.replacen(key.name(), replacement.name(), 1));
                }
            }
            (field.to_string(), field.to_string())
        })
        .collect();

    let mut skip = 0_u32;
    let result: Vec<String> = transposed
        .into_iter()
        .filter_map(|(original, transposed)| {
            // A grown field upstream eats the next blank field
            if skip > 0 && transposed.is_empty() {
                skip -= 1;
                return None;
            }

            let original_len = original.chars().count();
            let transposed_len = transposed.chars().count();

            if transposed_len == original_len {
                return Some(transposed);
            }

            if transposed_len < original_len {
                return Some(transposed + " ");
            }

            skip += 1;
            Some(transposed)
        })
        .collect();

    Some(result.join(" "))
}
