//! Line composer: width-bounded splitting of chord/lyric line pairs.
//!
//! Splitting prefers a column where both the chord track and the lyric track
//! hold a space, so neither a word nor a chord symbol is cut. All length
//! accounting is in characters, not bytes; lyric text routinely carries
//! diacritics.

use std::sync::LazyLock;

use regex::Regex;

use crate::song::SongLine;

/// Widths at or below this are never split; chord overflow is preferable to
/// one-character fragments.
pub const MIN_SPLIT_WIDTH: usize = 5;

/// Trailing run of dash characters, stripped from fragment edges.
#[allow(clippy::expect_used)]
static RE_TRAILING_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-*$").expect("valid regex: RE_TRAILING_DASHES"));

/// Split `line` into fragments no wider than `max_characters`.
///
/// Returns `[line]` unchanged when the text already fits or the width is
/// degenerate. Otherwise both tracks are space-filled to `max_characters`,
/// split at the rightmost column holding a space in both prefixes (falling
/// back to a hard cut at `max_characters`), and the remainder is divided
/// recursively. Fragment identifiers derive from the source identifier with
/// `_1`/`_2` suffixes, nesting for further splits.
#[must_use]
pub fn divide(line: &SongLine, max_characters: usize) -> Vec<SongLine> {
    // No need to cut (chords overflow is wanted)
    if line.text.chars().count() <= max_characters || max_characters <= MIN_SPLIT_WIDTH {
        return vec![line.clone()];
    }

    // Fill chords and text with spaces until `max_characters`
    let chords_fill = fill(line.chords.as_deref().unwrap_or(""), max_characters);
    let text_fill = fill(&line.text, max_characters);
    let chords_prefix = &chords_fill[..max_characters];
    let text_prefix = &text_fill[..max_characters];

    // The space at the split column is dropped from both sides; a failed
    // search cuts hard at the width with no character dropped
    let (prefix_end, suffix_start) = find_split_position(text_prefix, chords_prefix)
        .map_or((max_characters, max_characters), |position| (position, position + 1));

    let first = SongLine {
        id: format!("{}_1", line.id),
        chords: str_value(&chords_fill[..prefix_end]),
        text: str_value(&text_fill[..prefix_end]).unwrap_or_default(),
    };
    let rest = SongLine {
        id: format!("{}_2", line.id),
        chords: str_value(&chords_fill[suffix_start..]),
        text: str_value(&text_fill[suffix_start..]).unwrap_or_default(),
    };

    let mut fragments = vec![first];
    fragments.extend(divide(&rest, max_characters));
    fragments
}

/// Find the ideal split position for the two prefixes:
/// 1) both prefixes contain a space character at this position,
/// 2) it is the furthest position meeting this requirement.
///
/// `None` means no such position exists and the text is cut at the width
/// disregarding spaces.
fn find_split_position(text_prefix: &[char], chords_prefix: &[char]) -> Option<usize> {
    let mut chords_index = last_space_index(chords_prefix)?;
    let mut text_index = last_space_index(text_prefix)?;

    // Move positions towards each other as long as we can
    while chords_index != text_index {
        if chords_index < text_index {
            match last_space_index(&text_prefix[..=chords_index]) {
                Some(index) => text_index = index,
                None => break,
            }
        }
        if text_index < chords_index {
            match last_space_index(&chords_prefix[..=text_index]) {
                Some(index) => chords_index = index,
                None => break,
            }
        }
    }

    // If both positions are the same, we finished successfully
    (text_index == chords_index).then_some(text_index)
}

/// Index of the last space character, if any.
fn last_space_index(chars: &[char]) -> Option<usize> {
    chars.iter().rposition(|&c| c == ' ')
}

/// Pad with trailing spaces until `max_characters` characters; longer input
/// is returned as is.
fn fill(text: &str, max_characters: usize) -> Vec<char> {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.len() < max_characters {
        chars.resize(max_characters, ' ');
    }
    chars
}

/// Fragment cleanup: strip the trailing run of dashes, and collapse
/// whitespace-only fragments to `None`.
fn str_value(chars: &[char]) -> Option<String> {
    let text: String = chars.iter().collect();
    let stripped = RE_TRAILING_DASHES.replace_all(&text, "").into_owned();
    stripped.contains(|c: char| !c.is_whitespace()).then_some(stripped)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn line(id: &str, chords: Option<&str>, text: &str) -> SongLine {
        SongLine {
            id: id.to_string(),
            chords: chords.map(String::from),
            text: text.to_string(),
        }
    }

    #[test]
    fn short_text_is_returned_unchanged() {
        let input = line("v1", Some("C"), "Hello");
        assert_eq!(divide(&input, 40), vec![input.clone()]);
    }

    #[test]
    fn degenerate_width_is_never_split() {
        let input = line("v1", None, "a text far wider than five characters");
        assert_eq!(divide(&input, 5), vec![input.clone()]);
        assert_eq!(divide(&input, 0), vec![input.clone()]);
    }

    #[test]
    fn splits_at_the_rightmost_common_space() {
        let input = line("v1", Some("C  Em  G"), "Hello world test line");
        let fragments = divide(&input, 10);

        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].id, "v1_1");
        assert_eq!(fragments[0].chords.as_deref(), Some("C  Em"));
        assert_eq!(fragments[0].text, "Hello");
        assert_eq!(fragments[1].id, "v1_2_1");
        assert_eq!(fragments[1].chords.as_deref(), Some(" G   "));
        assert_eq!(fragments[1].text, "world");
        assert_eq!(fragments[2].id, "v1_2_2");
        assert_eq!(fragments[2].chords, None);
        assert_eq!(fragments[2].text, "test line");
    }

    #[test]
    fn cuts_hard_when_no_common_space_exists() {
        // The only lyric space (column 5) is covered by the F chord, so the
        // first cut falls back to the raw width
        let input = line("v1", Some("C    F"), "Hello world test line");
        let fragments = divide(&input, 10);

        assert_eq!(fragments[0].text, "Hello worl");
        assert_eq!(fragments[1].text, "d test");
        assert_eq!(fragments[2].text, "line");
    }

    #[test]
    fn fragments_respect_the_width_bound() {
        let input = line("v1", Some("C  Em  G  D7"), "Vstaňme a pojďme chválit Pána dál");
        for fragment in divide(&input, 12) {
            assert!(fragment.text.chars().count() <= 12, "fragment {:?}", fragment.text);
        }
    }

    #[test]
    fn lyric_only_line_splits_on_lyric_spaces() {
        let input = line("v3", None, "sing it over and over again");
        let fragments = divide(&input, 12);

        assert!(fragments.len() > 1);
        assert!(fragments.iter().all(|f| f.chords.is_none()));
        assert_eq!(fragments[0].text, "sing it");
    }

    #[test]
    fn trailing_dashes_are_stripped_from_fragments() {
        let input = line("v1", Some("C     D"), "hal- lelu---");
        let fragments = divide(&input, 6);

        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        // the dash run at each cut edge is cleaned up; the all-dash remainder
        // collapses to an empty lyric
        assert_eq!(texts, vec!["hal", "lelu", ""]);
    }

    #[test]
    fn identifiers_nest_per_split_depth() {
        let input = line("c", None, "one two three four five six seven");
        let ids: Vec<String> = divide(&input, 10).into_iter().map(|f| f.id).collect();

        assert_eq!(ids[0], "c_1");
        assert!(ids[1].starts_with("c_2_"));
        // every id traces back to the source line
        assert!(ids.iter().all(|id| id.starts_with("c_")));
    }

    #[test]
    fn whitespace_only_chord_fragment_becomes_none() {
        let input = line("v1", Some("C"), "word another phrase");
        let fragments = divide(&input, 8);

        // the chord sits entirely in the first fragment
        assert!(fragments[0].chords.is_some());
        assert!(fragments.iter().skip(1).all(|f| f.chords.is_none()));
    }

    #[test]
    fn empty_chord_line_never_panics() {
        let input = line("v1", Some(""), "some words to wrap around here");
        let fragments = divide(&input, 9);
        assert!(fragments.len() > 1);
    }
}
