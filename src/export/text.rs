//! Plain-text chord-sheet export.
//!
//! Produces the downloadable text rendition of a song: the title, the
//! information header when present, then every rendered line with its chord
//! track printed above the lyric text.

use crate::render::{render_song, RenderOptions};
use crate::song::Song;

/// Render a song to a plain-text chord sheet.
///
/// The song passes through the full rendering pipeline (transposition, then
/// line composition), so the output honors the display mode, capo and width
/// in `options`.
#[must_use]
pub fn song_to_text(song: &Song, options: RenderOptions) -> String {
    let mut sheet = String::new();
    sheet.push_str(&song.name);
    sheet.push('\n');
    sheet.push('\n');

    for line in render_song(song, options) {
        if let Some(chords) = &line.chords {
            sheet.push_str(chords);
            sheet.push('\n');
        }
        sheet.push_str(&line.text);
        sheet.push('\n');
    }
    sheet
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::chords::key::{ChordDisplayMode, SongKey};
    use crate::song::SongLine;
    use crate::types::{SongBookId, SongId};
    use chrono::{TimeZone, Utc};

    fn song() -> Song {
        Song {
            id: SongId::new(1),
            song_book_id: SongBookId::new(1),
            name: "Amazing Grace".to_string(),
            text: vec![
                SongLine::new("v1", Some("G       C".to_string()), "Amazing grace"),
                SongLine::new("v2", None, "how sweet the sound"),
            ],
            key: SongKey::G,
            bpm: 0,
            capo: 0,
            last_edit: Utc.with_ymd_and_hms(2022, 3, 23, 10, 0, 0).single().unwrap(),
            display_id: None,
            note: None,
        }
    }

    #[test]
    fn sheet_places_chords_above_lyrics() {
        let sheet = song_to_text(&song(), RenderOptions {
            mode: ChordDisplayMode::Key,
            capo: 0,
            max_characters: 40,
        });

        assert_eq!(
            sheet,
            "Amazing Grace\n\nG       C\nAmazing grace\nhow sweet the sound\n"
        );
    }

    #[test]
    fn hidden_mode_prints_lyrics_only() {
        let sheet = song_to_text(&song(), RenderOptions {
            mode: ChordDisplayMode::Hidden,
            capo: 0,
            max_characters: 40,
        });

        assert!(!sheet.contains("G       C"));
        assert!(sheet.contains("Amazing grace"));
    }
}
