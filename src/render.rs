//! Song rendering pipeline.
//!
//! Turns a [`Song`] into the ordered sequence of display lines a client
//! renders: an optional information header, then every source line with its
//! chord track transposed and the pair reflowed to the target width.
//! Transposition always completes for a line before that line is composed.

use crate::chords::key::ChordDisplayMode;
use crate::chords::{divide, transpose_line};
use crate::song::{Song, SongLine};

/// Identifier of the synthetic song-information header line.
pub const SONG_INFO_ID: &str = "songinfo";

/// BPM sentinel values meaning "unknown", omitted from the header.
const BPM_SENTINELS: [i32; 2] = [0, 999];

/// Options governing a single render request.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Which spelling table governs chord rendering, or hidden.
    pub mode: ChordDisplayMode,
    /// Effective capo offset in semitones (user preference; may differ from
    /// the song's nominal capo).
    pub capo: i32,
    /// Maximum characters per rendered line.
    pub max_characters: usize,
}

impl RenderOptions {
    /// Options for a song rendered with its own nominal capo.
    #[must_use]
    pub const fn for_song(song: &Song, mode: ChordDisplayMode, max_characters: usize) -> Self {
        Self { mode, capo: song.capo, max_characters }
    }
}

/// Build the song-information header line, if there is anything to show.
///
/// BPM and capo are suppressed when chords are hidden; the song note is
/// shown regardless.
#[must_use]
pub fn song_information(song: &Song, mode: ChordDisplayMode) -> Option<SongLine> {
    let hide_chords = mode == ChordDisplayMode::Hidden;
    let note = song.note.as_ref().map(|n| n.notes.clone()).unwrap_or_default();

    let mut parts = Vec::new();
    if !BPM_SENTINELS.contains(&song.bpm) && !hide_chords {
        parts.push(format!("\u{1f3b5} {}", song.bpm));
    }
    if song.capo != 0 && !hide_chords {
        parts.push(format!("capo {}", song.capo));
    }
    if !note.is_empty() {
        parts.push(note);
    }

    if parts.is_empty() {
        return None;
    }
    Some(SongLine::new(SONG_INFO_ID, None, parts.join(", ")))
}

/// Render a song to its ordered display lines.
pub fn render_song(song: &Song, options: RenderOptions) -> Vec<SongLine> {
    let header = song_information(song, options.mode);
    let source = header.iter().chain(song.text.iter());

    let mut rendered = Vec::new();
    for line in source {
        let chords = line
            .chords
            .as_deref()
            .and_then(|chords| transpose_line(chords, song.key, options.capo, options.mode));
        let prepared = SongLine::new(line.id.clone(), chords, line.text.clone());
        rendered.extend(divide(&prepared, options.max_characters));
    }
    rendered
}
