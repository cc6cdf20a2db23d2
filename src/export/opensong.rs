//! `OpenSong` XML import and export.
//!
//! `OpenSong` stores a song as a small XML document whose `<lyrics>` element
//! encodes both tracks line by line: chord lines are prefixed `.`, lyric
//! lines with a space, section headers sit in `[...]` and `;` starts a
//! comment. Only the fields this application uses are read; everything else
//! is ignored on import and written empty on export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chords::key::SongKey;
use crate::error::{Error, Result};
use crate::song::{Song, SongLine};
use crate::types::{SongBookId, SongId};

/// The on-disk `OpenSong` document. All fields are kept as strings; numeric
/// fields are parsed leniently after deserialization.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "song", default)]
struct OpenSongDocument {
    title: String,
    author: String,
    key: String,
    capo: String,
    tempo: String,
    lyrics: String,
}

/// Serialize a song to `OpenSong` XML.
pub fn song_to_xml(song: &Song) -> Result<String> {
    let document = OpenSongDocument {
        title: song.name.clone(),
        author: String::new(),
        key: song.key.name().to_string(),
        capo: song.capo.to_string(),
        tempo: song.bpm.to_string(),
        lyrics: encode_lyrics(&song.text),
    };

    quick_xml::se::to_string(&document).map_err(|e| Error::Export(e.to_string()))
}

/// Parse `OpenSong` XML into a song.
///
/// An unknown or missing `<key>` falls back to C with a warning; missing
/// tempo/capo become 0 (the "unknown" BPM sentinel).
pub fn song_from_xml(
    xml: &str,
    id: SongId,
    song_book_id: SongBookId,
    last_edit: DateTime<Utc>,
) -> Result<Song> {
    let document: OpenSongDocument =
        quick_xml::de::from_str(xml).map_err(|e| Error::parse(e.to_string(), None))?;

    let key = SongKey::from_name(&document.key).unwrap_or_else(|| {
        if !document.key.is_empty() {
            tracing::warn!("Unknown key {:?} in {:?}, falling back to C", document.key, document.title);
        }
        SongKey::C
    });

    Ok(Song {
        id,
        song_book_id,
        name: document.title,
        text: decode_lyrics(&document.lyrics),
        key,
        bpm: document.tempo.trim().parse().unwrap_or(0),
        capo: document.capo.trim().parse().unwrap_or(0),
        last_edit,
        display_id: None,
        note: None,
    })
}

/// Encode line pairs into the `<lyrics>` prefix format.
fn encode_lyrics(lines: &[SongLine]) -> String {
    let mut out = String::new();
    for line in lines {
        if let Some(chords) = &line.chords {
            out.push('.');
            out.push_str(chords);
            out.push('\n');
        }
        out.push(' ');
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}

/// Decode the `<lyrics>` prefix format back into line pairs.
///
/// A chord line attaches to the next lyric line; a chord line followed by
/// another chord line (or the end of input) yields a pair with empty lyric
/// text. Section headers and comments are skipped.
fn decode_lyrics(lyrics: &str) -> Vec<SongLine> {
    let mut lines: Vec<SongLine> = Vec::new();
    let mut pending_chords: Option<String> = None;

    for raw in lyrics.lines() {
        if let Some(chords) = raw.strip_prefix('.') {
            if let Some(previous) = pending_chords.take() {
                let id = format!("line_{}", lines.len() + 1);
                lines.push(SongLine::new(id, Some(previous), String::new()));
            }
            pending_chords = Some(chords.to_string());
        } else if raw.starts_with('[') || raw.starts_with(';') {
            continue;
        } else if raw.is_empty() && pending_chords.is_none() {
            continue;
        } else {
            let text = raw.strip_prefix(' ').unwrap_or(raw);
            let id = format!("line_{}", lines.len() + 1);
            lines.push(SongLine::new(id, pending_chords.take(), text.to_string()));
        }
    }
    if let Some(previous) = pending_chords {
        let id = format!("line_{}", lines.len() + 1);
        lines.push(SongLine::new(id, Some(previous), String::new()));
    }

    lines
}
