//! Songbook directory loader.
//!
//! Scans a directory of `OpenSong` `.xml` files into an in-memory songbook and
//! provides title lookup. Files that fail to parse are skipped with a
//! warning; a curated directory routinely contains strays.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use walkdir::WalkDir;

use crate::export::opensong;
use crate::services::search::{CompositeSearch, SearchStrategy};
use crate::song::{Song, SongBook};
use crate::types::{BandId, SongBookId, SongId};

/// Lazily loaded songbook directory index.
pub struct SongLibrary {
    path: PathBuf,
    song_book_id: SongBookId,
    songs: Vec<Song>,
    loaded: bool,
}

impl SongLibrary {
    /// Create a library backed by the given directory path.
    #[must_use]
    pub const fn new(path: PathBuf, song_book_id: SongBookId) -> Self {
        Self { path, song_book_id, songs: Vec::new(), loaded: false }
    }

    /// All loaded songs, in file-name order.
    pub fn songs(&mut self) -> &[Song] {
        self.ensure_loaded();
        &self.songs
    }

    /// Songs matching `query` by title, best match first.
    pub fn find(&mut self, query: &str, limit: usize) -> Vec<Song> {
        self.ensure_loaded();
        CompositeSearch::with_defaults()
            .find_matches(query, &self.songs, limit)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Package the loaded songs as a songbook owned by `band_id`.
    pub fn as_song_book(&mut self, name: impl Into<String>, band_id: BandId) -> SongBook {
        self.ensure_loaded();
        SongBook {
            id: self.song_book_id,
            band_id,
            name: name.into(),
            songs: self.songs.clone(),
        }
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    fn load(&mut self) {
        self.loaded = true;

        let walker = WalkDir::new(&self.path).sort_by_file_name();
        for entry in walker.into_iter().flatten() {
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|e| e != "xml") {
                continue;
            }

            let xml = match fs_err::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {e}", path.display());
                    continue;
                }
            };

            let last_edit = entry
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .map_or_else(Utc::now, DateTime::<Utc>::from);

            let id = SongId::new(i32::try_from(self.songs.len()).unwrap_or(i32::MAX - 1) + 1);
            match opensong::song_from_xml(&xml, id, self.song_book_id, last_edit) {
                Ok(song) => self.songs.push(song),
                Err(e) => {
                    tracing::warn!("Skipping {}: {e}", path.display());
                }
            }
        }

        tracing::info!("Loaded {} songs from {}", self.songs.len(), self.path.display());
    }
}
