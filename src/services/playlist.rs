//! Band playlist management.
//!
//! A band's playlist is stored as a JSON-encoded array of song ids on the
//! band record. Reads and writes both restrict the list to songs that
//! currently exist, preserving order; unknown ids are dropped silently,
//! never rejected.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::song::{Band, User};
use crate::store::{BandStore, SongStore};
use crate::types::{BandId, SongId, UserId};

/// Ordered list of song ids forming a band's playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Song ids in playlist order.
    pub songs: Vec<SongId>,
}

impl Playlist {
    /// Create a playlist from song ids.
    #[must_use]
    pub fn new(songs: Vec<SongId>) -> Self {
        Self { songs }
    }
}

/// Playlist reads and writes with band-role authorization.
pub struct PlaylistService {
    bands: Arc<dyn BandStore>,
    songs: Arc<dyn SongStore>,
}

impl PlaylistService {
    /// Create a playlist service over the given stores.
    #[must_use]
    pub fn new(bands: Arc<dyn BandStore>, songs: Arc<dyn SongStore>) -> Self {
        Self { bands, songs }
    }

    /// Fetch the playlist of the given band.
    ///
    /// Requires an authenticated user who is a member of the band. Ids of
    /// songs that no longer exist are dropped from the result.
    pub fn get_playlist(&self, band_id: BandId, user: Option<&User>) -> Result<Playlist> {
        let band = self.authorized_band(band_id, user, Band::can_view, "not a band member")?;
        let song_ids: Vec<SongId> = serde_json::from_str(&band.playlist)?;
        Ok(Playlist::new(self.existing_only(&song_ids)))
    }

    /// Replace the playlist of the given band.
    ///
    /// Requires an authenticated band leader. Accepted ids are the supplied
    /// ids that currently exist, in caller order; the accepted list is
    /// persisted and returned.
    pub fn put_playlist(
        &self,
        band_id: BandId,
        playlist: &Playlist,
        user: Option<&User>,
    ) -> Result<Playlist> {
        let mut band = self.authorized_band(band_id, user, Band::can_edit, "not a band leader")?;
        let matched = self.existing_only(&playlist.songs);

        band.playlist = serde_json::to_string(&matched)?;
        self.bands.save(band);
        tracing::debug!("Saved playlist of {} songs for band {band_id}", matched.len());

        Ok(Playlist::new(matched))
    }

    /// Restrict `ids` to songs that exist, preserving order.
    fn existing_only(&self, ids: &[SongId]) -> Vec<SongId> {
        let songs = self.songs.find_by_ids(ids);
        ids.iter()
            .copied()
            .filter(|id| songs.iter().any(|song| song.id == *id))
            .collect()
    }

    /// Load a band and check the calling user against `check`.
    fn authorized_band(
        &self,
        band_id: BandId,
        user: Option<&User>,
        check: fn(&Band, UserId) -> bool,
        denied: &'static str,
    ) -> Result<Band> {
        let band = self.bands.get(band_id)?;
        let user = user.ok_or(Error::Unauthorized)?;
        if !check(&band, user.id) {
            return Err(Error::Forbidden(denied));
        }
        Ok(band)
    }
}
