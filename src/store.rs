//! In-process stand-ins for the persistence layer.
//!
//! The real deployment keeps songs, bands and users in a relational store;
//! this crate only consumes that layer through the traits below. The
//! `Memory*` implementations back the services in tests and in the
//! `chordsheet` utility, and are safe to share across threads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::error::{Error, Result};
use crate::song::{Band, Song, User};
use crate::types::{BandId, SongId, UserId};

/// Read access to stored songs.
pub trait SongStore: Send + Sync {
    /// Songs whose ids appear in `ids`; missing ids are silently skipped.
    fn find_by_ids(&self, ids: &[SongId]) -> Vec<Song>;

    /// A single song by id.
    fn get(&self, id: SongId) -> Result<Song>;

    /// Persist a song (insert or replace).
    fn save(&self, song: Song);
}

/// Access to stored bands.
pub trait BandStore: Send + Sync {
    /// A single band by id.
    fn get(&self, id: BandId) -> Result<Band>;

    /// All bands, in storage order.
    fn list(&self) -> Vec<Band>;

    /// Persist a band (insert or replace).
    fn save(&self, band: Band);
}

/// Access to stored users.
pub trait UserStore: Send + Sync {
    /// Look a user up by their login secret.
    fn by_login_secret(&self, login_secret: &str) -> Option<User>;

    /// Look a user up by e-mail address.
    fn by_email(&self, email: &str) -> Option<User>;

    /// Persist a new user, assigning the next free identifier.
    fn create(&self, login_secret: String, email: String, name: String) -> User;
}

/// Hash-map-backed [`SongStore`].
#[derive(Debug, Default)]
pub struct MemorySongStore {
    songs: RwLock<HashMap<SongId, Song>>,
}

impl SongStore for MemorySongStore {
    fn find_by_ids(&self, ids: &[SongId]) -> Vec<Song> {
        let songs = self.songs.read().unwrap_or_else(PoisonError::into_inner);
        ids.iter().filter_map(|id| songs.get(id).cloned()).collect()
    }

    fn get(&self, id: SongId) -> Result<Song> {
        let songs = self.songs.read().unwrap_or_else(PoisonError::into_inner);
        songs.get(&id).cloned().ok_or_else(|| Error::not_found("song", id.get()))
    }

    fn save(&self, song: Song) {
        let mut songs = self.songs.write().unwrap_or_else(PoisonError::into_inner);
        songs.insert(song.id, song);
    }
}

/// Hash-map-backed [`BandStore`].
#[derive(Debug, Default)]
pub struct MemoryBandStore {
    bands: RwLock<HashMap<BandId, Band>>,
}

impl BandStore for MemoryBandStore {
    fn get(&self, id: BandId) -> Result<Band> {
        let bands = self.bands.read().unwrap_or_else(PoisonError::into_inner);
        bands.get(&id).cloned().ok_or_else(|| Error::not_found("band", id.get()))
    }

    fn list(&self) -> Vec<Band> {
        let bands = self.bands.read().unwrap_or_else(PoisonError::into_inner);
        bands.values().cloned().collect()
    }

    fn save(&self, band: Band) {
        let mut bands = self.bands.write().unwrap_or_else(PoisonError::into_inner);
        bands.insert(band.id, band);
    }
}

/// Hash-map-backed [`UserStore`] with sequential id assignment.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
    next_id: AtomicI32,
}

impl UserStore for MemoryUserStore {
    fn by_login_secret(&self, login_secret: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.values().find(|u| u.login_secret == login_secret).cloned()
    }

    fn by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.values().find(|u| u.email == email).cloned()
    }

    fn create(&self, login_secret: String, email: String, name: String) -> User {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let user = User { id, login_secret, email, name };
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        users.insert(id, user.clone());
        user
    }
}
