//! Song, songbook, band and user value model.
//!
//! Plain serde values mirroring the wire format of the song management
//! backend. Everything here is an immutable value from the renderer's point
//! of view; rendering derives fresh lines and never mutates song content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chords::key::SongKey;
use crate::types::{BandId, SongBookId, SongId, UserId};

/// One source line of a song: an optional chord track and its lyric text.
///
/// `chords` of `None` means the line has no chord track at all (as opposed
/// to an empty one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongLine {
    /// Stable line identifier; split fragments derive theirs from it.
    pub id: String,
    /// Chord track aligned above the lyric text, if any.
    pub chords: Option<String>,
    /// Lyric text.
    pub text: String,
}

impl SongLine {
    /// Create a new line.
    pub fn new(id: impl Into<String>, chords: Option<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), chords, text: text.into() }
    }
}

/// Per-user song annotation shown in the song header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongNote {
    /// Free-text notes.
    pub notes: String,
    /// Preferred capo for this user.
    pub capo: i32,
}

/// A song as stored in a songbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    /// Unique song identifier.
    pub id: SongId,
    /// Songbook this song belongs to.
    pub song_book_id: SongBookId,
    /// Song title.
    pub name: String,
    /// Ordered chord/lyric line pairs.
    pub text: Vec<SongLine>,
    /// The song's key, governing chord spelling.
    pub key: SongKey,
    /// Beats per minute; 0 and 999 are "unknown" sentinels.
    pub bpm: i32,
    /// Default capo offset in semitones.
    pub capo: i32,
    /// Last modification timestamp.
    pub last_edit: DateTime<Utc>,
    /// Position of the song within printed songbooks, if assigned.
    pub display_id: Option<i32>,
    /// Per-user annotation, if any.
    pub note: Option<SongNote>,
}

/// Membership role within a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleLevel {
    /// Regular member: may view band content.
    Member,
    /// Band leader: may edit band content and playlists.
    Leader,
}

/// A user's membership in a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandMember {
    /// The member.
    pub user_id: UserId,
    /// The member's role.
    pub role: RoleLevel,
}

/// A band: a group of users sharing songbooks and one playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Band {
    /// Unique band identifier.
    pub id: BandId,
    /// Band name.
    pub name: String,
    /// JSON-encoded array of song ids, in playlist order.
    pub playlist: String,
    /// Band members and their roles.
    pub members: Vec<BandMember>,
}

impl Band {
    /// Create a band with an empty playlist.
    pub fn new(id: BandId, name: impl Into<String>, members: Vec<BandMember>) -> Self {
        Self { id, name: name.into(), playlist: "[]".to_string(), members }
    }

    /// Find the membership record for `user_id`.
    #[must_use]
    pub fn member(&self, user_id: UserId) -> Option<&BandMember> {
        self.members.iter().find(|m| m.user_id == user_id)
    }

    /// Whether `user_id` may view band content (any membership suffices).
    #[must_use]
    pub fn can_view(&self, user_id: UserId) -> bool {
        self.member(user_id).is_some()
    }

    /// Whether `user_id` may edit band content (requires the leader role).
    #[must_use]
    pub fn can_edit(&self, user_id: UserId) -> bool {
        self.member(user_id).is_some_and(|m| m.role == RoleLevel::Leader)
    }
}

/// An application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Opaque token the client presents to authenticate.
    pub login_secret: String,
    /// E-mail address, unique per user.
    pub email: String,
    /// Display name.
    pub name: String,
}

/// A named collection of songs owned by a band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongBook {
    /// Unique songbook identifier.
    pub id: SongBookId,
    /// Owning band.
    pub band_id: BandId,
    /// Songbook name.
    pub name: String,
    /// Songs in the book.
    pub songs: Vec<Song>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn band_with(role: RoleLevel) -> Band {
        Band::new(
            BandId::new(1),
            "Deep Well",
            vec![BandMember { user_id: UserId::new(10), role }],
        )
    }

    #[test]
    fn members_can_view_but_not_edit() {
        let band = band_with(RoleLevel::Member);
        assert!(band.can_view(UserId::new(10)));
        assert!(!band.can_edit(UserId::new(10)));
    }

    #[test]
    fn leaders_can_view_and_edit() {
        let band = band_with(RoleLevel::Leader);
        assert!(band.can_view(UserId::new(10)));
        assert!(band.can_edit(UserId::new(10)));
    }

    #[test]
    fn non_members_can_do_neither() {
        let band = band_with(RoleLevel::Leader);
        assert!(!band.can_view(UserId::new(11)));
        assert!(!band.can_edit(UserId::new(11)));
    }

    #[test]
    fn roles_use_the_wire_spelling() {
        assert_eq!(serde_json::to_string(&RoleLevel::Leader).unwrap(), "\"LEADER\"");
        assert_eq!(serde_json::to_string(&RoleLevel::Member).unwrap(), "\"MEMBER\"");
    }

    #[test]
    fn new_band_playlist_is_an_empty_json_array() {
        let band = band_with(RoleLevel::Member);
        assert_eq!(band.playlist, "[]");
    }
}
