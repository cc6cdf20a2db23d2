//! `chordflow` - church band song management core.
//!
//! This crate provides the rendering engine behind a band's shared
//! songbooks: chord transposition across the chromatic circle, reflowing of
//! chord/lyric line pairs to a display width, playlist management with
//! band-role authorization, and chord-sheet import/export in plain text and
//! `OpenSong` XML.

pub mod chords;
pub mod config;
pub mod error;
pub mod export;
pub mod library;
pub mod render;
pub mod services;
pub mod song;
pub mod store;
pub mod types;
