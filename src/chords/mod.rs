//! Chord handling: the pitch model, chord-line transposition and the
//! width-bounded line composer.
//!
//! Transposition always runs before composition; the composer operates on
//! already-transposed chord text.

pub mod compose;
pub mod key;
pub mod transpose;

pub use compose::divide;
pub use key::{ChordDisplayMode, SongKey};
pub use transpose::transpose_line;
