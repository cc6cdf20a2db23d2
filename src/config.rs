//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::chords::key::ChordDisplayMode;
use crate::error::Result;

/// Default maximum characters per rendered line.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Path to a directory of `OpenSong` `.xml` files
    pub songbook_path: Option<PathBuf>,
    /// Chord display mode used when rendering
    pub display_mode: ChordDisplayMode,
    /// Maximum characters per rendered line
    pub line_width: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            songbook_path: None,
            display_mode: ChordDisplayMode::Key,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Songbook path: env var override, or default ~/Documents/OpenSong/Songs
        config.songbook_path = env::var("SONGBOOK_PATH").ok().map_or_else(
            || {
                dirs::home_dir()
                    .map(|h| h.join("Documents/OpenSong/Songs"))
                    .filter(|p| p.is_dir())
            },
            |path| {
                let p = PathBuf::from(shellexpand::tilde(&path).to_string());
                p.is_dir().then_some(p)
            },
        );

        // Display mode can be configured via environment
        if let Ok(mode) = env::var("CHORD_DISPLAY") {
            config.display_mode = mode.parse()?;
        }

        // Line width can be configured via environment
        if let Ok(width) = env::var("LINE_WIDTH") {
            if let Ok(width) = width.parse::<usize>() {
                config.line_width = width;
            }
        }

        Ok(config)
    }

    /// Check if a songbook directory is configured
    pub const fn has_songbook(&self) -> bool {
        self.songbook_path.is_some()
    }
}
