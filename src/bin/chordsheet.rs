//! Debug tool to render `OpenSong` `.xml` files as chord sheets.
//!
//! Usage:
//!   `cargo run --bin chordsheet -- <song.xml>`
//!   `cargo run --bin chordsheet -- <song.xml> --capo 2 --mode flats --width 48`
//!   `cargo run --bin chordsheet -- <song.xml> --json`
//!
//! This tool runs a song through the full rendering pipeline (transposition,
//! then line composition) and prints the result, for debugging chord
//! alignment issues outside the app.

// Development/debug binary - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use anyhow::Context;
use chordflow::chords::key::ChordDisplayMode;
use chordflow::config::Config;
use chordflow::export::opensong::song_from_xml;
use chordflow::export::text::song_to_text;
use chordflow::render::{render_song, RenderOptions};
use chordflow::types::{SongBookId, SongId};
use chrono::Utc;
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <song.xml> [--capo N] [--mode key|sharps|flats|hidden] [--width N]", args[0]);
        eprintln!("       {} <song.xml> --json", args[0]);
        std::process::exit(1);
    }

    let config = Config::load().context("loading configuration")?;

    let mut capo: Option<i32> = None;
    let mut mode = config.display_mode;
    let mut width = config.line_width;
    let mut json = false;

    let mut iter = args.iter().skip(2);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--capo" => {
                let value = iter.next().context("--capo requires a value")?;
                capo = Some(value.parse().context("--capo expects an integer")?);
            }
            "--mode" => {
                let value = iter.next().context("--mode requires a value")?;
                mode = value.parse::<ChordDisplayMode>()?;
            }
            "--width" => {
                let value = iter.next().context("--width requires a value")?;
                width = value.parse().context("--width expects an integer")?;
            }
            "--json" => json = true,
            other => anyhow::bail!("unknown argument {other:?}"),
        }
    }

    let path = std::path::Path::new(&args[1]);
    let xml = fs_err::read_to_string(path).context("reading song file")?;
    let song = song_from_xml(&xml, SongId::new(1), SongBookId::new(1), Utc::now())
        .with_context(|| format!("parsing {}", path.display()))?;

    let options = RenderOptions {
        mode,
        capo: capo.unwrap_or(song.capo),
        max_characters: width,
    };

    if json {
        let rendered = render_song(&song, options);
        println!("{}", serde_json::to_string_pretty(&rendered)?);
    } else {
        print!("{}", song_to_text(&song, options));
    }

    Ok(())
}
