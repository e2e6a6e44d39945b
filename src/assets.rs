//! Embedded template assets.
//!
//! Prompt and launcher templates are compiled into the binary and resolved by
//! their path relative to `src/assets/`.

use include_dir::{Dir, include_dir};

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

/// Read a template asset by its relative path (e.g. `"prompts/python.j2"`).
pub fn read_asset(path: &str) -> Option<&'static str> {
    ASSETS_DIR.get_file(path).and_then(|file| file.contents_utf8())
}
