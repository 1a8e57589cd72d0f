// ── Settings persistence ──────────────────────────────────────────────────────
//
// Reads and writes the JSON settings file (`~/.config/hilite/config.json` by
// default).  No `unsafe`; pure safe Rust + serde_json.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{HiliteError, Result},
    highlight::{CommentMode, Highlighter},
    vocabulary::Vocabulary,
};

// ── On-disk types ─────────────────────────────────────────────────────────────

/// Root of the JSON settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub version: u32,
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub line_numbers: bool,
    #[serde(default)]
    pub comment_mode: CommentMode,
    /// Keyword and literal sets.  Omitted lists keep the stock vocabulary.
    #[serde(default)]
    pub vocabulary: Vocabulary,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            dark_mode: false,
            line_numbers: false,
            comment_mode: CommentMode::default(),
            vocabulary: Vocabulary::default(),
        }
    }
}

impl Settings {
    /// A highlighter configured from these settings.
    pub fn highlighter(&self) -> Highlighter {
        Highlighter::new(self.vocabulary.clone()).with_comment_mode(self.comment_mode)
    }
}

// ── Format version ────────────────────────────────────────────────────────────

pub const SETTINGS_VERSION: u32 = 1;

// ── Path ──────────────────────────────────────────────────────────────────────

/// Where the settings file lives.
///
/// `$HILITE_CONFIG` wins; otherwise `$XDG_CONFIG_HOME/hilite/config.json`,
/// then `$HOME/.config/hilite/config.json`.  `None` when none of these
/// variables is set.
pub fn settings_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("HILITE_CONFIG") {
        return Some(PathBuf::from(explicit));
    }
    let mut p = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let mut home = PathBuf::from(std::env::var_os("HOME")?);
            home.push(".config");
            home
        }
    };
    p.push("hilite");
    p.push("config.json");
    Some(p)
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Parse settings from JSON text and check the version.
pub fn parse(data: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(data)?;
    if settings.version != SETTINGS_VERSION {
        return Err(HiliteError::UnsupportedVersion {
            found: settings.version,
            expected: SETTINGS_VERSION,
        });
    }
    Ok(settings)
}

/// Read and parse the settings file at `path`.  Every failure is reported.
pub fn load(path: &Path) -> Result<Settings> {
    let data = fs::read_to_string(path)?;
    let settings = parse(&data)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Read the settings file at its default location.
///
/// Returns `None` on any error: file missing, JSON parse failure, or an
/// unrecognised version number.  The caller continues with defaults.
pub fn load_default() -> Option<Settings> {
    let path = settings_path()?;
    if !path.exists() {
        return None;
    }
    match load(&path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable settings file");
            None
        }
    }
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Write `settings` to `path` as pretty JSON, creating parent directories.
pub fn save(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::File::create(path)?;
    serde_json::to_writer_pretty(file, settings)?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
