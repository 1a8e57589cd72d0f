// ── Central error type ────────────────────────────────────────────────────────
//
// Highlighting itself is total and never returns an error.  Everything that
// touches the outside world (reading input, the settings file, JSON output)
// returns `error::Result<T>`.

/// Every error that hilite's library surfaces can produce.
#[derive(Debug)]
pub enum HiliteError {
    /// A standard I/O error (file open, read, write, …).
    Io(std::io::Error),

    /// The settings file or a JSON render could not be (de)serialized.
    Json(serde_json::Error),

    /// The settings file carries a version number this build does not read.
    UnsupportedVersion {
        /// Version found in the file.
        found: u32,
        /// Version this build writes and accepts.
        expected: u32,
    },
}

impl std::fmt::Display for HiliteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::UnsupportedVersion { found, expected } => {
                write!(f, "unsupported settings version {found} (expected {expected})")
            }
        }
    }
}

impl std::error::Error for HiliteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<std::io::Error> for HiliteError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for HiliteError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HiliteError>;

// ── Tests ─────────────────────────────────────────────────────────────────────
