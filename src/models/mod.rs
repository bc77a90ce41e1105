use serde::{Deserialize, Serialize};
use std::fmt;

/// Repository-relative path of an entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RepoPath {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoPath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RepoPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Descriptor the server embeds in entry pages.
///
/// Field names match the embedded JSON object; non-entry pages omit the
/// object entirely.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntryDescriptor {
    pub repo_path: RepoPath,
    pub is_video: bool,
}

/// One playback measurement, derived per time-update tick and immediately
/// forwarded. Never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackSample {
    pub position_seconds: f64,
    /// Completion ratio `position / duration`. Non-finite when the
    /// duration is zero or unknown.
    pub ratio: f64,
}

impl PlaybackSample {
    /// Derive a sample from the element's reported position and duration.
    /// Never panics, including for `0 / 0`.
    pub fn derive(position_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            position_seconds,
            ratio: position_seconds / duration_seconds,
        }
    }

    /// Whole seconds elapsed, as reported to the history endpoint.
    pub fn whole_seconds(&self) -> i64 {
        self.position_seconds.floor() as i64
    }
}
