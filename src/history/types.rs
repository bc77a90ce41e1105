use serde::Serialize;

use crate::models::{PlaybackSample, RepoPath};

/// Body of `POST /api/video_history`.
///
/// The server treats `current_ts`/`current_ratio` as a pair: both present
/// (a position update) or both absent (a plain mark-viewed).
#[derive(Clone, Debug, Serialize)]
pub struct VideoHistoryRequest {
    pub path: RepoPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ratio: Option<f32>,
}

impl VideoHistoryRequest {
    /// Build the wire body for one playback sample.
    ///
    /// A non-finite ratio has no meaningful position to persist, so the
    /// update degrades to a mark-viewed with no position fields.
    pub fn from_sample(path: &RepoPath, sample: &PlaybackSample) -> Self {
        if sample.ratio.is_finite() {
            Self {
                path: path.clone(),
                current_ts: Some(sample.whole_seconds()),
                current_ratio: Some(sample.ratio as f32),
            }
        } else {
            Self {
                path: path.clone(),
                current_ts: None,
                current_ratio: None,
            }
        }
    }
}

/// Body of `POST /api/clear_history`.
#[derive(Clone, Debug, Serialize)]
pub struct ClearHistoryRequest {
    pub path: RepoPath,
}
