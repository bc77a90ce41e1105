// Playback and reporting constants in one place for easy tuning

use std::time::Duration;

/// Seek step applied by the j/l transport keys.
pub const SEEK_STEP: Duration = Duration::from_secs(10);

/// History endpoint paths on the collaborating server.
pub const VIDEO_HISTORY_PATH: &str = "/api/video_history";
pub const CLEAR_HISTORY_PATH: &str = "/api/clear_history";

/// Request timeout for history endpoint calls.
pub const HISTORY_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
