use std::sync::Arc;
use tracing::debug;

use crate::context::EntryContext;
use crate::history::HistoryApi;
use crate::models::PlaybackSample;

/// Reports playback progress to the history endpoint.
///
/// One detached write per time-update signal; no retry, queueing, or
/// throttling. A failed write is logged at debug level and dropped.
pub struct ProgressReporter {
    context: Arc<EntryContext>,
    history: Arc<HistoryApi>,
}

impl ProgressReporter {
    pub fn new(context: Arc<EntryContext>, history: Arc<HistoryApi>) -> Self {
        Self { context, history }
    }

    /// Handle one time-update signal from the media element.
    ///
    /// A no-op unless the context holds a video entry. Otherwise derives a
    /// sample and spawns a detached write that the caller never awaits.
    /// Must run inside a tokio runtime.
    pub fn on_time_update(&self, position_seconds: f64, duration_seconds: f64) {
        let Some(entry) = self.context.video_entry() else {
            return;
        };

        let sample = PlaybackSample::derive(position_seconds, duration_seconds);
        let history = Arc::clone(&self.history);
        let path = entry.repo_path.clone();

        tokio::spawn(async move {
            if let Err(err) = history.update_progress(&path, &sample).await {
                debug!("Dropping history update for {}: {}", path, err);
            }
        });
    }
}
