use serde::Serialize;
use tracing::debug;

use super::errors::HistoryApiError;
use super::types::{ClearHistoryRequest, VideoHistoryRequest};
use crate::constants::{CLEAR_HISTORY_PATH, HISTORY_REQUEST_TIMEOUT, VIDEO_HISTORY_PATH};
use crate::models::{PlaybackSample, RepoPath};

/// Client for the media server's history endpoints.
#[derive(Clone)]
pub struct HistoryApi {
    client: reqwest::Client,
    base_url: String,
}

impl HistoryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(HISTORY_REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Report playback progress for one entry.
    pub async fn update_progress(
        &self,
        path: &RepoPath,
        sample: &PlaybackSample,
    ) -> Result<(), HistoryApiError> {
        let body = VideoHistoryRequest::from_sample(path, sample);

        debug!(
            "Updating history - path: {}, current_ts: {:?}",
            path, body.current_ts
        );

        self.post(VIDEO_HISTORY_PATH, &body).await
    }

    /// Drop the viewing history of one entry.
    pub async fn clear_history(&self, path: &RepoPath) -> Result<(), HistoryApiError> {
        let body = ClearHistoryRequest { path: path.clone() };

        debug!("Clearing history - path: {}", path);

        self.post(CLEAR_HISTORY_PATH, &body).await
    }

    async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<(), HistoryApiError> {
        let response = self
            .client
            .post(self.build_url(endpoint))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!("History endpoint {} answered {}", endpoint, status);
            return Err(HistoryApiError::Status { status });
        }

        Ok(())
    }
}
