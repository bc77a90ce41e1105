use anyhow::Result;
use std::sync::Arc;
use tracing::trace;

use super::traits::MediaElement;
use crate::constants::SEEK_STEP;
use crate::context::EntryContext;

/// Transport actions reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKey {
    PlayPause,
    SeekBack,
    SeekForward,
    FullscreenToggle,
}

impl TransportKey {
    /// Map a released key to its transport action. Unhandled keys map to
    /// `None` and are ignored.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "k" => Some(Self::PlayPause),
            "j" => Some(Self::SeekBack),
            "l" => Some(Self::SeekForward),
            "f" => Some(Self::FullscreenToggle),
            _ => None,
        }
    }
}

/// Keyboard transport bindings for the embedded media element.
///
/// Playback state is the element's own; this component queries it per
/// keystroke rather than shadowing it.
pub struct PlayerControls {
    context: Arc<EntryContext>,
    media: Arc<dyn MediaElement>,
}

impl PlayerControls {
    pub fn new(context: Arc<EntryContext>, media: Arc<dyn MediaElement>) -> Self {
        Self { context, media }
    }

    /// Handle one key-release event from the page. A no-op unless the
    /// context holds a video entry.
    pub async fn on_key_released(&self, key_name: &str) -> Result<()> {
        if self.context.video_entry().is_none() {
            return Ok(());
        }

        let Some(key) = TransportKey::from_key_name(key_name) else {
            return Ok(());
        };

        trace!("Applying transport key {:?}", key);
        self.apply(key).await
    }

    async fn apply(&self, key: TransportKey) -> Result<()> {
        match key {
            TransportKey::PlayPause => {
                if self.media.is_paused().await {
                    self.media.play().await?;
                } else {
                    self.media.pause().await?;
                }
            }
            TransportKey::SeekBack => {
                if let Some(position) = self.media.position().await {
                    self.media.seek(position.saturating_sub(SEEK_STEP)).await?;
                }
            }
            TransportKey::SeekForward => {
                if let Some(position) = self.media.position().await {
                    self.media.seek(position + SEEK_STEP).await?;
                }
            }
            TransportKey::FullscreenToggle => {
                if self.media.is_fullscreen().await {
                    self.media.exit_fullscreen().await?;
                } else {
                    self.media.enter_fullscreen().await?;
                }
            }
        }

        Ok(())
    }
}
