use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Abstraction over the page's embedded media element.
///
/// The page glue implements this over the real element; the runtime only
/// ever drives playback through the trait. Seeks past either end are
/// clamped by the element, not by callers.
#[async_trait]
pub trait MediaElement: Send + Sync {
    async fn position(&self) -> Option<Duration>;
    async fn duration(&self) -> Option<Duration>;
    async fn is_paused(&self) -> bool;
    async fn play(&self) -> Result<()>;
    async fn pause(&self) -> Result<()>;
    async fn seek(&self, position: Duration) -> Result<()>;
    async fn is_fullscreen(&self) -> bool;
    async fn enter_fullscreen(&self) -> Result<()>;
    async fn exit_fullscreen(&self) -> Result<()>;
}
