use anyhow::{Context as _, Result};

use crate::models::EntryDescriptor;

/// Entry context resolved once per page load.
///
/// The server embeds an entry descriptor in entry pages and omits it
/// everywhere else. The page glue builds this context exactly once from
/// the embedded data and hands it to every component that needs it.
#[derive(Clone, Debug, Default)]
pub struct EntryContext {
    entry: Option<EntryDescriptor>,
}

impl EntryContext {
    pub fn new(entry: Option<EntryDescriptor>) -> Self {
        Self { entry }
    }

    /// Parse a present embedded descriptor payload.
    ///
    /// An absent payload is a valid state that belongs to the caller
    /// (`EntryContext::new(None)`); a present but malformed payload is an
    /// error.
    pub fn from_embedded_json(raw: &str) -> Result<Self> {
        let entry: EntryDescriptor =
            serde_json::from_str(raw).context("malformed embedded entry descriptor")?;
        Ok(Self::new(Some(entry)))
    }

    pub fn current_entry(&self) -> Option<&EntryDescriptor> {
        self.entry.as_ref()
    }

    /// The current entry, only when it is a video.
    pub fn video_entry(&self) -> Option<&EntryDescriptor> {
        self.entry.as_ref().filter(|entry| entry.is_video)
    }
}
