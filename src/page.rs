use std::sync::Arc;
use tracing::debug;

use crate::context::EntryContext;
use crate::history::HistoryApi;
use crate::player::{MediaElement, PlayerControls};
use crate::preview::{CardHandle, HoverPreviewEngine, OverlaySurface, PreviewOverlay};
use crate::progress::ProgressReporter;

/// Handles to the page elements the runtime drives. Any of them may be
/// missing on a given page; a missing handle disables only the feature
/// that needs it.
pub struct PageHandles {
    pub media: Option<Arc<dyn MediaElement>>,
    pub overlay: Option<Box<dyn OverlaySurface>>,
    pub cards: Vec<CardHandle>,
}

/// Components activated for the current page.
pub struct PageBindings {
    pub reporter: Option<ProgressReporter>,
    pub controls: Option<PlayerControls>,
    pub previews: Option<HoverPreviewEngine>,
}

/// Wire up the page once its load event fires.
///
/// The entry context decides the player features: the reporter and the
/// keyboard controls attach only for video entries with a media element
/// present. Hover previews attach to the card grid regardless of entry
/// type.
pub fn attach_page(
    context: Arc<EntryContext>,
    history: Arc<HistoryApi>,
    handles: PageHandles,
) -> PageBindings {
    let (reporter, controls) = if context.video_entry().is_some() {
        match handles.media {
            Some(media) => (
                Some(ProgressReporter::new(Arc::clone(&context), history)),
                Some(PlayerControls::new(Arc::clone(&context), media)),
            ),
            None => {
                debug!("Video entry without a media element, player features disabled");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let previews = match handles.overlay {
        Some(surface) => Some(HoverPreviewEngine::attach(
            PreviewOverlay::new(surface),
            &handles.cards,
        )),
        None => {
            if !handles.cards.is_empty() {
                debug!("No preview overlay on this page, hover previews disabled");
            }
            None
        }
    };

    PageBindings {
        reporter,
        controls,
        previews,
    }
}
