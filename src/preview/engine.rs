use std::collections::HashMap;
use tracing::debug;

use super::geometry::{OverlayPlacement, PointerPosition, Viewport};

/// The page-side surface backing the floating preview: one container and
/// one image element, singletons on the page.
pub trait OverlaySurface: Send {
    fn set_placement(&mut self, placement: OverlayPlacement);
    fn set_image(&mut self, url: &str);
    fn set_visible(&mut self, visible: bool);
}

/// Owner of the single floating preview element. All mutation of the
/// shared overlay goes through this type.
pub struct PreviewOverlay {
    surface: Box<dyn OverlaySurface>,
}

impl PreviewOverlay {
    pub fn new(surface: Box<dyn OverlaySurface>) -> Self {
        Self { surface }
    }

    pub fn show_preview(&mut self, image_url: &str, placement: OverlayPlacement) {
        self.surface.set_placement(placement);
        self.surface.set_image(image_url);
        self.surface.set_visible(true);
    }

    pub fn hide(&mut self) {
        self.surface.set_visible(false);
    }
}

/// One grid card as handed over by the page glue, addressed by its
/// position in the grid.
#[derive(Clone, Debug, Default)]
pub struct CardHandle {
    /// Source URL of the card's embedded preview image, when it has one.
    pub preview_image_url: Option<String>,
}

impl CardHandle {
    pub fn with_preview(url: impl Into<String>) -> Self {
        Self {
            preview_image_url: Some(url.into()),
        }
    }

    pub fn without_preview() -> Self {
        Self {
            preview_image_url: None,
        }
    }
}

/// Hover preview behavior for a grid of cards.
///
/// Exactly one overlay is shared by every card; whichever card saw the
/// most recent pointer-enter owns what it shows.
pub struct HoverPreviewEngine {
    overlay: PreviewOverlay,
    bindings: HashMap<usize, String>,
}

impl HoverPreviewEngine {
    /// Bind hover behavior to every card that carries a preview image.
    /// Cards without one are skipped and get no hover behavior; the rest
    /// of the grid is unaffected.
    pub fn attach(overlay: PreviewOverlay, cards: &[CardHandle]) -> Self {
        let mut bindings = HashMap::new();
        for (index, card) in cards.iter().enumerate() {
            match &card.preview_image_url {
                Some(url) => {
                    bindings.insert(index, url.clone());
                }
                None => debug!("Card {} has no preview image, skipping hover binding", index),
            }
        }

        Self { overlay, bindings }
    }

    /// Number of cards that received hover behavior.
    pub fn bound_cards(&self) -> usize {
        self.bindings.len()
    }

    /// Pointer entered a card: place the overlay on the opposite vertical
    /// half from the pointer and swap in this card's preview. Unbound
    /// cards are a no-op.
    pub fn on_pointer_enter(&mut self, card: usize, pointer: PointerPosition, viewport: Viewport) {
        let Some(url) = self.bindings.get(&card) else {
            return;
        };

        let placement = OverlayPlacement::for_pointer(pointer, viewport);
        self.overlay.show_preview(url, placement);
    }

    /// Pointer left a card: hide the overlay.
    pub fn on_pointer_leave(&mut self, card: usize) {
        if self.bindings.contains_key(&card) {
            self.overlay.hide();
        }
    }
}
