/// Viewport dimensions at the time of a pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pointer coordinates in viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Which viewport halves the pointer occupies.
///
/// Strict comparison against the midpoints: a pointer exactly on a
/// midpoint belongs to the right/bottom half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerQuadrant {
    pub left: bool,
    pub top: bool,
}

impl PointerQuadrant {
    pub fn locate(pointer: PointerPosition, viewport: Viewport) -> Self {
        Self {
            left: pointer.x < viewport.width / 2.0,
            top: pointer.y < viewport.height / 2.0,
        }
    }
}

/// Horizontal anchoring of the preview box.
///
/// Only `Auto` exists today: the left/right half is detected but does not
/// influence horizontal placement, so the box stays right-anchored by the
/// page layout. Known gap, kept as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAnchor {
    #[default]
    Auto,
}

/// Vertical anchoring of the preview box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// Pinned to the top edge of the viewport.
    Top,
    /// Pinned to the bottom edge of the viewport.
    Bottom,
}

/// Where the overlay goes for one hover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayPlacement {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl OverlayPlacement {
    /// The box opens on the opposite vertical half from the pointer; the
    /// horizontal anchor always resets to automatic.
    pub fn for_pointer(pointer: PointerPosition, viewport: Viewport) -> Self {
        let quadrant = PointerQuadrant::locate(pointer, viewport);
        Self {
            horizontal: HorizontalAnchor::Auto,
            vertical: if quadrant.top {
                VerticalAnchor::Bottom
            } else {
                VerticalAnchor::Top
            },
        }
    }
}
