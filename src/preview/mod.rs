mod engine;
mod geometry;

pub use engine::{CardHandle, HoverPreviewEngine, OverlaySurface, PreviewOverlay};
pub use geometry::{
    HorizontalAnchor, OverlayPlacement, PointerPosition, PointerQuadrant, VerticalAnchor, Viewport,
};
