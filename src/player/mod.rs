mod controls;
mod traits;

pub use controls::{PlayerControls, TransportKey};
pub use traits::MediaElement;
