//! Case-study overlay: renders a catalog entry into the overlay slots and
//! toggles its visibility.

mod renderer;
mod template;

pub use renderer::{
    OverlayRenderer,
    OverlayState,
};
pub use template::{
    credits_block,
    description_block,
    gallery_block,
};
