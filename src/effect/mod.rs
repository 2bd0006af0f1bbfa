//! Animations drawn on top of the tile display
//!
//! - rainbow: hue ramp across the whole chain
//! - scroll text: glyphs travelling left or up, one column or row per frame

mod rainbow;
mod scroll_text;

pub use rainbow::fill_rainbow;
pub use scroll_text::{ScrollOptions, TextDirection, TextStyle};
