//! Core types for bitmix: colours, polar mixing, spaces, and palettes.

mod colour;
pub mod polar;
mod palette;
mod space;

pub use colour::Colour;
pub use palette::{BitColour, BitPalette};
pub use polar::Polar;
pub use space::ColourSpace;
