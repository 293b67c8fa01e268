//! Rendering module for bitmix.
//!
//! Quantizes decoded images onto a palette and writes composited index
//! planes out as GIF files.

mod gif;
mod quantize;

pub use gif::write_gif;
pub use quantize::quantize;
