//! bitmix - byte-to-colour bit-mixing palettes
//!
//! Maps 8-bit byte values onto perceptually structured colours by assigning
//! each bit position a fixed hue and mixing set bits as polar vectors, then
//! uses the inverse (nearest-colour) mapping to quantize arbitrary images
//! onto the fixed 256-colour table and XOR-composite them into GIFs.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod output;
pub mod render;
pub mod types;

pub use compose::{xor_scroll, xor_static, Axis, Composite, IndexPlane, FRAME_DELAY};
pub use config::PaletteConfig;
pub use error::{BitmixError, Result};
pub use render::{quantize, write_gif};
pub use types::{BitColour, BitPalette, Colour, ColourSpace, Polar};
