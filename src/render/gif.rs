//! GIF output for composited index planes.
//!
//! The container format, LZW compression, and frame bookkeeping all belong
//! to the `gif` crate; this module only supplies the palette's constant
//! 256-entry global colour table and the already-quantized frames.

use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use gif::{Encoder, Frame, Repeat};

use crate::compose::Composite;
use crate::error::{BitmixError, Result};
use crate::types::BitPalette;

/// Write a composite to a GIF file.
///
/// The global colour table is `palette.colour_table()` regardless of frame
/// content; animations loop forever.
pub fn write_gif(path: &Path, palette: &BitPalette, composite: &Composite) -> Result<()> {
    let width = gif_extent(composite.width)?;
    let height = gif_extent(composite.height)?;

    let mut table = Vec::with_capacity(256 * 3);
    for colour in palette.colour_table() {
        table.extend_from_slice(&colour.to_array());
    }

    let file = File::create(path).map_err(|e| BitmixError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create output file: {}", e),
    })?;

    let mut encoder = Encoder::new(file, width, height, &table).map_err(encode_error)?;
    encoder.set_repeat(Repeat::Infinite).map_err(encode_error)?;

    for (plane, &delay) in composite.frames.iter().zip(&composite.delays) {
        let mut frame = Frame::default();
        frame.width = width;
        frame.height = height;
        frame.delay = delay;
        frame.buffer = Cow::Borrowed(plane.data());
        encoder.write_frame(&frame).map_err(encode_error)?;
    }

    Ok(())
}

fn gif_extent(value: u32) -> Result<u16> {
    u16::try_from(value).map_err(|_| BitmixError::Image {
        message: format!("dimension {} exceeds the GIF maximum of 65535", value),
    })
}

fn encode_error(e: gif::EncodingError) -> BitmixError {
    BitmixError::Image {
        message: format!("GIF encoding failed: {}", e),
    }
}
