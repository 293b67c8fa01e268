//! Image quantization onto a bit palette.
//!
//! One canonical matching rule is used everywhere: the palette's own
//! perceptual `nearest`. The GIF encoder never re-matches pixels; it
//! receives planes that are already index data.

use image::DynamicImage;

use crate::compose::IndexPlane;
use crate::types::{BitPalette, Colour};

/// Quantize a decoded image against a palette.
///
/// Alpha is dropped before matching; every pixel maps to the palette entry
/// closest under the palette family's distance metric.
pub fn quantize(image: &DynamicImage, palette: &BitPalette) -> IndexPlane {
    let rgb = image.to_rgb8();

    let data = rgb
        .pixels()
        .map(|pixel| palette.nearest(Colour::new(pixel[0], pixel[1], pixel[2])))
        .collect();

    IndexPlane::new(rgb.width(), rgb.height(), data)
}
