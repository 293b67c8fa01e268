//! XOR compositing of quantized index planes.
//!
//! Planes are XOR-ed index-by-index, not colour-by-colour: because the
//! palette maps bit patterns to mixed colours, XOR in index space stays
//! structured instead of producing noise. The scrolling variant cyclically
//! shifts the second operand a little further each frame.

use std::fmt;
use std::str::FromStr;

use crate::error::{BitmixError, Result};

/// Inter-frame delay in hundredths of a second (20 fps).
pub const FRAME_DELAY: u16 = 5;

/// Scroll step per frame, in pixels.
const SCROLL_BLOCK: usize = 4;

/// A rectangular raster of palette indices, one byte per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPlane {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IndexPlane {
    /// Create a plane from row-major index data.
    ///
    /// `data.len()` must equal `width * height`; rows are contiguous, so the
    /// stride equals the width.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` disagrees with the bounds. Planes are built
    /// from buffers whose length the caller already knows (quantizer output,
    /// XOR of existing planes), so a mismatch is a caller bug rather than a
    /// recoverable input error.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "index data does not match plane bounds"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize
    }

    /// Row-major palette indices.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn same_bounds(&self, other: &IndexPlane) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(BitmixError::Dimension {
                expected_width: self.width,
                expected_height: self.height,
                found_width: other.width,
                found_height: other.height,
            });
        }
        Ok(())
    }
}

/// Scroll direction for animated composites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl FromStr for Axis {
    type Err = BitmixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" => Ok(Axis::Vertical),
            "horizontal" => Ok(Axis::Horizontal),
            _ => Err(BitmixError::Axis {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => f.write_str("vertical"),
            Axis::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// An ordered frame sequence with per-frame delays, ready for GIF encoding.
#[derive(Debug, Clone)]
pub struct Composite {
    pub frames: Vec<IndexPlane>,
    /// Delay per frame in hundredths of a second; same length as `frames`.
    pub delays: Vec<u16>,
    pub width: u32,
    pub height: u32,
}

/// XOR one or more equally-sized planes into a single frame.
///
/// Commutative and associative; operand order does not affect the result.
pub fn xor_static(planes: &[IndexPlane]) -> Result<Composite> {
    let first = planes.first().ok_or(BitmixError::OperandCount {
        expected: 1,
        found: 0,
    })?;

    let mut data = first.data.clone();
    for plane in &planes[1..] {
        first.same_bounds(plane)?;
        for (out, &index) in data.iter_mut().zip(&plane.data) {
            *out ^= index;
        }
    }

    Ok(Composite {
        frames: vec![IndexPlane::new(first.width, first.height, data)],
        delays: vec![FRAME_DELAY],
        width: first.width,
        height: first.height,
    })
}

/// XOR exactly two planes into a scrolling animation.
///
/// Frame k XORs the first plane with the second cyclically shifted by
/// `offset * k` bytes, where the offset advances 4 pixels per frame along
/// the chosen axis. The frame count is the image extent along that axis
/// divided by 4 (integer division; the remainder shortens the animation,
/// never the frames).
pub fn xor_scroll(planes: &[IndexPlane], axis: Axis) -> Result<Composite> {
    let [a, b] = planes else {
        return Err(BitmixError::OperandCount {
            expected: 2,
            found: planes.len(),
        });
    };
    a.same_bounds(b)?;

    let (offset, frame_count) = match axis {
        Axis::Vertical => (a.stride() * SCROLL_BLOCK, a.height as usize / SCROLL_BLOCK),
        Axis::Horizontal => (SCROLL_BLOCK, a.width as usize / SCROLL_BLOCK),
    };

    if frame_count == 0 {
        return Err(BitmixError::Composite {
            message: format!("image too small to animate along the {} axis", axis),
            help: Some(format!(
                "Scrolling advances {} pixels per frame; the image needs at least that many",
                SCROLL_BLOCK
            )),
        });
    }

    let frames = (0..frame_count)
        .map(|k| {
            let data = xor_with_offset(&a.data, &b.data, offset * k);
            IndexPlane::new(a.width, a.height, data)
        })
        .collect();

    Ok(Composite {
        frames,
        delays: vec![FRAME_DELAY; frame_count],
        width: a.width,
        height: a.height,
    })
}

/// XOR `a` against `b` cyclically shifted by `offset` bytes.
fn xor_with_offset(a: &[u8], b: &[u8], offset: usize) -> Vec<u8> {
    (0..a.len())
        .map(|i| a[i] ^ b[(i + offset) % a.len()])
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plane(width: u32, height: u32, data: &[u8]) -> IndexPlane {
        IndexPlane::new(width, height, data.to_vec())
    }

    #[test]
    fn test_static_xor_pixelwise() {
        let a = plane(2, 2, &[0x0F, 0xF0, 0xAA, 0x00]);
        let b = plane(2, 2, &[0xFF, 0xF0, 0x55, 0x12]);

        let result = xor_static(&[a, b]).unwrap();
        assert_eq!(result.frames.len(), 1);
        assert_eq!(result.frames[0].data(), &[0xF0, 0x00, 0xFF, 0x12]);
        assert_eq!(result.delays, vec![FRAME_DELAY]);
    }

    #[test]
    fn test_static_single_plane_passthrough() {
        let a = plane(2, 1, &[3, 7]);
        let result = xor_static(std::slice::from_ref(&a)).unwrap();
        assert_eq!(result.frames[0], a);
    }

    #[test]
    fn test_static_involution() {
        let a = plane(2, 2, &[1, 2, 3, 4]);
        let b = plane(2, 2, &[9, 8, 7, 6]);

        let ab = xor_static(&[a.clone(), b.clone()]).unwrap();
        let back = xor_static(&[ab.frames[0].clone(), b]).unwrap();
        assert_eq!(back.frames[0], a);
    }

    #[test]
    fn test_static_order_independent() {
        let a = plane(2, 2, &[1, 2, 3, 4]);
        let b = plane(2, 2, &[5, 6, 7, 8]);
        let c = plane(2, 2, &[9, 10, 11, 12]);

        let abc = xor_static(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let cab = xor_static(&[c, a, b]).unwrap();
        assert_eq!(abc.frames[0], cab.frames[0]);
    }

    #[test]
    fn test_static_no_planes() {
        let err = xor_static(&[]).unwrap_err();
        assert!(matches!(
            err,
            BitmixError::OperandCount {
                expected: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn test_static_dimension_mismatch() {
        let a = plane(2, 2, &[0; 4]);
        let b = plane(2, 3, &[0; 6]);
        let err = xor_static(&[a, b]).unwrap_err();
        assert!(matches!(err, BitmixError::Dimension { .. }));
    }

    #[test]
    fn test_scroll_requires_two_operands() {
        let a = plane(4, 4, &[0; 16]);
        let err = xor_scroll(std::slice::from_ref(&a), Axis::Vertical).unwrap_err();
        assert!(matches!(
            err,
            BitmixError::OperandCount {
                expected: 2,
                found: 1
            }
        ));

        let err = xor_scroll(&[a.clone(), a.clone(), a], Axis::Vertical).unwrap_err();
        assert!(matches!(
            err,
            BitmixError::OperandCount {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_scroll_vertical_4x4_is_single_static_frame() {
        // 4 rows / block of 4 → exactly one frame at zero offset, which is
        // the plain XOR of the two planes.
        let a = plane(4, 4, &(0..16).collect::<Vec<u8>>());
        let b = plane(4, 4, &(16..32).collect::<Vec<u8>>());

        let animated = xor_scroll(&[a.clone(), b.clone()], Axis::Vertical).unwrap();
        let fixed = xor_static(&[a, b]).unwrap();

        assert_eq!(animated.frames.len(), 1);
        assert_eq!(animated.frames[0], fixed.frames[0]);
    }

    #[test]
    fn test_scroll_horizontal_frame_offsets() {
        // 8 wide → 2 frames; frame 1 reads the second operand shifted by 4.
        let a = plane(8, 1, &[0; 8]);
        let b = plane(8, 1, &[1, 2, 3, 4, 5, 6, 7, 8]);

        let result = xor_scroll(&[a, b], Axis::Horizontal).unwrap();
        assert_eq!(result.frames.len(), 2);
        assert_eq!(result.frames[0].data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(result.frames[1].data(), &[5, 6, 7, 8, 1, 2, 3, 4]);
        assert_eq!(result.delays, vec![FRAME_DELAY; 2]);
    }

    #[test]
    fn test_scroll_vertical_offset_is_whole_rows() {
        let a = plane(2, 8, &[0; 16]);
        let data: Vec<u8> = (0..16).collect();
        let b = plane(2, 8, &data);

        let result = xor_scroll(&[a, b], Axis::Vertical).unwrap();
        assert_eq!(result.frames.len(), 2);
        // Offset per frame is stride * 4 = 8 bytes.
        let mut shifted = data.clone();
        shifted.rotate_left(8);
        assert_eq!(result.frames[1].data(), shifted.as_slice());
    }

    #[test]
    fn test_scroll_remainder_rows_shorten_animation() {
        // 7 rows / 4 → 1 frame; the remainder drops frames, not pixels.
        let a = plane(2, 7, &[0; 14]);
        let b = plane(2, 7, &[1; 14]);
        let result = xor_scroll(&[a, b], Axis::Vertical).unwrap();
        assert_eq!(result.frames.len(), 1);
        assert_eq!(result.frames[0].data().len(), 14);
    }

    #[test]
    fn test_scroll_too_small_fails() {
        let a = plane(2, 2, &[0; 4]);
        let b = plane(2, 2, &[1; 4]);
        let err = xor_scroll(&[a, b], Axis::Vertical).unwrap_err();
        assert!(matches!(err, BitmixError::Composite { .. }));
    }

    #[test]
    fn test_scroll_dimension_mismatch() {
        let a = plane(4, 4, &[0; 16]);
        let b = plane(4, 8, &[0; 32]);
        let err = xor_scroll(&[a, b], Axis::Vertical).unwrap_err();
        assert!(matches!(err, BitmixError::Dimension { .. }));
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("vertical".parse::<Axis>().unwrap(), Axis::Vertical);
        assert_eq!("HORIZONTAL".parse::<Axis>().unwrap(), Axis::Horizontal);
        let err = "diagonal".parse::<Axis>().unwrap_err();
        assert!(matches!(err, BitmixError::Axis { .. }));
    }

    #[test]
    #[should_panic(expected = "index data does not match plane bounds")]
    fn test_plane_bounds_checked() {
        IndexPlane::new(2, 2, vec![0; 3]);
    }
}
