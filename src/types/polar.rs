//! Polar vector arithmetic for hue/chroma mixing.
//!
//! Bit colours are mixed as vectors on the hue wheel: each contributes a
//! vector at its hue angle with its chroma as magnitude. Summing in Cartesian
//! space makes the blend commutative, and opposing hues cancel instead of
//! averaging to an arbitrary midpoint.

/// A polar coordinate: an angle on the hue wheel plus a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    /// Angle in degrees.
    pub degrees: f32,
    /// Non-negative magnitude.
    pub radius: f32,
}

impl Polar {
    /// Create a polar coordinate from an angle in degrees and a radius.
    pub const fn new(degrees: f32, radius: f32) -> Self {
        Self { degrees, radius }
    }
}

/// Sum polar coordinates as vectors.
///
/// Converts each coordinate to Cartesian, sums the components, and converts
/// back. The resulting angle is normalized to `[0, 360)`. An empty slice
/// yields `(0°, 0)`; two equal-magnitude vectors 180° apart cancel to a
/// radius of ≈0 (the angle is then meaningless but stable).
pub fn add(coords: &[Polar]) -> Polar {
    let mut x = 0.0f32;
    let mut y = 0.0f32;

    for coord in coords {
        let radians = coord.degrees.to_radians();
        x += coord.radius * radians.cos();
        y += coord.radius * radians.sin();
    }

    Polar {
        degrees: y.atan2(x).to_degrees().rem_euclid(360.0),
        radius: x.hypot(y),
    }
}
