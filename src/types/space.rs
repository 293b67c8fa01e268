//! Colour space families.
//!
//! Each family bundles a cylindrical-to-RGB conversion and the distance
//! metric used to rank palette entries during quantization. The family is
//! resolved from its CLI token once at startup; per-pixel code only ever
//! dispatches on the enum.

use std::fmt;
use std::str::FromStr;

use palette::color_difference::EuclideanDistance;
use palette::{Clamp, IntoColor, Lab, Luv, Srgb};

use crate::config::PaletteConfig;
use crate::error::{BitmixError, Result};

use super::Colour;

/// Scale from unit lightness/chroma to the Lab/Luv ranges used by the
/// `palette` crate (L in 0..100).
const LCH_SCALE: f32 = 100.0;

/// A cylindrical colour space family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourSpace {
    /// Hue / saturation / value.
    Hsv,
    /// Hue / saturation / lightness.
    Hsl,
    /// CIE LCh(ab): hue / chroma / lightness, perceptually spaced hues.
    Hcl,
    /// CIE LCh(uv): the most even hue spacing of the bunch.
    Luv,
    /// Full-saturation console-style palette on the HSV cylinder.
    Custom,
}

impl ColourSpace {
    /// All families, in CLI listing order.
    pub const ALL: [ColourSpace; 5] = [
        ColourSpace::Hsv,
        ColourSpace::Hsl,
        ColourSpace::Hcl,
        ColourSpace::Luv,
        ColourSpace::Custom,
    ];

    /// Convert a cylindrical coordinate to an RGB colour, clamped to the
    /// sRGB gamut.
    ///
    /// `degrees` is the hue angle, `radius` the unit saturation/chroma, and
    /// `height` the unit value/lightness. Mixing can push coordinates out of
    /// gamut (heights accumulate per set bit), so the result is always
    /// clamped before conversion to 8-bit channels.
    pub fn to_rgb(self, degrees: f32, radius: f32, height: f32) -> Colour {
        let rgb: Srgb = match self {
            ColourSpace::Hsv | ColourSpace::Custom => {
                let hsv: palette::Hsv = palette::Hsv::new(degrees, radius, height);
                hsv.into_color()
            }
            ColourSpace::Hsl => {
                let hsl: palette::Hsl = palette::Hsl::new(degrees, radius, height);
                hsl.into_color()
            }
            ColourSpace::Hcl => {
                let lch: palette::Lch =
                    palette::Lch::new(height * LCH_SCALE, radius * LCH_SCALE, degrees);
                lch.into_color()
            }
            ColourSpace::Luv => {
                let lchuv: palette::Lchuv =
                    palette::Lchuv::new(height * LCH_SCALE, radius * LCH_SCALE, degrees);
                lchuv.into_color()
            }
        };

        let rgb = rgb.clamp().into_format::<u8>();
        Colour::new(rgb.red, rgb.green, rgb.blue)
    }

    /// Ranking distance between two colours.
    ///
    /// Squared Euclidean distance in the family's matching space: sRGB for
    /// the RGB-cylinder families, Lab for HCL, Luv for LUV. Non-negative and
    /// zero for identical colours; only the ordering matters, so the square
    /// root is never taken.
    pub fn distance(self, a: Colour, b: Colour) -> f32 {
        match self {
            ColourSpace::Hsv | ColourSpace::Hsl | ColourSpace::Custom => {
                srgb(a).distance_squared(srgb(b))
            }
            ColourSpace::Hcl => {
                let a: Lab = srgb(a).into_color();
                let b: Lab = srgb(b).into_color();
                a.distance_squared(b)
            }
            ColourSpace::Luv => {
                let a: Luv = srgb(a).into_color();
                let b: Luv = srgb(b).into_color();
                a.distance_squared(b)
            }
        }
    }

    /// Tuned default palette configuration for this family.
    pub fn default_config(self) -> PaletteConfig {
        match self {
            ColourSpace::Hsv | ColourSpace::Hsl | ColourSpace::Hcl => {
                PaletteConfig::new(0.0, 0.5, 0.125)
            }
            // Chosen experimentally: hue shift balances R/G/B, chroma is as
            // saturated as LCh(uv) tolerates, lightness avoids washing out
            // high-popcount values. Heights sum to 0.7 rather than 1.0, so
            // all-bits-set needs an explicit white override.
            ColourSpace::Luv => {
                PaletteConfig::new(10.0, 0.065, 0.0875).with_override(0xFF, "#FFFFFF")
            }
            ColourSpace::Custom => {
                PaletteConfig::new(0.0, 1.0, 0.125).with_override(0xFF, "#FFFFFF")
            }
        }
    }
}

impl FromStr for ColourSpace {
    type Err = BitmixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hsv" => Ok(ColourSpace::Hsv),
            "hsl" => Ok(ColourSpace::Hsl),
            "hcl" => Ok(ColourSpace::Hcl),
            "luv" => Ok(ColourSpace::Luv),
            "custom" => Ok(ColourSpace::Custom),
            _ => Err(BitmixError::Parse {
                message: format!("Unsupported palette family '{}'", s),
                help: Some("Available families: hsv, hsl, hcl, luv, custom".to_string()),
            }),
        }
    }
}

impl fmt::Display for ColourSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColourSpace::Hsv => "hsv",
            ColourSpace::Hsl => "hsl",
            ColourSpace::Hcl => "hcl",
            ColourSpace::Luv => "luv",
            ColourSpace::Custom => "custom",
        };
        f.write_str(name)
    }
}

fn srgb(c: Colour) -> Srgb {
    Srgb::new(
        c.r as f32 / 255.0,
        c.g as f32 / 255.0,
        c.b as f32 / 255.0,
    )
}
