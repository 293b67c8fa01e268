//! Byte-to-colour bit-mixing palettes.
//!
//! A palette assigns each of the 8 bit positions a fixed cylindrical
//! coordinate: eight hues spaced 45° apart at a shared radius and height.
//! A byte's colour is the vector mix of its set bits' coordinates, so
//! neighbouring byte values land on perceptually related colours and XOR of
//! two index planes stays visually meaningful.

use std::collections::HashMap;

use crate::config::PaletteConfig;
use crate::error::{BitmixError, Result};

use super::polar::{self, Polar};
use super::{Colour, ColourSpace};

/// The fixed cylindrical coordinate of one bit position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitColour {
    /// Hue angle in degrees.
    pub degrees: f32,
    /// Saturation/chroma.
    pub radius: f32,
    /// Value/lightness contributed when the bit is set.
    pub height: f32,
}

/// An immutable 256-entry byte → colour palette.
///
/// Built once at startup and read-only thereafter; safe to share across
/// threads without synchronization.
#[derive(Debug, Clone)]
pub struct BitPalette {
    bits: [BitColour; 8],
    space: ColourSpace,
    overrides: HashMap<u8, Colour>,
}

impl BitPalette {
    /// Build a palette for a colour space family from a config.
    ///
    /// Fails if `angle_shift` is outside 0..=45 degrees, if `base_radius` or
    /// `base_height` is outside 0..=1, or if an override value is not a
    /// parseable hex colour.
    pub fn new(space: ColourSpace, config: &PaletteConfig) -> Result<Self> {
        if !(0.0..=45.0).contains(&config.angle_shift) {
            return Err(BitmixError::Config {
                message: format!(
                    "angle_shift must be between 0 and 45 degrees, got {}",
                    config.angle_shift
                ),
                help: None,
            });
        }
        if !(0.0..=1.0).contains(&config.base_radius) {
            return Err(BitmixError::Config {
                message: format!(
                    "base_radius must be between 0 and 1.0, got {}",
                    config.base_radius
                ),
                help: None,
            });
        }
        if !(0.0..=1.0).contains(&config.base_height) {
            return Err(BitmixError::Config {
                message: format!(
                    "base_height must be between 0 and 1.0, got {}",
                    config.base_height
                ),
                help: None,
            });
        }

        let mut overrides = HashMap::new();
        for (&value, hex) in &config.overrides {
            overrides.insert(value, Colour::from_hex(hex)?);
        }

        // Eight evenly spaced hues, one per bit.
        let bits = std::array::from_fn(|i| BitColour {
            degrees: config.angle_shift + i as f32 * 45.0,
            radius: config.base_radius,
            height: config.base_height,
        });

        Ok(Self {
            bits,
            space,
            overrides,
        })
    }

    /// Build a palette with the family's tuned default config.
    pub fn with_defaults(space: ColourSpace) -> Result<Self> {
        Self::new(space, &space.default_config())
    }

    /// The colour space family this palette was built on.
    pub fn space(&self) -> ColourSpace {
        self.space
    }

    /// The colour assigned to a byte value.
    ///
    /// Overrides win; otherwise the set bits' heights accumulate and their
    /// hue/radius coordinates mix as polar vectors before conversion. With
    /// no override for 0, `select(0)` is black (empty mix, zero height).
    pub fn select(&self, value: u8) -> Colour {
        if let Some(&colour) = self.overrides.get(&value) {
            return colour;
        }

        let mut mix = Vec::with_capacity(value.count_ones() as usize);
        let mut height = 0.0f32;
        for (i, bit) in self.bits.iter().enumerate() {
            if value & (1 << i) != 0 {
                height += bit.height;
                mix.push(Polar::new(bit.degrees, bit.radius));
            }
        }

        let mixed = polar::add(&mix);
        self.space.to_rgb(mixed.degrees, mixed.radius, height)
    }

    /// The byte value whose palette colour is closest to `target`.
    ///
    /// Brute-force scan of all 256 entries ranked by the family distance;
    /// ties resolve to the lowest value. O(256) per call, fine for batch
    /// quantization.
    pub fn nearest(&self, target: Colour) -> u8 {
        let mut best = 0u8;
        let mut best_distance = f32::MAX;

        for value in 0..=255u8 {
            let distance = self.space.distance(target, self.select(value));
            if distance < best_distance {
                best_distance = distance;
                best = value;
            }
        }

        best
    }

    /// The full 256-entry colour table, `select(0)` through `select(255)`.
    ///
    /// A property of the palette alone, independent of any image; this is
    /// what the GIF encoder receives as the global colour table.
    pub fn colour_table(&self) -> Vec<Colour> {
        (0..=255u8).map(|value| self.select(value)).collect()
    }
}
