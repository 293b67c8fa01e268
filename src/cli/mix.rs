//! Mix command implementation.
//!
//! Quantizes each input image onto the selected palette, XOR-composites the
//! resulting index planes, and writes a single GIF.

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use crate::compose::{xor_scroll, xor_static, Axis};
use crate::config::PaletteConfig;
use crate::error::{BitmixError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{quantize, write_gif};
use crate::types::{BitPalette, ColourSpace};

/// Quantize images onto a bit palette and XOR them into a GIF
#[derive(Args, Debug)]
pub struct MixArgs {
    /// Input images to quantize and combine
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Palette family (hsv, hsl, hcl, luv, custom)
    #[arg(long, default_value = "hsv")]
    pub palette: String,

    /// Scroll axis for an animated two-image merge (vertical or horizontal)
    #[arg(long)]
    pub animate: Option<String>,

    /// Palette tuning file (YAML) overriding the family defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = ".")]
    pub output: PathBuf,
}

pub fn run(args: MixArgs, printer: &Printer) -> Result<()> {
    // Resolve the family token once; everything after this dispatches on
    // the enum.
    let space = ColourSpace::from_str(&args.palette)?;

    let config = match &args.config {
        Some(path) => PaletteConfig::load(path)?,
        None => space.default_config(),
    };
    let palette = BitPalette::new(space, &config)?;

    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| BitmixError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut planes = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let image = image::open(file).map_err(|e| BitmixError::Image {
            message: format!("{}: {}", display_path(file), e),
        })?;

        printer.status(
            "Quantizing",
            &format!("{} ({} palette)", display_path(file), space),
        );
        planes.push(quantize(&image, &palette));
    }

    let composite = match &args.animate {
        Some(token) => xor_scroll(&planes, Axis::from_str(token)?)?,
        None => xor_static(&planes)?,
    };

    let out_path = args.output.join(output_name(&args.files, space));
    write_gif(&out_path, &palette, &composite)?;

    printer.status(
        "Encoded",
        &format!(
            "{} ({} from {})",
            display_path(&out_path),
            plural(composite.frames.len(), "frame", "frames"),
            plural(args.files.len(), "image", "images"),
        ),
    );

    Ok(())
}

/// Output file name: input basenames joined with '-', then the family name.
/// e.g. `tiles.png + noise.png` with hsv → `tiles-noise-hsv.gif`.
fn output_name(files: &[PathBuf], space: ColourSpace) -> String {
    let mut name = String::new();
    for file in files {
        let stem = file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        name.push_str(stem);
        name.push('-');
    }
    format!("{}{}.gif", name, space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name_single() {
        let files = [PathBuf::from("tiles.png")];
        assert_eq!(output_name(&files, ColourSpace::Hsv), "tiles-hsv.gif");
    }

    #[test]
    fn test_output_name_two_inputs() {
        let files = [PathBuf::from("a/tiles.png"), PathBuf::from("b/noise.jpeg")];
        assert_eq!(output_name(&files, ColourSpace::Luv), "tiles-noise-luv.gif");
    }
}
