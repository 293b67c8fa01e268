//! Table command: print a palette's full colour table.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use crate::config::PaletteConfig;
use crate::error::Result;
use crate::output::Printer;
use crate::types::{BitPalette, ColourSpace};

/// Print the 256-entry colour table for a palette family
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Palette family (hsv, hsl, hcl, luv, custom)
    #[arg(long, default_value = "hsv")]
    pub palette: String,

    /// Palette tuning file (YAML) overriding the family defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: TableArgs, printer: &Printer) -> Result<()> {
    let space = ColourSpace::from_str(&args.palette)?;
    let config = match &args.config {
        Some(path) => PaletteConfig::load(path)?,
        None => space.default_config(),
    };
    let palette = BitPalette::new(space, &config)?;

    printer.info("Listing", &format!("256 colours ({} palette)", space));

    // One `value: colour` line per byte to stdout.
    for (value, colour) in palette.colour_table().iter().enumerate() {
        println!("0x{:02X}: {}", value, colour);
    }

    Ok(())
}
