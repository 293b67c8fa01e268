pub mod completions;
pub mod mix;
pub mod table;

use clap::{Parser, Subcommand};

/// bitmix - byte-to-colour palettes and XOR GIF compositing
#[derive(Parser, Debug)]
#[command(name = "bitmix")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Quantize images onto a bit palette and XOR them into a GIF
    Mix(mix::MixArgs),

    /// Print the 256-entry colour table for a palette family
    Table(table::TableArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
