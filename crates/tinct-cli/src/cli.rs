//! Command line definition.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tinct::{Color, ExportFormat, Strategy};

/// Generate, convert and save color palettes
#[derive(Parser, Debug)]
#[command(name = "tinct", version, about, long_about = None)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: <config dir>/tinct/config.yaml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved palettes (overrides the config file)
    #[arg(long, value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a palette
    Generate(GenerateArgs),

    /// Show a hex color as rgb and hsl
    Convert {
        /// Color as #rrggbb
        color: Color,
    },

    /// Convert an hsl triple to hex
    #[command(allow_negative_numbers = true)]
    Hsl {
        /// Hue in degrees
        h: f64,
        /// Saturation in percent
        s: f64,
        /// Lightness in percent
        l: f64,
    },

    /// Print the palette carried by a share link
    Load {
        /// Share link or `colors=...` query
        url: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Manage saved palettes
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of colors, 2 to 10
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Generation strategy
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Pin a slot, e.g. --lock 0=#ff6b35 (repeatable, slots count from 0)
    #[arg(long = "lock", value_name = "IDX=HEX", value_parser = parse_lock)]
    pub locks: Vec<(usize, Color)>,

    /// Base color for hue-based strategies when no slot is pinned
    #[arg(long)]
    pub base: Option<Color>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also save the palette
    #[arg(long)]
    pub save: bool,
}

#[derive(Subcommand, Debug)]
pub enum SavedAction {
    /// List saved palettes
    List,
    /// Print one saved palette
    Show {
        id: u64,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Delete one saved palette
    Delete { id: u64 },
    /// Delete every saved palette
    Clear,
}

/// How a palette is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Swatches for the terminal
    Text,
    /// CSS custom properties
    Css,
    /// JSON document
    Json,
    /// Share link
    Url,
}

impl OutputFormat {
    /// The library export format, or `None` for terminal text.
    pub fn export_format(self) -> Option<ExportFormat> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Css => Some(ExportFormat::Css),
            OutputFormat::Json => Some(ExportFormat::Json),
            OutputFormat::Url => Some(ExportFormat::Url),
        }
    }
}

/// Parses `IDX=HEX`.
fn parse_lock(s: &str) -> Result<(usize, Color), String> {
    let (index, hex) = s
        .split_once('=')
        .ok_or_else(|| format!("expected IDX=HEX, got '{}'", s))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("invalid slot index '{}'", index))?;
    let color = hex.parse::<Color>().map_err(|e| e.to_string())?;
    Ok((index, color))
}
