//! Subcommand handlers.
//!
//! Each handler returns the text to print, so the binary stays a thin shell
//! around parsing, configuration and output.

use anyhow::{Context, Result};
use log::info;
use rand::Rng;
use tinct::{
    export, parse_share_url, validate_count, Color, ColorError, FileStore, KeyValueStore, LockSet,
    PaletteGenerator, PaletteLibrary,
};

use crate::cli::{GenerateArgs, OutputFormat, SavedAction};
use crate::config::Config;
use crate::render;

/// Opens the saved palette library in the configured store directory.
pub fn open_library(config: &Config) -> Result<PaletteLibrary<FileStore>> {
    let dir = config.store_dir();
    PaletteLibrary::open(FileStore::new(&dir))
        .with_context(|| format!("opening saved palettes in {}", dir.display()))
}

pub fn generate<R: Rng>(
    generator: &mut PaletteGenerator<R>,
    args: &GenerateArgs,
    config: &Config,
    styled: bool,
) -> Result<String> {
    let count = args.count.unwrap_or(config.count);
    let strategy = args.strategy.unwrap_or(config.strategy);
    let locks: LockSet = args.locks.iter().copied().collect();

    // a pinned slot wins over --base
    let palette = match args.base {
        Some(base) if locks.is_empty() => {
            generator.generate_from_base(count, strategy, &locks, base)?
        }
        _ => generator.generate(count, strategy, &locks)?,
    };

    let mut out = format_palette(palette.colors(), &locks, args.format, config, styled)?;

    if args.save {
        let mut library = open_library(config)?;
        let saved = library.save(palette.colors())?;
        info!("saved palette {}", saved.id);
        if args.format == OutputFormat::Text {
            out.push_str(&format!("\n\nsaved as {}", saved.id));
        }
    }

    Ok(out)
}

pub fn convert(color: Color, styled: bool) -> String {
    render::details(color, styled)
}

pub fn hsl(h: f64, s: f64, l: f64, styled: bool) -> String {
    render::details(Color::from_hsl(h, s, l), styled)
}

pub fn load(url: &str, format: OutputFormat, config: &Config, styled: bool) -> Result<String> {
    let colors = parse_share_url(url)?;
    validate_count(colors.len())?;
    format_palette(&colors, &LockSet::new(), format, config, styled)
}

pub fn saved<S: KeyValueStore>(
    library: &mut PaletteLibrary<S>,
    action: &SavedAction,
    config: &Config,
    styled: bool,
) -> Result<String> {
    match action {
        SavedAction::List => {
            if library.is_empty() {
                return Ok("no saved palettes".to_string());
            }
            let lines: Vec<String> = library
                .list()
                .iter()
                .map(|saved| {
                    let hexes: Vec<String> = saved.colors.iter().map(Color::to_string).collect();
                    format!(
                        "{}  {}  {}",
                        saved.id,
                        saved.date.format("%Y-%m-%d %H:%M"),
                        hexes.join(" ")
                    )
                })
                .collect();
            Ok(lines.join("\n"))
        }
        SavedAction::Show { id, format } => {
            let saved = library.get(*id).ok_or(ColorError::PaletteNotFound(*id))?;
            format_palette(&saved.colors, &LockSet::new(), *format, config, styled)
        }
        SavedAction::Delete { id } => {
            let removed = library.delete(*id)?;
            Ok(format!("deleted palette {}", removed.id))
        }
        SavedAction::Clear => {
            let removed = library.clear()?;
            Ok(format!("deleted {} saved palettes", removed))
        }
    }
}

fn format_palette(
    colors: &[Color],
    locks: &LockSet,
    format: OutputFormat,
    config: &Config,
    styled: bool,
) -> Result<String> {
    match format.export_format() {
        None => Ok(render::palette(colors, locks, styled)),
        Some(export_format) => Ok(export(colors, export_format, &config.share_url)?),
    }
}
