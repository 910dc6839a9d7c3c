use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{debug, LevelFilter};
use tinct::PaletteGenerator;

mod cli;
mod commands;
mod config;
mod render;

use cli::{Cli, Command};
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{}", out);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// `-v` raises the default level one step at a time; RUST_LOG still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<String> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store_dir = Some(store);
    }
    let styled = console::colors_enabled();
    debug!("config: {:?}, styled output: {}", config, styled);

    match cli.command {
        Command::Generate(args) => {
            commands::generate(&mut PaletteGenerator::new(), &args, &config, styled)
        }
        Command::Convert { color } => Ok(commands::convert(color, styled)),
        Command::Hsl { h, s, l } => Ok(commands::hsl(h, s, l, styled)),
        Command::Load { url, format } => commands::load(&url, format, &config, styled),
        Command::Saved { action } => {
            let mut library = commands::open_library(&config)?;
            commands::saved(&mut library, &action, &config, styled)
        }
    }
}
