use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use taskcfg_core::{decode_with, PaddingMode, Validation};

use config::{DecoderConfig, OutputFormat};

mod config;
mod render;

/// Decode a task executor action descriptor
#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Descriptor, e.g. 0x0100000000000000000203ffffffffffffffffffffffffffffffffffffffffff
    descriptor: String,

    /// TOML file with decoder settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How filler bytes are removed from the stack-slot trailer [trailing, legacy]
    #[arg(long)]
    padding: Option<PaddingMode>,

    /// Cross-field checks to enforce [permissive, slots, full]
    #[arg(long)]
    validation: Option<Validation>,

    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Raise log verbosity, repeatable
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// File settings with command line overrides applied.
    fn resolve_config(&self) -> Result<DecoderConfig> {
        let mut config = match &self.config {
            Some(path) => DecoderConfig::new(path)?,
            None => DecoderConfig::default(),
        };
        if let Some(padding) = self.padding {
            config.padding = padding;
        }
        if let Some(validation) = self.validation {
            config.validation = validation;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    env_logger::Builder::new()
        .filter_level(config.logger.with_verbosity(args.verbose))
        .parse_default_env()
        .init();
    log::debug!("decoder settings: {:?}", config);

    let decoded = decode_with(&args.descriptor, &config.decode_options())
        .with_context(|| format!("decode {}", args.descriptor))?;

    let out = render::render(&args.descriptor, &decoded, config.format)?;
    std::io::stdout().write_all(out.as_bytes())?;

    Ok(())
}
