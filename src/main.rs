use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;
use rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use spiral_noise::noise::{DEFAULT_HEIGHT, DEFAULT_TEXTURE_PATH, DEFAULT_WIDTH};
use spiral_noise::offsets::{DEFAULT_SAMPLE_COUNT, DEFAULT_TABLE_PATH};
use spiral_noise::{generate, render, render_rust_const, write_table, NoiseTexture, SampleCount};

/// Generates the spiral offset table and noise texture used by the renderer.
///
/// With no subcommand both assets are written with their defaults.
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the golden-angle offset table
    Offsets(OffsetsArgs),
    /// Write a grayscale white-noise png
    Noise(NoiseArgs),
}

#[derive(Args, Debug, PartialEq)]
struct OffsetsArgs {
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT as i64, allow_negative_numbers = true)]
    count: i64,

    #[arg(long, default_value = DEFAULT_TABLE_PATH)]
    output: PathBuf,

    /// Emit a `pub const NAME: [[f32; 2]; N]` item instead of bare initializers
    #[arg(long, value_name = "NAME")]
    rust_const: Option<String>,
}

#[derive(Args, Debug, PartialEq)]
struct NoiseArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Seed for a reproducible texture; OS entropy otherwise
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value = DEFAULT_TEXTURE_PATH)]
    output: PathBuf,
}

impl Default for OffsetsArgs {
    fn default() -> Self {
        Self {
            count: DEFAULT_SAMPLE_COUNT as i64,
            output: PathBuf::from(DEFAULT_TABLE_PATH),
            rust_const: None,
        }
    }
}

impl Default for NoiseArgs {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            output: PathBuf::from(DEFAULT_TEXTURE_PATH),
        }
    }
}

fn write_offsets(args: &OffsetsArgs) -> anyhow::Result<()> {
    let count = SampleCount::try_from(args.count)?;
    let offsets: Vec<_> = generate(count).collect();

    let text = match &args.rust_const {
        Some(name) => render_rust_const(name, &offsets),
        None => render(&offsets),
    };
    write_table(&args.output, &text)
        .with_context(|| format!("saving offset table to {}", args.output.display()))?;

    info!(
        "saved {} offsets to {}",
        offsets.len(),
        args.output.display()
    );
    Ok(())
}

fn write_noise(args: &NoiseArgs) -> anyhow::Result<()> {
    let rng = match args.seed {
        Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
        None => Xoshiro256Plus::from_entropy(),
    };

    let mut texture = NoiseTexture::new(args.width, args.height, rng)?;
    texture.init();
    texture
        .write_png(&args.output)
        .with_context(|| format!("saving noise texture to {}", args.output.display()))?;

    info!(
        "saved {}x{} noise texture to {}",
        texture.width(),
        texture.height(),
        args.output.display()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Offsets(args)) => write_offsets(&args),
        Some(Command::Noise(args)) => write_noise(&args),
        None => {
            write_offsets(&OffsetsArgs::default())?;
            write_noise(&NoiseArgs::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_subcommands_match_defaults() {
        match Cli::parse_from(["spiral-noise", "offsets"]).command {
            Some(Command::Offsets(args)) => assert_eq!(args, OffsetsArgs::default()),
            _ => panic!("expected offsets subcommand"),
        }
        match Cli::parse_from(["spiral-noise", "noise"]).command {
            Some(Command::Noise(args)) => assert_eq!(args, NoiseArgs::default()),
            _ => panic!("expected noise subcommand"),
        }
    }

    #[test]
    fn negative_count_reaches_validation() {
        match Cli::parse_from(["spiral-noise", "offsets", "--count", "-3"]).command {
            Some(Command::Offsets(args)) => {
                assert_eq!(args.count, -3);
                assert!(write_offsets(&args).is_err());
            }
            _ => panic!("expected offsets subcommand"),
        }
    }

    #[test]
    fn no_subcommand_parses() {
        assert!(Cli::parse_from(["spiral-noise"]).command.is_none());
    }
}
