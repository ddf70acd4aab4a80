use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "wheelfade",
    author,
    version,
    about = "Scroll-driven texture crossfade demo driver",
    arg_required_else_help = false
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Fade configuration TOML file defining the texture ring and variants.
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Variant profile to drive; defaults to the config's `defaults.variant`.
    #[arg(long, value_name = "NAME")]
    pub variant: Option<String>,

    /// Scroll script to replay: one signed wheel delta per line, `#` starts a comment.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Override the configured scroll sensitivity.
    #[arg(long, value_name = "SCALE")]
    pub scroll_scale: Option<f32>,

    /// Skip decoding texture images before the replay starts.
    #[arg(long)]
    pub skip_textures: bool,

    /// Emit frame snapshots as JSON lines instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a configuration and decode every texture it references.
    Check(CheckArgs),
    /// List variant profiles and their uniform control ranges.
    Variants(VariantsArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Fade configuration TOML file.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

#[derive(Parser, Debug)]
pub struct VariantsArgs {
    /// Fade configuration TOML file.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

pub fn parse() -> Cli {
    Cli::parse()
}
