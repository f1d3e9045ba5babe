use std::path::PathBuf;

use clap::Parser;

/// embedgen - embed binary assets into C headers
#[derive(Parser, Debug)]
#[command(name = "embedgen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Settings may also come from embedgen.toml or EMBEDGEN_* variables.")]
pub struct Cli {
    /// Directory to scan for assets
    #[arg(long, value_name = "DIR")]
    pub in_dir: Option<PathBuf>,

    /// Directory receiving the generated headers
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Filename glob (default: *.cbor*)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Scan subdirectories too
    #[arg(long)]
    pub recursive: bool,

    /// Config file (default: ./embedgen.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write headers directly instead of via temp file + rename
    #[arg(long)]
    pub no_atomic: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Suppress the success line
    #[arg(short, long)]
    pub quiet: bool,
}
