use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "vaultscrub")]
#[command(about = "Redact sensitive fields from exported password-manager JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact a JSON document
    Redact(RedactArgs),

    /// Print the effective rule set as JSON
    Rules {
        /// Config file with rule overrides (JSON or TOML)
        #[arg(short, long, env = "VAULTSCRUB_CONFIG")]
        config: Option<PathBuf>,

        /// Keep sensitive keys and replace their values
        #[arg(long)]
        preserve_keys: bool,
    },

    /// Write a starter config with the default rules to the current directory
    Init {
        #[arg(long, value_enum, default_value_t = InitFormat::Toml)]
        format: InitFormat,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct RedactArgs {
    /// Input file (`-` for stdin)
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file with rule overrides (JSON or TOML)
    #[arg(short, long, env = "VAULTSCRUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep sensitive keys and replace their values
    #[arg(long)]
    pub preserve_keys: bool,

    /// List every redaction on stderr
    #[arg(long)]
    pub report: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum InitFormat {
    Json,
    Toml,
}
