use crate::core::KataKind;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "kata-log")]
#[command(about = "Run and check small coding katas")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run every drill in a TOML drill sheet
    Run {
        /// Path to the drill sheet
        #[arg(short, long, default_value = "drills/katas.toml")]
        sheet: String,

        /// Only run drills for this kata
        #[arg(short, long, value_enum)]
        kata: Option<KataKind>,

        /// List the drills without running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Solve one kata with a JSON input
    Solve {
        #[arg(value_enum)]
        kata: KataKind,

        /// JSON object, e.g. '{"text": "cab"}'
        #[arg(short, long)]
        input: String,
    },
}
