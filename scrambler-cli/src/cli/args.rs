use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use super::types::{OutputFormat, PreviewArg};

/// Scramble and unscramble passwords with reversible operations
#[derive(Parser, Debug)]
#[command(name = "scrambler")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Increase log verbosity. Can be repeated up to 3 times.
    /// -v: info
    /// -vv: debug (every applied operation)
    /// -vvv: trace (letter lookups)
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        verbatim_doc_comment
    )]
    pub verbose: u8,

    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', global = true, value_name = "PATH")]
    pub directory: Option<PathBuf>,
}

/// Where to read the operation list from
#[derive(Args, Debug, Clone)]
pub struct ProgramArgs {
    /// File with one operation per line ("-" reads from stdin)
    #[arg(short = 'f', long = "ops", value_name = "FILE")]
    pub ops: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply every operation in order
    Scramble {
        /// Password to scramble (defaults to `scramble_input` from config)
        password: Option<String>,

        #[command(flatten)]
        program: ProgramArgs,

        /// Show a step-by-step preview of the run
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output (alias for --preview none)
        #[arg(long)]
        quiet: bool,
    },

    /// Undo every operation in reverse order
    Unscramble {
        /// Scrambled password (defaults to `unscramble_input` from config)
        password: Option<String>,

        #[command(flatten)]
        program: ProgramArgs,

        /// Show a step-by-step preview of the run
        #[arg(long, value_enum)]
        preview: Option<PreviewArg>,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output (alias for --preview none)
        #[arg(long)]
        quiet: bool,
    },

    /// Scramble then unscramble a password and verify the original comes back
    Check {
        /// Password to check (defaults to `scramble_input` from config)
        password: Option<String>,

        #[command(flatten)]
        program: ProgramArgs,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,

        /// Suppress all output
        #[arg(long)]
        quiet: bool,
    },

    /// Print the parsed operations
    List {
        #[command(flatten)]
        program: ProgramArgs,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Show version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
