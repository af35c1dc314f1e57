use anyhow::{anyhow, Context, Result};
use clap::Parser;
use scrambler_core::{
    load_program, Config, Mode, OutputFormatter, Preview, Program, ScrambleError, VersionResult,
};
use std::io::{self, Read};
use std::path::Path;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod check;
mod cli;
mod list;
mod scramble;

use cli::{Cli, Commands, OutputFormat, PreviewArg, ProgramArgs};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Handle -C directory flag
    if let Some(ref dir) = cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change to directory: {}", dir.display()))
            .unwrap_or_else(|e| {
                eprintln!("Error: {e:#}");
                process::exit(2);
            });
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {e:#}");
        Config::default()
    });
    let use_color = if cli.no_color {
        Some(false)
    } else {
        config.defaults.use_color
    };

    let result = match cli.command {
        Commands::Scramble {
            password,
            program,
            preview,
            output,
            quiet,
        } => run_mode(
            Mode::Scramble,
            password.or_else(|| config.defaults.scramble_input.clone()),
            &program,
            preview.map(Into::into),
            &config,
            use_color,
            output,
            quiet,
        ),

        Commands::Unscramble {
            password,
            program,
            preview,
            output,
            quiet,
        } => run_mode(
            Mode::Unscramble,
            password.or_else(|| config.defaults.unscramble_input.clone()),
            &program,
            preview.map(Into::into),
            &config,
            use_color,
            output,
            quiet,
        ),

        Commands::Check {
            password,
            program,
            output,
            quiet,
        } => require_password(password.or_else(|| config.defaults.scramble_input.clone()))
            .and_then(|password| {
                let program = read_program(&program)?;
                check::handle_check(&program, &password, output, quiet)
            }),

        Commands::List { program, output } => {
            read_program(&program).and_then(|program| list::handle_list(&program, output))
        },

        Commands::Version { output } => handle_version(output),
    };

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .init();
}

/// 1 for round-trip mismatches, 2 for invalid input, 3 for anything else
fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<ScrambleError>() {
        Some(ScrambleError::RoundTripMismatch { .. }) => 1,
        Some(_) => 2,
        None => {
            // Untyped failures from the CLI and config layers
            let message = e.to_string();
            if message.contains("invalid") || message.contains("Failed to read") {
                2
            } else {
                3
            }
        },
    }
}

#[allow(clippy::too_many_arguments)]
fn run_mode(
    mode: Mode,
    password: Option<String>,
    program_args: &ProgramArgs,
    preview: Option<Preview>,
    config: &Config,
    use_color: Option<bool>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let password = require_password(password)?;
    let program = read_program(program_args)?;

    // Use preview format from CLI arg or config default
    let preview = preview
        .or_else(|| PreviewArg::from_str(&config.defaults.preview_format).map(Into::into));

    scramble::handle_scramble(mode, &program, &password, preview, use_color, output, quiet)
}

fn require_password(password: Option<String>) -> Result<String> {
    password.ok_or_else(|| {
        anyhow!("invalid input: no password given and no default set in .scrambler/config.toml")
    })
}

fn read_program(args: &ProgramArgs) -> Result<Program> {
    if args.ops == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read operations from stdin")?;
        debug!(bytes = text.len(), "read operations from stdin");
        return Program::parse(&text).context("Failed to parse operations from stdin");
    }

    let program = load_program(&args.ops)?;
    debug!(path = %args.ops.display(), operations = program.len(), "loaded operations");
    Ok(program)
}

fn handle_version(output: OutputFormat) -> Result<()> {
    let version_result = VersionResult {
        name: "scrambler".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let formatted = match output {
        OutputFormat::Json => version_result.format_json(),
        OutputFormat::Summary => version_result.format_summary(),
    };

    println!("{}", formatted);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_for_typed_errors() {
        let mismatch = anyhow::Error::from(ScrambleError::RoundTripMismatch {
            input: "abb".to_string(),
            restored: "bab".to_string(),
        });
        assert_eq!(exit_code(&mismatch), 1);

        let missing = anyhow::Error::from(ScrambleError::LetterNotFound { letter: 'z' })
            .context("Failed to scramble 'abc'");
        assert_eq!(exit_code(&missing), 2);
    }

    #[test]
    fn test_exit_code_for_untyped_errors() {
        assert_eq!(exit_code(&anyhow!("invalid input: no password given")), 2);
        assert_eq!(exit_code(&anyhow!("Failed to read operations file: ops.txt")), 2);
        assert_eq!(exit_code(&anyhow!("round trip mismatch in some other tool")), 3);
    }
}
