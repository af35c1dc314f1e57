use anyhow::Result;
use scrambler_core::{check_operation, OutputFormatter, Program, ScrambleError};

use crate::OutputFormat;

pub fn handle_check(
    program: &Program,
    password: &str,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let result = check_operation(program, password)?;

    match output {
        OutputFormat::Json => {
            println!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.format_summary());
            }
        },
    }

    if !result.ok {
        return Err(ScrambleError::RoundTripMismatch {
            input: result.input,
            restored: result.restored,
        }
        .into());
    }

    Ok(())
}
