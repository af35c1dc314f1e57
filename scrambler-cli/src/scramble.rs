use anyhow::Result;
use scrambler_core::{
    scramble_operation, unscramble_operation, Mode, OutputFormatter, Preview, Program,
};

use crate::OutputFormat;

pub fn handle_scramble(
    mode: Mode,
    program: &Program,
    password: &str,
    preview: Option<Preview>,
    use_color: Option<bool>,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    // JSON output already carries the steps
    let preview = if quiet || output == OutputFormat::Json {
        None
    } else {
        preview
    };

    let (result, rendered) = match mode {
        Mode::Scramble => scramble_operation(program, password, preview, use_color)?,
        Mode::Unscramble => unscramble_operation(program, password, preview, use_color)?,
    };

    match output {
        OutputFormat::Json => {
            println!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            if quiet {
                return Ok(());
            }
            match rendered {
                Some(rendered) => print!("{}", rendered),
                None => print!("{}", result.format_summary()),
            }
        },
    }

    Ok(())
}
