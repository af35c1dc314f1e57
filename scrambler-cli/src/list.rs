use anyhow::Result;
use scrambler_core::{list_operation, OutputFormatter, Program};

use crate::OutputFormat;

pub fn handle_list(program: &Program, output: OutputFormat) -> Result<()> {
    let result = list_operation(program);

    match output {
        OutputFormat::Json => {
            println!("{}", result.format_json());
        },
        OutputFormat::Summary => {
            print!("{}", result.format_summary());
        },
    }

    Ok(())
}
