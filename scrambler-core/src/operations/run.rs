use crate::output::ScrambleResult;
use crate::preview::{render_trace, Preview};
use crate::program::{Mode, Program};
use anyhow::{Context, Result};

/// Scramble operation - equivalent to `scrambler scramble`
pub fn scramble_operation(
    program: &Program,
    input: &str,
    preview: Option<Preview>,
    use_color: Option<bool>,
) -> Result<(ScrambleResult, Option<String>)> {
    run_operation(program, Mode::Scramble, input, preview, use_color)
}

/// Unscramble operation - equivalent to `scrambler unscramble`
pub fn unscramble_operation(
    program: &Program,
    input: &str,
    preview: Option<Preview>,
    use_color: Option<bool>,
) -> Result<(ScrambleResult, Option<String>)> {
    run_operation(program, Mode::Unscramble, input, preview, use_color)
}

fn run_operation(
    program: &Program,
    mode: Mode,
    input: &str,
    preview: Option<Preview>,
    use_color: Option<bool>,
) -> Result<(ScrambleResult, Option<String>)> {
    let trace = program
        .run_traced(mode, input)
        .with_context(|| format!("Failed to {} '{}'", mode, input))?;

    let rendered = match preview {
        Some(Preview::None) | None => None,
        Some(format) => Some(render_trace(&trace, format, use_color)),
    };

    let result = ScrambleResult {
        mode,
        input: input.to_string(),
        output: trace.output.clone(),
        operations: program.len(),
        trace: Some(trace),
    };

    Ok((result, rendered))
}
