use crate::program::{Mode, Trace};
use std::fmt::Write;

/// Render a run as AI-friendly summary format
pub fn render_summary(trace: &Trace) -> String {
    let mut output = String::new();

    let header = match trace.mode {
        Mode::Scramble => "[SCRAMBLE]",
        Mode::Unscramble => "[UNSCRAMBLE]",
    };
    writeln!(output, "{}", header).unwrap();
    writeln!(output, "Input: {}", trace.input).unwrap();
    writeln!(output, "Output: {}", trace.output).unwrap();
    writeln!(output, "Operations: {}", trace.steps.len()).unwrap();

    if !trace.steps.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "[STEPS]").unwrap();
        for step in &trace.steps {
            writeln!(
                output,
                "{}: {} -> {} ({})",
                step.index, step.before, step.after, step.description
            )
            .unwrap();
        }
    }

    output
}
