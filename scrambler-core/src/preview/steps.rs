use crate::program::{Mode, Trace};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;

/// Render a run as one line per applied operation
pub fn render_steps(trace: &Trace, use_color: bool) -> String {
    let mut output = String::new();

    let title = match trace.mode {
        Mode::Scramble => format!("Scramble \"{}\"", trace.input),
        Mode::Unscramble => format!("Unscramble \"{}\"", trace.input),
    };
    if use_color {
        writeln!(output, "{}", AnsiColor::Cyan.bold().paint(title)).unwrap();
    } else {
        writeln!(output, "{}", title).unwrap();
    }
    writeln!(output).unwrap();

    let width = trace.steps.len().to_string().len();
    for step in &trace.steps {
        if use_color {
            writeln!(
                output,
                "  {:>width$}. {}: {} -> {}",
                step.index,
                AnsiColor::Yellow.paint(&step.description),
                AnsiColor::DarkGray.paint(&step.before),
                step.after,
                width = width
            )
            .unwrap();
        } else {
            writeln!(
                output,
                "  {:>width$}. {}: {} -> {}",
                step.index,
                step.description,
                step.before,
                step.after,
                width = width
            )
            .unwrap();
        }
    }

    if !trace.steps.is_empty() {
        writeln!(output).unwrap();
    }

    if use_color {
        writeln!(
            output,
            "Result: {}",
            AnsiColor::Green.bold().paint(&trace.output)
        )
        .unwrap();
    } else {
        writeln!(output, "Result: {}", trace.output).unwrap();
    }

    output
}
