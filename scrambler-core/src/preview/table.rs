use crate::program::Trace;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

/// Render a run as a table of steps
pub fn render_table(trace: &Trace, use_color: bool) -> String {
    let mut table = Table::new();

    // Use TTY detection to decide whether to wrap columns
    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("Operation").fg(Color::Cyan),
            Cell::new("Before").fg(Color::Cyan),
            Cell::new("After").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["#", "Operation", "Before", "After"]);
    }

    for step in &trace.steps {
        if use_color {
            table.add_row(vec![
                Cell::new(step.index.to_string()).fg(Color::Yellow),
                Cell::new(&step.description),
                Cell::new(&step.before),
                Cell::new(&step.after).fg(Color::Green),
            ]);
        } else {
            table.add_row(vec![
                step.index.to_string(),
                step.description.clone(),
                step.before.clone(),
                step.after.clone(),
            ]);
        }
    }

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("{}: {} -> {}\n", trace.mode, trace.input, trace.output));
    output
}
