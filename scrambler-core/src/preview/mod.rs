mod steps;
mod summary;
mod table;

pub use steps::render_steps;
pub use summary::render_summary;
pub use table::render_table;

use crate::program::Trace;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Steps,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "steps" => Ok(Self::Steps),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render a traced run in the specified format
pub fn render_trace(trace: &Trace, format: Preview, use_color: Option<bool>) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_table(trace, use_color),
        Preview::Steps => render_steps(trace, use_color),
        Preview::Summary => render_summary(trace),
        Preview::None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Program;
    use std::str::FromStr;

    fn sample_trace() -> Trace {
        let program =
            Program::parse("swap position 4 with position 0\nrotate left 1 step").unwrap();
        program.scramble_traced("abcde").unwrap()
    }

    #[test]
    fn test_preview_from_str() {
        assert_eq!(Preview::from_str("table").unwrap(), Preview::Table);
        assert_eq!(Preview::from_str("STEPS").unwrap(), Preview::Steps);
        assert_eq!(Preview::from_str("summary").unwrap(), Preview::Summary);
        assert_eq!(Preview::from_str("none").unwrap(), Preview::None);
        assert!(Preview::from_str("diff").is_err());
    }

    #[test]
    fn test_should_use_color_explicit_overrides_detection() {
        assert!(should_use_color_with_detector(Some(true), || false));
        assert!(!should_use_color_with_detector(Some(false), || true));
        assert!(should_use_color_with_detector(None, || true));
        assert!(!should_use_color_with_detector(None, || false));
    }

    #[test]
    fn test_render_none_is_empty() {
        assert_eq!(render_trace(&sample_trace(), Preview::None, Some(false)), "");
    }

    #[test]
    fn test_render_dispatch() {
        let trace = sample_trace();
        assert!(render_trace(&trace, Preview::Summary, Some(false)).starts_with("[SCRAMBLE]"));
        assert!(render_trace(&trace, Preview::Steps, Some(false)).contains("Result: bcdae"));
        assert!(render_trace(&trace, Preview::Table, Some(false)).contains("rotate left 1 step"));
    }
}
