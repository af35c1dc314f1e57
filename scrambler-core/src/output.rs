use crate::program::Mode;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a scramble or unscramble run
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrambleResult {
    pub mode: Mode,
    pub input: String,
    pub output: String,
    pub operations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<crate::program::Trace>,
}

/// Result of a round-trip check
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResult {
    pub input: String,
    pub scrambled: String,
    pub restored: String,
    pub operations: usize,
    pub ok: bool,
}

/// Result of listing a program's operations
#[derive(Debug, Serialize, Deserialize)]
pub struct ListResult {
    pub operations: Vec<ListedOperation>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListedOperation {
    pub index: usize,
    pub kind: String,
    pub description: String,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for ScrambleResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": self.mode,
            "input": self.input,
            "output": self.output,
            "summary": {
                "operations": self.operations,
            },
            "steps": self.trace.as_ref().map(|t| &t.steps),
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{}\n", self.output)
    }
}

impl OutputFormatter for CheckResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": self.ok,
            "operation": "check",
            "input": self.input,
            "scrambled": self.scrambled,
            "restored": self.restored,
            "summary": {
                "operations": self.operations,
            },
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(output, "{} -> {} -> {}", self.input, self.scrambled, self.restored).unwrap();
        if self.ok {
            writeln!(output, "✓ Round trip restored the input ({} operations)", self.operations)
                .unwrap();
        } else {
            writeln!(
                output,
                "✗ Round trip failed: expected {}, got {}",
                self.input, self.restored
            )
            .unwrap();
        }
        output
    }
}

impl OutputFormatter for ListResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "list",
            "operations": self.operations,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        if self.operations.is_empty() {
            writeln!(output, "No operations found").unwrap();
            return output;
        }
        for op in &self.operations {
            writeln!(output, "{:>3}. {}", op.index, op.description).unwrap();
        }
        output
    }
}

impl OutputFormatter for VersionResult {
    fn format_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
