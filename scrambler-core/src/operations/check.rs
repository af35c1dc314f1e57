use crate::output::CheckResult;
use crate::program::Program;
use anyhow::{Context, Result};

/// Round-trip check - scramble, then unscramble, and compare with the input
pub fn check_operation(program: &Program, input: &str) -> Result<CheckResult> {
    let round_trip = program
        .verify_round_trip(input)
        .with_context(|| format!("Failed to check round trip for '{}'", input))?;

    Ok(CheckResult {
        ok: round_trip.is_ok(),
        input: round_trip.input,
        scrambled: round_trip.scrambled,
        restored: round_trip.restored,
        operations: program.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_operation_round_trips() {
        let program = Program::parse(
            "swap position 0 with position 7\n\
             rotate based on position of letter e\n\
             reverse positions 2 through 5",
        )
        .unwrap();
        let result = check_operation(&program, "abcdefgh").unwrap();
        assert!(result.ok);
        assert_eq!(result.restored, "abcdefgh");
        assert_eq!(result.operations, 3);
    }

    #[test]
    fn test_check_operation_ambiguous_length() {
        let program = Program::parse("rotate based on position of letter c").unwrap();
        let err = check_operation(&program, "abcde").unwrap_err();
        assert!(format!("{err:#}").contains("cannot be inverted"));
    }
}
