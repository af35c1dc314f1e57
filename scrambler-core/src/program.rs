use crate::error::ScrambleError;
use crate::operation::{Operation, RotationTable};
use crate::parser::parse_program;
use crate::password::Password;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which way a program is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `perform` every operation in list order
    Scramble,
    /// `unperform` every operation in reverse list order
    Unscramble,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scramble => f.write_str("scramble"),
            Self::Unscramble => f.write_str("unscramble"),
        }
    }
}

/// One applied operation and the password on either side of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    /// 1-based position of the operation in the program
    pub index: usize,
    pub operation: Operation,
    pub description: String,
    pub before: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    pub mode: Mode,
    pub input: String,
    pub output: String,
    pub steps: Vec<TraceStep>,
}

/// Outcome of scrambling a password and unscrambling the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTrip {
    pub input: String,
    pub scrambled: String,
    pub restored: String,
}

impl RoundTrip {
    pub fn is_ok(&self) -> bool {
        self.input == self.restored
    }
}

/// An ordered list of operations applied as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    operations: Vec<Operation>,
}

impl Program {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn parse(text: &str) -> Result<Self, ScrambleError> {
        parse_program(text).map(Self::new)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Check every operation against a password length.
    pub fn validate(&self, length: usize) -> Result<(), ScrambleError> {
        self.operations.iter().try_for_each(|op| op.validate(length))
    }

    pub fn scramble(&self, input: &str) -> Result<String, ScrambleError> {
        self.run(Mode::Scramble, input, None)
    }

    pub fn unscramble(&self, input: &str) -> Result<String, ScrambleError> {
        self.run(Mode::Unscramble, input, None)
    }

    pub fn scramble_traced(&self, input: &str) -> Result<Trace, ScrambleError> {
        self.run_traced(Mode::Scramble, input)
    }

    pub fn unscramble_traced(&self, input: &str) -> Result<Trace, ScrambleError> {
        self.run_traced(Mode::Unscramble, input)
    }

    pub fn run_traced(&self, mode: Mode, input: &str) -> Result<Trace, ScrambleError> {
        let mut steps = Vec::with_capacity(self.operations.len());
        let output = self.run(mode, input, Some(&mut steps))?;
        Ok(Trace {
            mode,
            input: input.to_string(),
            output,
            steps,
        })
    }

    /// Scramble `input`, unscramble the result and report both.
    pub fn verify_round_trip(&self, input: &str) -> Result<RoundTrip, ScrambleError> {
        let scrambled = self.scramble(input)?;
        let restored = self.unscramble(&scrambled)?;
        Ok(RoundTrip {
            input: input.to_string(),
            scrambled,
            restored,
        })
    }

    fn has_letter_rotation(&self) -> bool {
        self.operations
            .iter()
            .any(|op| matches!(op, Operation::RotateLetter { .. }))
    }

    fn run(
        &self,
        mode: Mode,
        input: &str,
        mut trace: Option<&mut Vec<TraceStep>>,
    ) -> Result<String, ScrambleError> {
        let mut password = Password::new(input)?;
        // Reject bad positions before the password is touched.
        self.validate(password.len())?;

        let ordered: Box<dyn Iterator<Item = (usize, &Operation)> + '_> = match mode {
            Mode::Scramble => Box::new(self.operations.iter().enumerate()),
            Mode::Unscramble => Box::new(self.operations.iter().enumerate().rev()),
        };

        // One inverse table serves every letter rotation in the run.
        let table = (mode == Mode::Unscramble && self.has_letter_rotation())
            .then(|| RotationTable::for_length(password.len()));
        if let Some(table) = table.as_ref().filter(|table| !table.is_invertible()) {
            debug!(
                length = table.length(),
                "letter rotations are not fully invertible at this length"
            );
        }

        for (index, op) in ordered {
            let before = password.to_string();
            match (mode, table.as_ref()) {
                (Mode::Scramble, _) => op.perform(&mut password)?,
                (Mode::Unscramble, Some(table)) => op.unperform_with_table(&mut password, table)?,
                (Mode::Unscramble, None) => op.unperform(&mut password)?,
            }
            debug!(
                step = index + 1,
                %mode,
                operation = %op,
                %before,
                after = %password,
                "applied operation"
            );

            if let Some(steps) = trace.as_deref_mut() {
                steps.push(TraceStep {
                    index: index + 1,
                    operation: *op,
                    description: op.to_string(),
                    before,
                    after: password.to_string(),
                });
            }
        }

        Ok(password.into_string())
    }
}

impl FromStr for Program {
    type Err = ScrambleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<Operation> for Program {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
swap position 4 with position 0
swap letter d with letter b
reverse positions 0 through 4
rotate left 1 step
move position 1 to position 4
move position 3 to position 0
rotate based on position of letter b
rotate based on position of letter d
";

    #[test]
    fn test_sample_scramble() {
        let program = Program::parse(SAMPLE).unwrap();
        assert_eq!(program.len(), 8);
        assert_eq!(program.scramble("abcde").unwrap(), "decab");
    }

    #[test]
    fn test_sample_trace_records_every_step() {
        let program = Program::parse(SAMPLE).unwrap();
        let trace = program.scramble_traced("abcde").unwrap();
        let afters: Vec<&str> = trace.steps.iter().map(|s| s.after.as_str()).collect();
        assert_eq!(
            afters,
            vec!["ebcda", "edcba", "abcde", "bcdea", "bdeac", "abdec", "ecabd", "decab"]
        );
        assert_eq!(trace.steps[0].before, "abcde");
        assert_eq!(trace.steps[0].index, 1);
        assert_eq!(trace.output, "decab");
    }

    #[test]
    fn test_unscramble_runs_in_reverse() {
        let program: Program = "swap position 0 with position 1\nrotate right 1 step"
            .parse()
            .unwrap();
        assert_eq!(program.scramble("abc").unwrap(), "cba");

        let trace = program.unscramble_traced("cba").unwrap();
        let indices: Vec<usize> = trace.steps.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![2, 1]);
        assert_eq!(trace.output, "abc");
    }

    #[test]
    fn test_length_8_round_trip() {
        let text = "\
rotate based on position of letter a
swap position 2 with position 7
rotate based on position of letter h
reverse positions 1 through 6
move position 5 to position 0
swap letter c with letter e
rotate right 11 steps
rotate based on position of letter c
";
        let program = Program::parse(text).unwrap();
        let round_trip = program.verify_round_trip("abcdefgh").unwrap();
        assert!(round_trip.is_ok());
        assert_eq!(round_trip.scrambled, "hfabcdeg");
    }

    #[test]
    fn test_out_of_range_rejected_before_mutation() {
        let program =
            Program::parse("swap position 0 with position 1\nmove position 0 to position 9")
                .unwrap();
        assert_eq!(
            program.scramble("abcde"),
            Err(ScrambleError::IndexOutOfRange {
                index: 9,
                length: 5
            })
        );
    }

    #[test]
    fn test_empty_program_is_identity() {
        let program = Program::default();
        assert!(program.is_empty());
        assert_eq!(program.scramble("hello").unwrap(), "hello");
        assert_eq!(program.unscramble("hello").unwrap(), "hello");
    }

    #[test]
    fn test_sample_unscramble_is_ambiguous_at_length_5() {
        let program = Program::parse(SAMPLE).unwrap();
        assert_eq!(
            program.unscramble("decab"),
            Err(ScrambleError::AmbiguousRotation {
                letter: 'd',
                length: 5
            })
        );
    }

    #[test]
    fn test_collect_into_program() {
        let program: Program = [Operation::Move { from: 0, to: 2 }].into_iter().collect();
        assert_eq!(program.scramble("abc").unwrap(), "bca");
    }
}
