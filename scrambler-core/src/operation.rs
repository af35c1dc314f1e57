use crate::error::ScrambleError;
use crate::password::{Direction, Password};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A single reversible scrambling step.
///
/// Operations carry only their parameters and can be applied to any number of
/// passwords. Positional parameters are checked with [`Operation::validate`]
/// before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Operation {
    SwapPosition { from: usize, to: usize },
    SwapLetter { from: char, to: char },
    Rotate { direction: Direction, steps: usize },
    RotateLetter { letter: char },
    Reverse { from: usize, to: usize },
    Move { from: usize, to: usize },
}

impl Operation {
    /// Short machine-friendly name of the variant
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SwapPosition { .. } => "swap_position",
            Self::SwapLetter { .. } => "swap_letter",
            Self::Rotate { .. } => "rotate",
            Self::RotateLetter { .. } => "rotate_letter",
            Self::Reverse { .. } => "reverse",
            Self::Move { .. } => "move",
        }
    }

    /// Check every position this operation touches against a password length.
    pub fn validate(&self, length: usize) -> Result<(), ScrambleError> {
        let check = |index: usize| {
            if index < length {
                Ok(())
            } else {
                Err(ScrambleError::IndexOutOfRange { index, length })
            }
        };

        match *self {
            Self::SwapPosition { from, to }
            | Self::Reverse { from, to }
            | Self::Move { from, to } => {
                check(from)?;
                check(to)
            },
            Self::SwapLetter { .. } | Self::Rotate { .. } | Self::RotateLetter { .. } => Ok(()),
        }
    }

    /// Apply the forward transform.
    pub fn perform(&self, password: &mut Password) -> Result<(), ScrambleError> {
        self.validate(password.len())?;

        match *self {
            Self::SwapPosition { from, to } => password.swap(from, to),
            Self::SwapLetter { from, to } => {
                let (i, j) = locate_pair(password, from, to)?;
                password.swap(i, j);
            },
            Self::Rotate { direction, steps } => password.rotate(direction, steps),
            Self::RotateLetter { letter } => {
                let index = first_position(password, letter)?;
                let steps = forward_steps(index);
                trace!(%letter, index, steps, "rotating right by letter position");
                password.rotate(Direction::Right, steps);
            },
            Self::Reverse { from, to } => password.reverse(from, to),
            Self::Move { from, to } => password.move_position(from, to),
        }

        Ok(())
    }

    /// Apply the inverse transform, undoing a prior [`Operation::perform`].
    ///
    /// Letter rotations build a [`RotationTable`] for the password length on
    /// each call. Use [`Operation::unperform_with_table`] to share one across
    /// a run.
    pub fn unperform(&self, password: &mut Password) -> Result<(), ScrambleError> {
        self.undo(password, None)
    }

    /// Same as [`Operation::unperform`], reading letter-rotation inverses from
    /// `table`. A table built for another length is ignored.
    pub fn unperform_with_table(
        &self,
        password: &mut Password,
        table: &RotationTable,
    ) -> Result<(), ScrambleError> {
        self.undo(password, Some(table))
    }

    fn undo(
        &self,
        password: &mut Password,
        table: Option<&RotationTable>,
    ) -> Result<(), ScrambleError> {
        self.validate(password.len())?;

        match *self {
            Self::SwapPosition { from, to } => password.swap(to, from),
            Self::SwapLetter { from, to } => {
                let (i, j) = locate_pair(password, from, to)?;
                password.swap(j, i);
            },
            Self::Rotate { direction, steps } => password.rotate(direction.opposite(), steps),
            Self::RotateLetter { letter } => {
                let index = first_position(password, letter)?;
                let length = password.len();
                let built;
                let table = match table {
                    Some(table) if table.length() == length => table,
                    _ => {
                        built = RotationTable::for_length(length);
                        &built
                    },
                };
                let steps = table
                    .steps_for(index)
                    .ok_or(ScrambleError::AmbiguousRotation { letter, length })?;
                trace!(%letter, index, steps, "rotating left to undo letter rotation");
                password.rotate(Direction::Left, steps);
            },
            Self::Reverse { from, to } => password.reverse(to, from),
            Self::Move { from, to } => password.move_position(to, from),
        }

        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SwapPosition { from, to } => {
                write!(f, "swap position {} with position {}", from, to)
            },
            Self::SwapLetter { from, to } => write!(f, "swap letter {} with letter {}", from, to),
            Self::Rotate { direction, steps } => {
                let unit = if *steps == 1 { "step" } else { "steps" };
                write!(f, "rotate {} {} {}", direction, steps, unit)
            },
            Self::RotateLetter { letter } => {
                write!(f, "rotate based on position of letter {}", letter)
            },
            Self::Reverse { from, to } => write!(f, "reverse positions {} through {}", from, to),
            Self::Move { from, to } => write!(f, "move position {} to position {}", from, to),
        }
    }
}

/// Right-rotation applied when the letter sits at `index`: one more than the
/// index, plus one extra step once the index reaches 4.
pub fn forward_steps(index: usize) -> usize {
    let steps = index + 1;
    if steps >= 5 {
        steps + 1
    } else {
        steps
    }
}

/// Inverse of the letter-position rotation for one password length.
///
/// Built by running the forward rule from every possible starting index and
/// recording where each one lands. A landing index reached from exactly one
/// start can be undone; anything else is ambiguous at this length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationTable {
    length: usize,
    left_steps: Vec<Option<usize>>,
}

impl RotationTable {
    pub fn for_length(length: usize) -> Self {
        let mut origins: Vec<Vec<usize>> = vec![Vec::new(); length];
        for original in 0..length {
            let landed = (original + forward_steps(original)) % length;
            origins[landed].push(original);
        }

        let left_steps = origins
            .into_iter()
            .map(|starts| match starts.as_slice() {
                [only] => Some(forward_steps(*only) % length),
                _ => None,
            })
            .collect();

        Self { length, left_steps }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Left-rotation that restores the password when the letter now sits at `index`.
    pub fn steps_for(&self, index: usize) -> Option<usize> {
        self.left_steps.get(index).copied().flatten()
    }

    /// True when every landing index maps back to exactly one start.
    pub fn is_invertible(&self) -> bool {
        self.left_steps.iter().all(Option::is_some)
    }
}

fn letter_byte(letter: char) -> Result<u8, ScrambleError> {
    u8::try_from(letter).map_err(|_| ScrambleError::LetterNotFound { letter })
}

fn first_position(password: &Password, letter: char) -> Result<usize, ScrambleError> {
    password
        .position_of(letter_byte(letter)?)
        .ok_or(ScrambleError::LetterNotFound { letter })
}

// Last occurrence wins for both letters.
fn locate_pair(password: &Password, from: char, to: char) -> Result<(usize, usize), ScrambleError> {
    let find = |letter: char| {
        password
            .last_position_of(letter_byte(letter)?)
            .ok_or(ScrambleError::LetterNotFound { letter })
    };
    Ok((find(from)?, find(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: Operation, input: &str) -> String {
        let mut password = Password::new(input).unwrap();
        op.perform(&mut password).unwrap();
        password.into_string()
    }

    fn undo(op: Operation, input: &str) -> String {
        let mut password = Password::new(input).unwrap();
        op.unperform(&mut password).unwrap();
        password.into_string()
    }

    #[test]
    fn test_swap_position() {
        let op = Operation::SwapPosition { from: 4, to: 0 };
        assert_eq!(apply(op, "abcde"), "ebcda");
        assert_eq!(undo(op, "ebcda"), "abcde");
    }

    #[test]
    fn test_swap_letter() {
        let op = Operation::SwapLetter { from: 'd', to: 'b' };
        assert_eq!(apply(op, "ebcda"), "edcba");
        assert_eq!(undo(op, "edcba"), "ebcda");
    }

    #[test]
    fn test_swap_letter_uses_last_occurrence() {
        let op = Operation::SwapLetter { from: 'a', to: 'c' };
        assert_eq!(apply(op, "abac"), "abca");
    }

    #[test]
    fn test_swap_letter_missing_letter_fails() {
        let mut password = Password::new("abcde").unwrap();
        let op = Operation::SwapLetter { from: 'a', to: 'z' };
        assert_eq!(
            op.perform(&mut password),
            Err(ScrambleError::LetterNotFound { letter: 'z' })
        );
        assert_eq!(password.as_str(), "abcde");
    }

    #[test]
    fn test_rotate() {
        let op = Operation::Rotate {
            direction: Direction::Left,
            steps: 1,
        };
        assert_eq!(apply(op, "abcde"), "bcdea");
        assert_eq!(undo(op, "bcdea"), "abcde");
    }

    #[test]
    fn test_rotate_letter_forward() {
        assert_eq!(apply(Operation::RotateLetter { letter: 'b' }, "abdec"), "ecabd");
        assert_eq!(apply(Operation::RotateLetter { letter: 'd' }, "ecabd"), "decab");
    }

    #[test]
    fn test_rotate_letter_round_trip_length_8() {
        let original = "abcdefgh";
        for letter in original.chars() {
            let op = Operation::RotateLetter { letter };
            let scrambled = apply(op, original);
            assert_eq!(undo(op, &scrambled), original, "letter {letter}");
        }
    }

    #[test]
    fn test_rotate_letter_ambiguous_length_5() {
        let mut password = Password::new("decab").unwrap();
        let op = Operation::RotateLetter { letter: 'd' };
        assert_eq!(
            op.unperform(&mut password),
            Err(ScrambleError::AmbiguousRotation {
                letter: 'd',
                length: 5
            })
        );
    }

    #[test]
    fn test_unperform_with_shared_table() {
        let table = RotationTable::for_length(8);
        for letter in "abcdefgh".chars() {
            let op = Operation::RotateLetter { letter };
            let mut password = Password::new("abcdefgh").unwrap();
            op.perform(&mut password).unwrap();
            op.unperform_with_table(&mut password, &table).unwrap();
            assert_eq!(password.as_str(), "abcdefgh", "letter {letter}");
        }
    }

    #[test]
    fn test_unperform_with_table_of_other_length() {
        // Built for another length, so it is ignored.
        let table = RotationTable::for_length(5);
        let op = Operation::RotateLetter { letter: 'c' };
        let mut password = Password::new("abcdefgh").unwrap();
        op.perform(&mut password).unwrap();
        op.unperform_with_table(&mut password, &table).unwrap();
        assert_eq!(password.as_str(), "abcdefgh");
    }

    #[test]
    fn test_reverse() {
        let op = Operation::Reverse { from: 0, to: 4 };
        assert_eq!(apply(op, "edcba"), "abcde");
        assert_eq!(undo(op, "abcde"), "edcba");
    }

    #[test]
    fn test_move() {
        let op = Operation::Move { from: 1, to: 4 };
        assert_eq!(apply(op, "bcdea"), "bdeac");
        assert_eq!(undo(op, "bdeac"), "bcdea");
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let op = Operation::Move { from: 1, to: 8 };
        assert_eq!(
            op.validate(8),
            Err(ScrambleError::IndexOutOfRange {
                index: 8,
                length: 8
            })
        );
        assert!(op.validate(9).is_ok());
        assert!(Operation::RotateLetter { letter: 'a' }.validate(0).is_ok());
    }

    #[test]
    fn test_forward_steps_penalty() {
        let steps: Vec<usize> = (0..8).map(forward_steps).collect();
        assert_eq!(steps, vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_rotation_table_length_8() {
        let table = RotationTable::for_length(8);
        assert_eq!(table.length(), 8);
        assert!(table.is_invertible());
        let steps: Vec<Option<usize>> = (0..8).map(|i| table.steps_for(i)).collect();
        assert_eq!(
            steps,
            vec![
                Some(1),
                Some(1),
                Some(6),
                Some(2),
                Some(7),
                Some(3),
                Some(0),
                Some(4)
            ]
        );
        assert_eq!(table.steps_for(8), None);
    }

    #[test]
    fn test_rotation_table_length_5_is_ambiguous() {
        let table = RotationTable::for_length(5);
        assert!(!table.is_invertible());
        assert_eq!(table.steps_for(0), None);
        assert_eq!(table.steps_for(1), Some(1));
    }

    #[test]
    fn test_display() {
        let cases = [
            (
                Operation::SwapPosition { from: 4, to: 0 },
                "swap position 4 with position 0",
            ),
            (
                Operation::SwapLetter { from: 'd', to: 'b' },
                "swap letter d with letter b",
            ),
            (
                Operation::Rotate {
                    direction: Direction::Left,
                    steps: 1,
                },
                "rotate left 1 step",
            ),
            (
                Operation::Rotate {
                    direction: Direction::Right,
                    steps: 3,
                },
                "rotate right 3 steps",
            ),
            (
                Operation::RotateLetter { letter: 'b' },
                "rotate based on position of letter b",
            ),
            (
                Operation::Reverse { from: 0, to: 4 },
                "reverse positions 0 through 4",
            ),
            (
                Operation::Move { from: 1, to: 4 },
                "move position 1 to position 4",
            ),
        ];

        for (op, expected) in cases {
            assert_eq!(op.to_string(), expected);
        }
    }

    #[test]
    fn test_serde_tagging() {
        let op = Operation::Rotate {
            direction: Direction::Right,
            steps: 2,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"kind":"rotate","direction":"right","steps":2}"#);
    }
}
