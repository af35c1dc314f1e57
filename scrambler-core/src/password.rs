use crate::error::ScrambleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a circular shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// A fixed-length ASCII password that is mutated in place.
///
/// The primitive mutators take positions that have already been checked
/// against [`Password::len`]; use [`Password::check_index`] (or
/// [`crate::Operation::validate`]) before calling them with untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Password {
    value: Vec<u8>,
}

impl Password {
    pub fn new(value: &str) -> Result<Self, ScrambleError> {
        if !value.is_ascii() {
            return Err(ScrambleError::NonAscii);
        }
        Ok(Self {
            value: value.as_bytes().to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    pub fn as_str(&self) -> &str {
        // Only ASCII ever gets in, so this cannot fail.
        std::str::from_utf8(&self.value).unwrap_or_default()
    }

    pub fn into_string(self) -> String {
        String::from_utf8(self.value).unwrap_or_default()
    }

    pub fn check_index(&self, index: usize) -> Result<(), ScrambleError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(ScrambleError::IndexOutOfRange {
                index,
                length: self.len(),
            })
        }
    }

    /// First position holding `letter`, scanning left to right.
    pub fn position_of(&self, letter: u8) -> Option<usize> {
        self.value.iter().position(|&b| b == letter)
    }

    /// Last position holding `letter`.
    pub fn last_position_of(&self, letter: u8) -> Option<usize> {
        self.value.iter().rposition(|&b| b == letter)
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.value.swap(i, j);
        }
    }

    /// Circularly shift every character by `steps` (taken modulo the length).
    pub fn rotate(&mut self, direction: Direction, steps: usize) {
        if self.value.is_empty() {
            return;
        }
        let steps = steps % self.value.len();
        match direction {
            Direction::Left => self.value.rotate_left(steps),
            Direction::Right => self.value.rotate_right(steps),
        }
    }

    /// Reverse the inclusive range between two positions, in either order.
    pub fn reverse(&mut self, from: usize, to: usize) {
        let (start, end) = if from <= to { (from, to) } else { (to, from) };
        self.value[start..=end].reverse();
    }

    /// Remove the character at `from` and reinsert it at `to`.
    pub fn move_position(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let letter = self.value.remove(from);
        self.value.insert(to, letter);
    }
}

impl FromStr for Password {
    type Err = ScrambleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<[u8]> for Password {
    fn as_ref(&self) -> &[u8] {
        &self.value
    }
}
