//! Parsing of textual operation descriptions.
//!
//! The accepted grammar is the same one [`Operation`]'s `Display` produces:
//!
//! ```text
//! swap position X with position Y
//! swap letter X with letter Y
//! rotate left|right X step|steps
//! rotate based on position of letter X
//! reverse positions X through Y
//! move position X to position Y
//! ```

use crate::error::ScrambleError;
use crate::operation::Operation;
use crate::password::Direction;
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

static SWAP_POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^swap position (\d+) with position (\d+)$").expect("valid regex")
});
static SWAP_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^swap letter ([!-~]) with letter ([!-~])$").expect("valid regex")
});
static ROTATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^rotate (left|right) (\d+) steps?$").expect("valid regex"));
static ROTATE_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rotate based on position of letter ([!-~])$").expect("valid regex")
});
static REVERSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^reverse positions (\d+) through (\d+)$").expect("valid regex")
});
static MOVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^move position (\d+) to position (\d+)$").expect("valid regex")
});

/// Parse a single operation description. `line` is only used for error reporting.
pub fn parse_operation(line: usize, text: &str) -> Result<Operation, ScrambleError> {
    let trimmed = text.trim();

    let number = |caps: &Captures<'_>, group: usize| -> Result<usize, ScrambleError> {
        caps[group].parse::<usize>().map_err(|_| {
            ScrambleError::parse(
                line,
                text,
                format!("number '{}' is too large", &caps[group]),
            )
        })
    };
    let letter = |caps: &Captures<'_>, group: usize| -> char {
        caps[group].chars().next().unwrap_or_default()
    };

    if let Some(caps) = SWAP_POSITION.captures(trimmed) {
        return Ok(Operation::SwapPosition {
            from: number(&caps, 1)?,
            to: number(&caps, 2)?,
        });
    }

    if let Some(caps) = SWAP_LETTER.captures(trimmed) {
        return Ok(Operation::SwapLetter {
            from: letter(&caps, 1),
            to: letter(&caps, 2),
        });
    }

    if let Some(caps) = ROTATE.captures(trimmed) {
        let direction = if &caps[1] == "left" {
            Direction::Left
        } else {
            Direction::Right
        };
        return Ok(Operation::Rotate {
            direction,
            steps: number(&caps, 2)?,
        });
    }

    if let Some(caps) = ROTATE_LETTER.captures(trimmed) {
        return Ok(Operation::RotateLetter {
            letter: letter(&caps, 1),
        });
    }

    if let Some(caps) = REVERSE.captures(trimmed) {
        return Ok(Operation::Reverse {
            from: number(&caps, 1)?,
            to: number(&caps, 2)?,
        });
    }

    if let Some(caps) = MOVE.captures(trimmed) {
        return Ok(Operation::Move {
            from: number(&caps, 1)?,
            to: number(&caps, 2)?,
        });
    }

    Err(ScrambleError::parse(line, text, "unrecognized operation"))
}

/// Parse one operation per line, skipping blank lines and `#` comments.
pub fn parse_program(text: &str) -> Result<Vec<Operation>, ScrambleError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| parse_operation(index + 1, line))
        .collect()
}

impl FromStr for Operation {
    type Err = ScrambleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_operation(1, s)
    }
}
