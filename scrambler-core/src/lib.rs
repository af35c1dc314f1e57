#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod operation;
pub mod operations;
pub mod output;
pub mod parser;
pub mod password;
pub mod preview;
pub mod program;

pub use config::Config;
pub use error::ScrambleError;
pub use operation::{forward_steps, Operation, RotationTable};
pub use operations::{
    check_operation, list_operation, load_program, scramble_operation, unscramble_operation,
};
pub use output::{
    CheckResult, ListResult, ListedOperation, OutputFormat, OutputFormatter, ScrambleResult,
    VersionResult,
};
pub use parser::{parse_operation, parse_program};
pub use password::{Direction, Password};
pub use preview::{render_trace, Preview};
pub use program::{Mode, Program, RoundTrip, Trace, TraceStep};
