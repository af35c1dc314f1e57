pub mod args;
pub mod types;

pub use args::{Cli, Commands, ProgramArgs};
pub use types::{OutputFormat, PreviewArg};
