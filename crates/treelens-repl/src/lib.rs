//! Interactive prompt for exploring belief-state search trees.

pub mod commands;
pub mod repl;
pub mod synthetic;

pub use commands::{Command, CommandError, HELP, KeyArg, execute, parse};
pub use repl::{Outcome, Repl, ReplError, Session, inspect};
pub use synthetic::{SyntheticTreeConfig, generate};
