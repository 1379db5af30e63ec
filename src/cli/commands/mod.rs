//! CLI command implementations.

use std::fmt::Display;
use std::process;

pub trait Command {
    fn execute(self);
}

pub mod compare;
pub mod moves;
pub mod search;

/// Reports a failed command and exits with a non-zero status.
pub(crate) fn exit_with_error(err: impl Display) -> ! {
    eprintln!("error: {}", err);
    process::exit(1);
}
