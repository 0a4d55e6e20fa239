//! CLI command handlers.

mod browsers;
mod check;
mod links;

pub use browsers::run_browsers;
pub use check::run_check;
pub use links::{run_changeset, run_diff, run_file};
