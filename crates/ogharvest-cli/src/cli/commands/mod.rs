//! CLI command handlers.

mod extract;
mod run;

pub use extract::run_extract;
pub use run::run_harvest;
