//! CLI domain: parse, route, and output only.
//! No domain orchestration; a single route table maps commands to dispatcher operations.

mod output;
mod parse;
mod route;

pub use output::{map_error, CommandOutput};
pub use parse::{Cli, Commands};
pub use route::RunContext;
