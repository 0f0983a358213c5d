//! Command implementations for the ICGEM reader CLI
//!
//! Each command is implemented in its own module:
//! - `inspect`: header, structural bounds and periodic-term periods
//! - `extract`: static coefficients up to a degree/order

pub mod extract;
pub mod inspect;
pub mod shared;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the subcommand handler selected on the command line
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args),
        Commands::Extract(extract_args) => extract::run_extract(extract_args),
    }
}
