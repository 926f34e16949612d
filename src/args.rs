pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;

/// Parses the command line and validates it, exiting with a message when the
/// configuration can't work.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    match args.validate() {
        Ok(clean) => clean,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
