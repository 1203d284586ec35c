//! Shared plumbing for the `fx25-cli` binaries: the hex-dump text format
//! they all read and write, and a common argument-parsing entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use fx25_core::error::FxError;

pub mod hexdump;

/// Parse this binary's CLI arguments, mapping failure onto the crate's own
/// exit-1-on-argument-failure contract instead of clap's default (which
/// prints usage and exits with its own code, bypassing `main`'s `ExitCode`
/// entirely).
///
/// `--help`/`--version` still print and return success, matching ordinary
/// clap UX; any other parse failure is wrapped in [`FxError::InvalidArgument`]
/// and reported on stderr.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{e}");
            ExitCode::SUCCESS
        }
        _ => {
            let err = FxError::InvalidArgument(e.to_string());
            eprint!("{err}");
            ExitCode::FAILURE
        }
    })
}
