//! CLI entrypoint for `gpsd-watch`.
//!
//! The binary delegates to [`gpsd_watch::run`], which parses arguments,
//! dials the daemon and streams reports to stdout.

use std::io::{self, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    // Left unlocked: the stream loop thread logs to stderr too.
    let mut stderr = io::stderr();
    gpsd_watch::run(std::env::args_os(), &mut stdout, &mut stderr)
}
