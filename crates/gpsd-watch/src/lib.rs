//! Command-line runtime for `gpsd-watch`.
//!
//! The binary dials a gpsd daemon, registers a filter for every selected
//! report class and prints each report it receives as one JSON line on
//! stdout. Filters run on the session's stream loop thread, so reports are
//! handed to the caller's thread over a channel and written there. Watching
//! ends when the daemon closes the stream or, with `--duration-secs`, when
//! the deadline passes and the session is closed.

mod cli;
mod errors;
pub mod telemetry;

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use clap::Parser;
use gpsd_session::{Completion, Report, Session, StreamEnd};
use tracing::{info, trace, warn};

use crate::cli::Cli;
use crate::errors::AppError;

const CLI_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::cli");

/// Longest pause between completion checks while no report arrives.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How long the stream loop gets to observe a local close.
const CLOSE_GRACE: Duration = Duration::from_secs(2);

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, T, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) if error.use_stderr() => {
            let _ = write!(stderr, "{}", error.render());
            return ExitCode::FAILURE;
        }
        Err(error) => {
            // `--help` and `--version` render to stdout and succeed.
            let _ = write!(stdout, "{}", error.render());
            return ExitCode::SUCCESS;
        }
    };

    match watch(&cli, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

enum Pumped {
    Ended(StreamEnd),
    DeadlineReached,
}

fn watch<W: Write>(cli: &Cli, stdout: &mut W) -> Result<(), AppError> {
    let config = &cli.config;
    telemetry::initialise(config)?;

    let session = Session::connect(config.endpoint(), Some(config.connect_timeout()))?;
    info!(target: CLI_TARGET, endpoint = %config.endpoint(), "connected to gpsd");

    let (sender, reports) = mpsc::channel();
    for class in &cli.classes {
        let forwarder = sender.clone();
        session.add_filter(class.as_str(), move |report: &Report| forward(report, &forwarder));
    }
    drop(sender);

    let mut completion = session.watch()?;
    let deadline = cli.duration().map(|duration| Instant::now() + duration);
    let end = match pump(&reports, &mut completion, deadline, stdout)? {
        Pumped::Ended(end) => end,
        Pumped::DeadlineReached => {
            info!(target: CLI_TARGET, "watch deadline reached, closing session");
            session.close()?;
            completion
                .wait_timeout(CLOSE_GRACE)
                .unwrap_or(StreamEnd::EndOfStream)
        }
    };
    for line in reports.try_iter() {
        write_report(stdout, &line)?;
    }

    match end {
        StreamEnd::Panicked => Err(AppError::StreamPanicked),
        StreamEnd::EndOfStream => {
            info!(target: CLI_TARGET, "gpsd stream ended");
            Ok(())
        }
        cause => {
            warn!(target: CLI_TARGET, ?cause, "gpsd stream stopped");
            Ok(())
        }
    }
}

/// Writes reports as they arrive until the loop stops or the deadline passes.
fn pump<W: Write>(
    reports: &Receiver<String>,
    completion: &mut Completion,
    deadline: Option<Instant>,
    stdout: &mut W,
) -> Result<Pumped, AppError> {
    loop {
        let wait = deadline.map_or(POLL_INTERVAL, |until| {
            until
                .saturating_duration_since(Instant::now())
                .min(POLL_INTERVAL)
        });
        match reports.recv_timeout(wait) {
            Ok(line) => write_report(stdout, &line)?,
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {}
        }

        if let Some(end) = completion.try_wait() {
            return Ok(Pumped::Ended(end));
        }
        if deadline.is_some_and(|until| Instant::now() >= until) {
            return Ok(Pumped::DeadlineReached);
        }
    }
}

fn forward(report: &Report, sender: &Sender<String>) {
    match serde_json::to_string(report) {
        Ok(line) => {
            if sender.send(line).is_err() {
                trace!(target: CLI_TARGET, "report receiver gone");
            }
        }
        Err(error) => {
            warn!(target: CLI_TARGET, class = %report.class(), %error, "failed to encode report");
        }
    }
}

fn write_report<W: Write>(stdout: &mut W, line: &str) -> Result<(), AppError> {
    writeln!(stdout, "{line}")
        .and_then(|()| stdout.flush())
        .map_err(AppError::WriteReport)
}
