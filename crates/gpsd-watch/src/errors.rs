//! Error types for the CLI runtime.

use std::io;

use gpsd_session::SessionError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to write report: {0}")]
    WriteReport(io::Error),
    #[error("the stream loop panicked")]
    StreamPanicked,
}
