//! Error types surfaced by sessions and the record decoder.
//!
//! Only connection establishment and session misuse reach the caller as
//! [`SessionError`]. [`DecodeError`] values stay inside the stream loop,
//! which drops the offending line and keeps reading.

use std::io;
use std::sync::Arc;

use gpsd_config::SocketParseError;
use thiserror::Error;

/// Errors returned by [`Session`](crate::Session) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The address text could not be parsed into an endpoint.
    #[error("invalid gpsd address: {0}")]
    Parse(#[from] SocketParseError),
    /// Host name resolution failed or produced no usable address.
    #[error("failed to resolve gpsd address {endpoint}: {source}")]
    Resolve {
        /// Endpoint being resolved.
        endpoint: String,
        /// Underlying resolver error.
        #[source]
        source: Arc<io::Error>,
    },
    /// The transport could not be opened.
    #[error("failed to connect to gpsd at {endpoint}: {source}")]
    Connect {
        /// Endpoint being dialled.
        endpoint: String,
        /// Underlying socket error.
        #[source]
        source: Arc<io::Error>,
    },
    /// Unix endpoints were requested on a platform without them.
    #[cfg(not(unix))]
    #[error("platform does not support Unix sockets: {0}")]
    UnsupportedUnixTransport(String),
    /// `close` was called after the transport was already released.
    #[error("gpsd socket is already closed")]
    AlreadyClosed,
    /// `watch` was called a second time on the same session.
    #[error("session is already watching the report stream")]
    AlreadyWatching,
    /// A read handle for the stream loop could not be created.
    #[error("failed to clone gpsd stream for reading: {0}")]
    CloneStream(#[source] Arc<io::Error>),
    /// A control command could not be written.
    #[error("failed to send command to gpsd: {0}")]
    SendCommand(#[source] Arc<io::Error>),
    /// A control payload could not be serialised.
    #[error("failed to serialise gpsd command: {0}")]
    SerialiseCommand(#[source] Arc<serde_json::Error>),
    /// The stream loop thread could not be started.
    #[error("failed to spawn gpsd stream loop: {0}")]
    SpawnStreamLoop(#[source] Arc<io::Error>),
    /// Shutting the transport down failed.
    #[error("failed to close gpsd socket: {0}")]
    Close(#[source] Arc<io::Error>),
}

/// Errors raised while decoding a single line of the report stream.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The line is not a JSON object with a string `class` member.
    #[error("malformed report line: {0}")]
    Peek(#[source] serde_json::Error),
    /// The class has no schema in the catalogue.
    #[error("unrecognized report class '{0}'")]
    UnrecognizedClass(String),
    /// The line did not match the schema of its class.
    #[error("failed to decode {class} report: {source}")]
    Schema {
        /// Class tag read from the line.
        class: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}
