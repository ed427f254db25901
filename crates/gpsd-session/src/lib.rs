//! Streaming client sessions for the gpsd JSON protocol.
//!
//! gpsd speaks newline-delimited JSON: every line is an object whose `class`
//! member names its schema. A [`Session`] holds one connection to the
//! daemon, enables watcher mode, and runs a background stream loop that
//! decodes each line and hands it to the filters registered for its class.
//!
//! # Architecture
//!
//! Two threads touch a session. The caller's thread dials, registers
//! filters, sends commands and closes; the stream loop thread started by
//! [`Session::watch`] owns the read half of the transport exclusively. The
//! [`FilterRegistry`] is the only structure both sides share. The loop
//! peeks the class tag of every line and only performs the full decode
//! when a filter is waiting for that class. When the loop stops, for any
//! reason, the [`Completion`] returned by `watch` yields exactly one
//! [`StreamEnd`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use gpsd_session::{Report, Session};
//!
//! # fn main() -> Result<(), gpsd_session::SessionError> {
//! let session = Session::dial_timeout("localhost:2947", Duration::from_secs(2))?;
//! session.add_filter("SKY", |report: &Report| {
//!     if let Report::Sky(sky) = report {
//!         println!("{} satellites visible", sky.satellites.len());
//!     }
//! });
//!
//! let mut completion = session.watch()?;
//! if completion.wait_timeout(Duration::from_secs(10)).is_none() {
//!     session.close()?;
//! }
//! # Ok(())
//! # }
//! ```

mod completion;
mod decoder;
mod error;
mod registry;
pub mod report;
mod session;
mod stream;
mod transport;

#[cfg(test)]
mod tests;

pub use gpsd_config::SocketEndpoint;

pub use self::completion::{Completion, StreamEnd};
pub use self::decoder::{JsonDecoder, RecordDecoder};
pub use self::error::{DecodeError, SessionError};
pub use self::registry::{Filter, FilterRegistry, FilterSet};
pub use self::report::{
    Att, ClassReport, Device, Devices, ErrorReport, Gst, InvalidMode, Mode, Osc, Poll, Pps, Report,
    ReportClass, Satellite, Sky, Toff, Tpv, Version, Watch,
};
pub use self::session::Session;
pub use self::stream::MAX_LINE_BYTES;
pub use self::transport::Connection;

pub(crate) const SESSION_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::session");
pub(crate) const STREAM_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::stream");
