//! Connection lifecycle for a single gpsd client session.
//!
//! A [`Session`] owns one transport and one [`FilterRegistry`]. The caller's
//! thread registers filters, sends commands and eventually closes the
//! session; [`Session::watch`] hands the read half of the transport to the
//! stream loop, which is the only reader from then on.

use std::fmt;
use std::io::{self, BufReader, Read, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use gpsd_config::{DEFAULT_CONNECT_TIMEOUT, SocketEndpoint};
use tracing::{debug, warn};

use crate::completion::Completion;
use crate::decoder::{JsonDecoder, RecordDecoder};
use crate::error::SessionError;
use crate::registry::FilterRegistry;
use crate::report::{ClassReport, Report, ReportClass, Watch};
use crate::stream::{self, LineRead, READ_BUFFER_SIZE};
use crate::transport::{self, Connection, ReadTimeout};
use crate::SESSION_TARGET;

/// A client session with a gpsd daemon.
///
/// # Example
///
/// ```no_run
/// use gpsd_session::{Session, Tpv};
///
/// # fn main() -> Result<(), gpsd_session::SessionError> {
/// let session = Session::dial("localhost:2947")?;
/// session.on(|tpv: &Tpv| println!("fix mode {:?}", tpv.mode));
/// let completion = session.watch()?;
/// let cause = completion.wait();
/// println!("stream stopped: {cause:?}");
/// # Ok(())
/// # }
/// ```
pub struct Session<D: RecordDecoder = JsonDecoder> {
    writer: Mutex<Option<Connection>>,
    reader: Mutex<Option<BufReader<Connection>>>,
    registry: Arc<FilterRegistry>,
    decoder: Arc<D>,
}

impl Session<JsonDecoder> {
    /// Connects to `address`, blocking until the OS gives up.
    ///
    /// `address` is `host:port`, `tcp://host:port` or `unix:///path`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Parse`] for malformed addresses and
    /// [`SessionError::Connect`] when the daemon cannot be reached.
    pub fn dial(address: &str) -> Result<Self, SessionError> {
        Self::connect(&address.parse::<SocketEndpoint>()?, None)
    }

    /// Connects to `address`, giving up after `timeout`.
    ///
    /// # Errors
    ///
    /// As for [`Session::dial`].
    pub fn dial_timeout(address: &str, timeout: Duration) -> Result<Self, SessionError> {
        Self::connect(&address.parse::<SocketEndpoint>()?, Some(timeout))
    }

    /// Connects to an already parsed endpoint.
    ///
    /// The greeting line is consumed before returning, waiting at most
    /// `timeout` (or the default connect timeout) for it to arrive.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Resolve`] or [`SessionError::Connect`] when
    /// the transport cannot be opened. No retries are attempted.
    pub fn connect(
        endpoint: &SocketEndpoint,
        timeout: Option<Duration>,
    ) -> Result<Self, SessionError> {
        debug!(target: SESSION_TARGET, %endpoint, ?timeout, "dialling gpsd");
        let connection = transport::connect(endpoint, timeout)?;
        Self::establish(
            connection,
            JsonDecoder,
            timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
        )
    }
}

impl<D: RecordDecoder> Session<D> {
    /// Builds a session over an open connection using a custom decoder.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CloneStream`] when the read half cannot be
    /// split off the connection.
    pub fn with_decoder(connection: Connection, decoder: D) -> Result<Self, SessionError> {
        Self::establish(connection, decoder, DEFAULT_CONNECT_TIMEOUT)
    }

    fn establish(
        connection: Connection,
        decoder: D,
        greeting_timeout: Duration,
    ) -> Result<Self, SessionError> {
        let read_half = connection
            .try_clone()
            .map_err(|error| SessionError::CloneStream(Arc::new(error)))?;
        let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, read_half);
        consume_greeting(&mut reader, &decoder, greeting_timeout);

        Ok(Self {
            writer: Mutex::new(Some(connection)),
            reader: Mutex::new(Some(reader)),
            registry: Arc::new(FilterRegistry::new()),
            decoder: Arc::new(decoder),
        })
    }

    /// Sends a raw command framed as `?command;`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyClosed`] after [`Session::close`] and
    /// [`SessionError::SendCommand`] when the write fails.
    pub fn send_command(&self, command: &str) -> Result<(), SessionError> {
        self.write_frame(&format!("?{command};"))
    }

    /// Registers `handler` for reports tagged `tag`.
    ///
    /// Handlers run on the stream loop thread in registration order and
    /// receive the fully decoded [`Report`]. Tags outside [`ReportClass`]
    /// are accepted but never dispatched.
    pub fn add_filter<F>(&self, tag: &str, handler: F)
    where
        F: Fn(&Report) + Send + Sync + 'static,
    {
        self.registry.add(tag, handler);
    }

    /// Registers `handler` for the concrete report type `R`.
    pub fn on<R, F>(&self, handler: F)
    where
        R: ClassReport,
        F: Fn(&R) + Send + Sync + 'static,
    {
        self.registry.add(R::CLASS.as_str(), move |report: &Report| {
            if let Some(narrowed) = R::from_report(report) {
                handler(narrowed);
            }
        });
    }

    /// The registry backing [`Session::add_filter`].
    #[must_use]
    pub fn filters(&self) -> &FilterRegistry {
        &self.registry
    }

    /// Enables JSON watcher mode and starts the stream loop.
    ///
    /// The enable command is best effort: a failed write is logged and the
    /// loop still starts, ending as soon as the transport reports the error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyClosed`] after [`Session::close`],
    /// [`SessionError::AlreadyWatching`] on a second call, and
    /// [`SessionError::SpawnStreamLoop`] when the loop thread cannot start.
    pub fn watch(&self) -> Result<Completion, SessionError> {
        if self.lock_writer().is_none() {
            return Err(SessionError::AlreadyClosed);
        }
        let reader = self.lock_reader().take().ok_or(SessionError::AlreadyWatching)?;

        let enable = watch_enable_frame()?;
        if let Err(error) = self.write_frame(&enable) {
            warn!(target: SESSION_TARGET, error = %error, "failed to enable watcher mode");
        }

        debug!(target: SESSION_TARGET, "starting stream loop");
        stream::spawn(reader, Arc::clone(&self.registry), Arc::clone(&self.decoder))
            .map_err(|error| SessionError::SpawnStreamLoop(Arc::new(error)))
    }

    /// Closes the transport.
    ///
    /// Does not wait for the stream loop; its pending read fails and the
    /// loop signals completion on its own thread.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyClosed`] when called twice and
    /// [`SessionError::Close`] when the socket cannot be shut down.
    pub fn close(&self) -> Result<(), SessionError> {
        let connection = self.lock_writer().take().ok_or(SessionError::AlreadyClosed)?;
        drop(self.lock_reader().take());
        debug!(target: SESSION_TARGET, "closing gpsd session");
        shutdown(&connection)
    }

    /// Returns `true` once [`Session::close`] has succeeded or failed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lock_writer().is_none()
    }

    fn write_frame(&self, frame: &str) -> Result<(), SessionError> {
        let mut writer = self.lock_writer();
        let connection = writer.as_mut().ok_or(SessionError::AlreadyClosed)?;
        connection
            .write_all(frame.as_bytes())
            .and_then(|()| connection.flush())
            .map_err(|error| SessionError::SendCommand(Arc::new(error)))
    }

    fn lock_writer(&self) -> MutexGuard<'_, Option<Connection>> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_reader(&self) -> MutexGuard<'_, Option<BufReader<Connection>>> {
        self.reader.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<D: RecordDecoder> Drop for Session<D> {
    fn drop(&mut self) {
        let Some(connection) = self
            .writer
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        else {
            return;
        };
        if let Err(error) = shutdown(&connection) {
            debug!(target: SESSION_TARGET, error = %error, "shutdown on drop failed");
        }
    }
}

impl<D: RecordDecoder> fmt::Debug for Session<D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("closed", &self.is_closed())
            .field("watching", &self.lock_reader().is_none())
            .field("filters", &self.registry)
            .finish_non_exhaustive()
    }
}

fn watch_enable_frame() -> Result<String, SessionError> {
    let policy = Watch {
        enable: Some(true),
        json: Some(true),
        ..Watch::default()
    };
    let payload = serde_json::to_string(&policy)
        .map_err(|error| SessionError::SerialiseCommand(Arc::new(error)))?;
    Ok(format!("?WATCH={payload};"))
}

fn shutdown(connection: &Connection) -> Result<(), SessionError> {
    match connection.shutdown() {
        Err(error) if error.kind() != io::ErrorKind::NotConnected => {
            Err(SessionError::Close(Arc::new(error)))
        }
        _ => Ok(()),
    }
}

/// Reads and discards the greeting line, logging it when it is a `VERSION`.
///
/// Every failure here is logged and ignored: a daemon that stays silent or
/// a socket that refuses the timeout leaves the session usable.
fn consume_greeting<S, D>(reader: &mut BufReader<S>, decoder: &D, timeout: Duration)
where
    S: Read + ReadTimeout,
    D: RecordDecoder,
{
    let bounded = match reader.get_ref().set_read_timeout(Some(timeout)) {
        Ok(()) => true,
        Err(error) => {
            debug!(target: SESSION_TARGET, error = %error, "greeting read is unbounded");
            false
        }
    };

    let mut line = Vec::new();
    match stream::read_line(reader, &mut line) {
        Ok(LineRead::Line) => log_greeting(&line, decoder),
        Ok(outcome) => debug!(target: SESSION_TARGET, ?outcome, "no greeting received"),
        Err(error) => debug!(target: SESSION_TARGET, error = %error, "greeting read failed"),
    }

    let cleared = if bounded {
        reader.get_ref().set_read_timeout(None)
    } else {
        Ok(())
    };
    if let Err(error) = cleared {
        debug!(target: SESSION_TARGET, error = %error, "greeting read timeout left in place");
    }
}

fn log_greeting<D: RecordDecoder>(line: &[u8], decoder: &D) {
    let version = ReportClass::Version.as_str();
    let decoded = decoder
        .peek_class(line)
        .ok()
        .filter(|class| class == version)
        .and_then(|class| decoder.decode(&class, line).ok());

    match decoded {
        Some(Report::Version(greeting)) => debug!(
            target: SESSION_TARGET,
            release = %greeting.release,
            proto_major = greeting.proto_major,
            proto_minor = greeting.proto_minor,
            "received gpsd greeting"
        ),
        _ => debug!(target: SESSION_TARGET, "discarded non-VERSION greeting"),
    }
}
