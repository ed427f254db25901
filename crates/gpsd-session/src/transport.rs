//! Socket transport helpers for gpsd sessions.
//!
//! The functions here establish connections to daemon sockets and wrap the
//! resulting streams in a uniform [`Connection`] type so that the session
//! logic can remain transport agnostic.

use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::time::Duration;

use gpsd_config::SocketEndpoint;

#[cfg(unix)]
use std::os::fd::OwnedFd;
#[cfg(unix)]
use std::os::unix::net::UnixStream;

#[cfg(unix)]
use socket2::{Domain, SockAddr, Socket, Type};

use crate::SessionError;

/// A bidirectional byte stream to the daemon.
#[derive(Debug)]
pub enum Connection {
    /// TCP stream.
    Tcp(TcpStream),
    /// Unix domain stream.
    #[cfg(unix)]
    Unix(UnixStream),
}

impl Connection {
    /// Creates an independent handle to the same socket.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the descriptor cannot be duplicated.
    pub fn try_clone(&self) -> io::Result<Self> {
        match self {
            Self::Tcp(stream) => stream.try_clone().map(Self::Tcp),
            #[cfg(unix)]
            Self::Unix(stream) => stream.try_clone().map(Self::Unix),
        }
    }

    /// Shuts down both directions, failing any read blocked on a clone.
    ///
    /// # Errors
    ///
    /// Returns the OS error, e.g. `NotConnected` after the peer hung up.
    pub fn shutdown(&self) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.shutdown(Shutdown::Both),
            #[cfg(unix)]
            Self::Unix(stream) => stream.shutdown(Shutdown::Both),
        }
    }

    /// Bounds blocking reads; `None` blocks indefinitely.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the option cannot be applied.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.set_read_timeout(timeout),
            #[cfg(unix)]
            Self::Unix(stream) => stream.set_read_timeout(timeout),
        }
    }
}

/// Sockets whose blocking reads can be bounded.
pub(crate) trait ReadTimeout {
    /// Applies `timeout` to subsequent reads; `None` blocks indefinitely.
    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()>;
}

impl ReadTimeout for Connection {
    fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        Self::set_read_timeout(self, timeout)
    }
}

impl Read for Connection {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.read(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.read(buf),
        }
    }
}

impl Write for Connection {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Tcp(stream) => stream.write(buf),
            #[cfg(unix)]
            Self::Unix(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Tcp(stream) => stream.flush(),
            #[cfg(unix)]
            Self::Unix(stream) => stream.flush(),
        }
    }
}

/// Opens a connection to `endpoint`, bounded by `timeout` when given.
///
/// No retries are attempted.
pub(crate) fn connect(
    endpoint: &SocketEndpoint,
    timeout: Option<Duration>,
) -> Result<Connection, SessionError> {
    match endpoint {
        SocketEndpoint::Tcp { host, port } => {
            let address = resolve_tcp_address(host, *port).map_err(|error| {
                SessionError::Resolve {
                    endpoint: endpoint.to_string(),
                    source: Arc::new(error),
                }
            })?;

            let stream = match timeout {
                Some(limit) => TcpStream::connect_timeout(&address, limit),
                None => TcpStream::connect(address),
            };
            stream.map(Connection::Tcp).map_err(|source| SessionError::Connect {
                endpoint: endpoint.to_string(),
                source: Arc::new(source),
            })
        }
        SocketEndpoint::Unix { path } => {
            #[cfg(unix)]
            {
                connect_unix(path.as_str(), timeout).map_err(|source| SessionError::Connect {
                    endpoint: endpoint.to_string(),
                    source: Arc::new(source),
                })
            }

            #[cfg(not(unix))]
            {
                let _ = (path, timeout);
                Err(SessionError::UnsupportedUnixTransport(endpoint.to_string()))
            }
        }
    }
}

fn resolve_tcp_address(host: &str, port: u16) -> io::Result<SocketAddr> {
    let resolved: Vec<SocketAddr> = (host, port).to_socket_addrs()?.collect();
    // gpsd listens on 127.0.0.1 by default, so IPv4 results win when present.
    resolved
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| resolved.first())
        .copied()
        .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "no resolved addresses"))
}

#[cfg(unix)]
fn connect_unix(path: &str, timeout: Option<Duration>) -> io::Result<Connection> {
    let stream = match timeout {
        Some(limit) => {
            let socket = Socket::new(Domain::UNIX, Type::STREAM, None)?;
            let address = SockAddr::unix(path)?;
            socket.connect_timeout(&address, limit)?;
            UnixStream::from(OwnedFd::from(socket))
        }
        None => UnixStream::connect(path)?,
    };
    Ok(Connection::Unix(stream))
}
