use std::fmt;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use url::Url;

use crate::defaults::DEFAULT_PORT;

/// Declarative address of a gpsd daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketEndpoint {
    /// Unix domain socket endpoint, usually `/var/run/gpsd.sock`.
    Unix {
        /// Filesystem path of the control socket.
        path: Utf8PathBuf,
    },
    /// TCP socket endpoint.
    Tcp {
        /// Host name or IP literal, without IPv6 brackets.
        host: String,
        /// TCP port.
        port: u16,
    },
}

impl SocketEndpoint {
    /// Builds a Unix domain socket endpoint.
    #[must_use]
    pub fn unix(path: impl Into<Utf8PathBuf>) -> Self {
        Self::Unix { path: path.into() }
    }

    /// Builds a TCP socket endpoint.
    #[must_use]
    pub fn tcp(host: impl Into<String>, port: u16) -> Self {
        Self::Tcp {
            host: host.into(),
            port,
        }
    }

    /// Returns the Unix socket path when the endpoint uses the Unix transport.
    #[must_use]
    pub fn unix_path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Unix { path } => Some(path.as_ref()),
            Self::Tcp { .. } => None,
        }
    }
}

impl fmt::Display for SocketEndpoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unix { path } => write!(formatter, "unix://{path}"),
            Self::Tcp { host, port } if host.contains(':') => {
                write!(formatter, "tcp://[{host}]:{port}")
            }
            Self::Tcp { host, port } => write!(formatter, "tcp://{host}:{port}"),
        }
    }
}

impl FromStr for SocketEndpoint {
    type Err = SocketParseError;

    /// Parses `tcp://host[:port]`, `unix:///path`, a bare `host[:port]`, or a
    /// bare absolute socket path. Missing ports fall back to the gpsd port.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.starts_with('/') {
            return Ok(Self::unix(trimmed));
        }
        if !trimmed.contains("://") {
            return parse_bare_address(trimmed);
        }

        let url = Url::parse(trimmed)?;
        match url.scheme() {
            "unix" => {
                let path = url.path();
                if path.is_empty() || path == "/" {
                    return Err(SocketParseError::MissingUnixPath(input.to_owned()));
                }
                Ok(Self::unix(path))
            }
            "tcp" => {
                let host = url
                    .host_str()
                    .filter(|host| !host.is_empty())
                    .ok_or_else(|| SocketParseError::MissingHost(input.to_owned()))?;
                Ok(Self::tcp(strip_brackets(host), url.port().unwrap_or(DEFAULT_PORT)))
            }
            other => Err(SocketParseError::UnsupportedScheme(other.to_owned())),
        }
    }
}

fn parse_bare_address(input: &str) -> Result<SocketEndpoint, SocketParseError> {
    if input.is_empty() {
        return Err(SocketParseError::MissingHost(input.to_owned()));
    }

    // A bare IPv6 literal without brackets carries no port.
    let split = if input.matches(':').count() > 1 && !input.starts_with('[') {
        None
    } else {
        input.rsplit_once(':')
    };

    let Some((host, port_text)) = split else {
        return Ok(SocketEndpoint::tcp(strip_brackets(input), DEFAULT_PORT));
    };
    if host.is_empty() {
        return Err(SocketParseError::MissingHost(input.to_owned()));
    }
    let port = port_text
        .parse::<u16>()
        .map_err(|_| SocketParseError::InvalidPort(input.to_owned()))?;
    Ok(SocketEndpoint::tcp(strip_brackets(host), port))
}

fn strip_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(host)
}

/// Errors encountered while parsing a [`SocketEndpoint`] from text.
#[derive(Debug, Error)]
pub enum SocketParseError {
    /// Scheme was not recognised.
    #[error("unsupported socket scheme '{0}'")]
    UnsupportedScheme(String),
    /// TCP host name was missing.
    #[error("missing TCP host in '{0}'")]
    MissingHost(String),
    /// TCP port was not a number in range.
    #[error("invalid TCP port in '{0}'")]
    InvalidPort(String),
    /// Unix socket path was absent.
    #[error("missing Unix socket path in '{0}'")]
    MissingUnixPath(String),
    /// URL failed to parse.
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
