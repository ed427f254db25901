use std::time::Duration;

use crate::socket::SocketEndpoint;

/// Host gpsd listens on when no address is supplied.
pub const DEFAULT_HOST: &str = "localhost";

/// TCP port registered for gpsd.
pub const DEFAULT_PORT: u16 = 2947;

/// Address form accepted by `Session::dial` for a local daemon.
pub const DEFAULT_ADDRESS: &str = "localhost:2947";

/// Connection timeout applied when none is configured, in milliseconds.
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 5_000;

/// Connection timeout applied when none is configured. Sessions also use it
/// to bound the greeting read.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS);

/// Default log filter expression used by the binaries.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Endpoint of a daemon running on the local host.
#[must_use]
pub fn default_endpoint() -> SocketEndpoint {
    SocketEndpoint::tcp(DEFAULT_HOST, DEFAULT_PORT)
}
