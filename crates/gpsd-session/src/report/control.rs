//! Daemon control responses: greeting, watch state, poll results, errors.

use serde::{Deserialize, Serialize};

use super::{Sky, Tpv};

/// Daemon greeting and `?VERSION` response (`VERSION`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Version {
    /// Public release level of the daemon.
    #[serde(default)]
    pub release: String,
    /// Internal revision id.
    #[serde(default)]
    pub rev: String,
    /// API major revision.
    #[serde(default)]
    pub proto_major: u32,
    /// API minor revision.
    #[serde(default)]
    pub proto_minor: u32,
    /// URL of the remote daemon, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

/// Current watcher policy (`WATCH`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Watch {
    /// Whether watcher mode is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Whether JSON reports are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    /// Whether pseudo-NMEA dumping is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nmea: Option<bool>,
    /// Raw mode: 1 hex dump, 2 verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<u32>,
    /// Whether scaling divisors are applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaled: Option<bool>,
    /// Whether AIS type 24 parts are aggregated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split24: Option<bool>,
    /// Whether `TOFF` and `PPS` reports are emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pps: Option<bool>,
    /// Only the named device is watched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// URL of the remote daemon, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
    /// Developer timing information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<bool>,
}

/// Snapshot returned by `?POLL` (`POLL`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Poll {
    /// Time stamp, ISO 8601 UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Count of active devices.
    #[serde(default)]
    pub active: u32,
    /// Latest fix from each active device.
    #[serde(default)]
    pub tpv: Vec<Tpv>,
    /// Latest sky view from each active device.
    #[serde(default)]
    pub sky: Vec<Sky>,
}

/// Error notice sent in reply to a bad command (`ERROR`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ErrorReport {
    /// Textual error message.
    #[serde(default)]
    pub message: String,
}
