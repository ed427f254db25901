//! Pulse-per-second and clock offset reports.

use serde::{Deserialize, Serialize};

/// Offset between the GPS time and the system clock (`TOFF`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Toff {
    /// Name of the originating device.
    #[serde(default)]
    pub device: String,
    /// Seconds from the GPS clock.
    #[serde(default)]
    pub real_sec: i64,
    /// Nanoseconds from the GPS clock.
    #[serde(default)]
    pub real_nsec: i64,
    /// Seconds from the system clock.
    #[serde(default)]
    pub clock_sec: i64,
    /// Nanoseconds from the system clock.
    #[serde(default)]
    pub clock_nsec: i64,
}

/// Pulse-per-second timing edge (`PPS`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Pps {
    /// Name of the originating device.
    #[serde(default)]
    pub device: String,
    /// Seconds from the GPS clock.
    #[serde(default)]
    pub real_sec: i64,
    /// Nanoseconds from the GPS clock.
    #[serde(default)]
    pub real_nsec: i64,
    /// Seconds from the system clock.
    #[serde(default)]
    pub clock_sec: i64,
    /// Nanoseconds from the system clock.
    #[serde(default)]
    pub clock_nsec: i64,
    /// NTP-style precision estimate, log2 seconds.
    #[serde(default)]
    pub precision: i32,
    /// Shared memory key of this PPS source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shm: Option<String>,
    /// Quantisation error of the PPS, picoseconds.
    #[serde(rename = "qErr", skip_serializing_if = "Option::is_none")]
    pub q_err: Option<i64>,
}

/// Disciplined oscillator status (`OSC`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Osc {
    /// Name of the originating device.
    #[serde(default)]
    pub device: String,
    /// Whether the oscillator is running.
    #[serde(default)]
    pub running: bool,
    /// Whether the oscillator receives a GPS PPS signal.
    #[serde(default)]
    pub reference: bool,
    /// Whether the GPS PPS signal disciplines the local oscillator.
    #[serde(default)]
    pub disciplined: bool,
    /// Offset between PPS output and the latest GPS PPS input, nanoseconds.
    #[serde(default)]
    pub delta: i64,
}
