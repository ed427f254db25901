//! Device inventory reports.

use serde::{Deserialize, Serialize};

/// Inventory of devices the daemon is managing (`DEVICES`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Devices {
    /// Devices known to the daemon.
    #[serde(default)]
    pub devices: Vec<Device>,
    /// URL of the remote daemon, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

/// A single receiver (`DEVICE`), alone or inside [`Devices`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Device {
    /// Device path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Time the device was activated; absent when inactive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<String>,
    /// Bit vector of seen packet types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u32>,
    /// gpsd driver name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    /// Firmware or hardware version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Additional version information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype1: Option<String>,
    /// Hardware serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sernum: Option<String>,
    /// Data to send to the receiver, hexadecimal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hexdata: Option<String>,
    /// 0 for NMEA mode, 1 for the driver's binary mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<u32>,
    /// Line speed in bits per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bps: Option<u32>,
    /// Parity: `N`, `O` or `E`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parity: Option<String>,
    /// Stop bits, 1 or 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stopbits: Option<u32>,
    /// Cycle time, seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<f64>,
    /// Minimum cycle time, seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mincycle: Option<f64>,
    /// Whether the device is read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readonly: Option<bool>,
}
