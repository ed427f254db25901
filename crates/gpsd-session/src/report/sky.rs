//! Satellite visibility reports.

use serde::{Deserialize, Serialize};

/// Satellite sky view and dilution of precision (`SKY`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Sky {
    /// Name of the originating device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Time stamp, ISO 8601 UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Number of satellite records.
    #[serde(rename = "nSat", skip_serializing_if = "Option::is_none")]
    pub n_sat: Option<u32>,
    /// Number of satellites used in the navigation solution.
    #[serde(rename = "uSat", skip_serializing_if = "Option::is_none")]
    pub u_sat: Option<u32>,
    /// Geometric dilution of precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gdop: Option<f64>,
    /// Horizontal dilution of precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdop: Option<f64>,
    /// Position dilution of precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdop: Option<f64>,
    /// Time dilution of precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdop: Option<f64>,
    /// Vertical dilution of precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vdop: Option<f64>,
    /// Longitudinal dilution of precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xdop: Option<f64>,
    /// Latitudinal dilution of precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ydop: Option<f64>,
    /// Pseudorange, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr: Option<f64>,
    /// Pseudorange rate of change, metres per second.
    #[serde(rename = "prRate", skip_serializing_if = "Option::is_none")]
    pub pr_rate: Option<f64>,
    /// Pseudorange residue, metres.
    #[serde(rename = "prRes", skip_serializing_if = "Option::is_none")]
    pub pr_res: Option<f64>,
    /// Quality indicator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qual: Option<u32>,
    /// Satellites in view.
    #[serde(default)]
    pub satellites: Vec<Satellite>,
}

/// One satellite in a [`Sky`] report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Satellite {
    /// PRN id of the satellite.
    #[serde(rename = "PRN", default)]
    pub prn: i32,
    /// Azimuth, degrees from true north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub az: Option<f64>,
    /// Elevation, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub el: Option<f64>,
    /// Signal to noise ratio, dBHz.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ss: Option<f64>,
    /// Whether the satellite is used in the current solution.
    #[serde(default)]
    pub used: bool,
    /// GNSS constellation id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gnssid: Option<u32>,
    /// Satellite id within its constellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svid: Option<u32>,
    /// Signal id of this signal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sigid: Option<u32>,
    /// GLONASS frequency id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freqid: Option<i32>,
    /// Satellite health (0 unknown, 1 OK, 2 unhealthy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<u32>,
}
