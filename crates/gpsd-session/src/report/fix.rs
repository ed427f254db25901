//! Position, velocity, error-estimate and attitude reports.

use serde::{Deserialize, Serialize};

use super::Mode;

/// Time-position-velocity fix (`TPV`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tpv {
    /// Name of the originating device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// NMEA fix mode.
    #[serde(default)]
    pub mode: Mode,
    /// GPS fix status (0 unknown, 2 DGPS, 3 RTK fixed, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,
    /// Time of the fix, ISO 8601 UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Estimated time stamp error, seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ept: Option<f64>,
    /// Latitude in degrees, positive north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude in degrees, positive east.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Deprecated altitude, metres. Prefer `alt_hae` or `alt_msl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
    /// Altitude above the WGS84 ellipsoid, metres.
    #[serde(rename = "altHAE", skip_serializing_if = "Option::is_none")]
    pub alt_hae: Option<f64>,
    /// Altitude above mean sea level, metres.
    #[serde(rename = "altMSL", skip_serializing_if = "Option::is_none")]
    pub alt_msl: Option<f64>,
    /// Datum of the reported coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datum: Option<String>,
    /// Geoid separation, metres.
    #[serde(rename = "geoidSep", skip_serializing_if = "Option::is_none")]
    pub geoid_sep: Option<f64>,
    /// Longitude error estimate, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epx: Option<f64>,
    /// Latitude error estimate, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epy: Option<f64>,
    /// Vertical error estimate, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epv: Option<f64>,
    /// Horizontal position error estimate, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eph: Option<f64>,
    /// Speed error estimate, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<f64>,
    /// Track error estimate, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epd: Option<f64>,
    /// Climb error estimate, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epc: Option<f64>,
    /// Course over ground, degrees from true north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track: Option<f64>,
    /// Course over ground, degrees from magnetic north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magtrack: Option<f64>,
    /// Magnetic variation, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magvar: Option<f64>,
    /// Speed over ground, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Climb (positive) or sink (negative) rate, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climb: Option<f64>,
    /// North velocity component, metres per second.
    #[serde(rename = "velN", skip_serializing_if = "Option::is_none")]
    pub vel_n: Option<f64>,
    /// East velocity component, metres per second.
    #[serde(rename = "velE", skip_serializing_if = "Option::is_none")]
    pub vel_e: Option<f64>,
    /// Down velocity component, metres per second.
    #[serde(rename = "velD", skip_serializing_if = "Option::is_none")]
    pub vel_d: Option<f64>,
    /// ECEF X position, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecefx: Option<f64>,
    /// ECEF Y position, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecefy: Option<f64>,
    /// ECEF Z position, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecefz: Option<f64>,
    /// ECEF position accuracy, metres.
    #[serde(rename = "ecefpAcc", skip_serializing_if = "Option::is_none")]
    pub ecef_p_acc: Option<f64>,
    /// ECEF X velocity, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecefvx: Option<f64>,
    /// ECEF Y velocity, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecefvy: Option<f64>,
    /// ECEF Z velocity, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecefvz: Option<f64>,
    /// ECEF velocity accuracy, metres per second.
    #[serde(rename = "ecefvAcc", skip_serializing_if = "Option::is_none")]
    pub ecef_v_acc: Option<f64>,
    /// North component of the relative position vector, metres.
    #[serde(rename = "relN", skip_serializing_if = "Option::is_none")]
    pub rel_n: Option<f64>,
    /// East component of the relative position vector, metres.
    #[serde(rename = "relE", skip_serializing_if = "Option::is_none")]
    pub rel_e: Option<f64>,
    /// Down component of the relative position vector, metres.
    #[serde(rename = "relD", skip_serializing_if = "Option::is_none")]
    pub rel_d: Option<f64>,
    /// Spherical error probability, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sep: Option<f64>,
    /// Age of DGPS corrections, seconds.
    #[serde(rename = "dgpsAge", skip_serializing_if = "Option::is_none")]
    pub dgps_age: Option<f64>,
    /// DGPS station id.
    #[serde(rename = "dgpsSta", skip_serializing_if = "Option::is_none")]
    pub dgps_sta: Option<u32>,
    /// Receiver clock bias, nanoseconds.
    #[serde(rename = "clockbias", skip_serializing_if = "Option::is_none")]
    pub clock_bias: Option<f64>,
    /// Receiver clock drift, nanoseconds per second.
    #[serde(rename = "clockdrift", skip_serializing_if = "Option::is_none")]
    pub clock_drift: Option<f64>,
    /// Current leap seconds.
    #[serde(rename = "leapseconds", skip_serializing_if = "Option::is_none")]
    pub leap_seconds: Option<i32>,
    /// Antenna status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ant: Option<u32>,
    /// Jamming indicator, 0 to 255.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jam: Option<u32>,
    /// Receiver temperature, degrees Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    /// Water depth, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Wind angle, magnetic, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wanglem: Option<f64>,
    /// Wind angle, relative, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wangler: Option<f64>,
    /// Wind angle, true, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wanglet: Option<f64>,
    /// Wind speed, relative, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wspeedr: Option<f64>,
    /// Wind speed, true, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wspeedt: Option<f64>,
}

/// Pseudorange noise statistics (`GST`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Gst {
    /// Name of the originating device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Time stamp, ISO 8601 UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Standard deviation of range inputs to the navigation process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rms: Option<f64>,
    /// Standard deviation of the error ellipse semi-major axis, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<f64>,
    /// Standard deviation of the error ellipse semi-minor axis, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minor: Option<f64>,
    /// Orientation of the semi-major axis, degrees from true north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orient: Option<f64>,
    /// Standard deviation of altitude error, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<f64>,
    /// Standard deviation of latitude error, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Standard deviation of longitude error, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    /// Standard deviation of east velocity error, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ve: Option<f64>,
    /// Standard deviation of north velocity error, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vn: Option<f64>,
    /// Standard deviation of up velocity error, metres per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vu: Option<f64>,
}

/// Vehicle attitude from a compass or IMU (`ATT`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Att {
    /// Name of the originating device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Time stamp, ISO 8601 UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Arbitrary time tag of the measurement.
    #[serde(rename = "timeTag", skip_serializing_if = "Option::is_none")]
    pub time_tag: Option<String>,
    /// Heading, degrees from true north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    /// Magnetometer status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mag_st: Option<String>,
    /// Heading, degrees from magnetic north.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mheading: Option<f64>,
    /// Pitch, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    /// Pitch sensor status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch_st: Option<String>,
    /// Rate of turn, degrees per minute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rot: Option<f64>,
    /// Yaw, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw: Option<f64>,
    /// Yaw sensor status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaw_st: Option<String>,
    /// Roll, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<f64>,
    /// Roll sensor status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_st: Option<String>,
    /// Local magnetic inclination, degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dip: Option<f64>,
    /// Scalar magnetic field strength.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mag_len: Option<f64>,
    /// X component of magnetic field strength.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mag_x: Option<f64>,
    /// Y component of magnetic field strength.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mag_y: Option<f64>,
    /// Z component of magnetic field strength.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mag_z: Option<f64>,
    /// Scalar acceleration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_len: Option<f64>,
    /// X component of acceleration, metres per second squared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_x: Option<f64>,
    /// Y component of acceleration, metres per second squared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_y: Option<f64>,
    /// Z component of acceleration, metres per second squared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acc_z: Option<f64>,
    /// X component of angular rate, degrees per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyro_x: Option<f64>,
    /// Y component of angular rate, degrees per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyro_y: Option<f64>,
    /// Z component of angular rate, degrees per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gyro_z: Option<f64>,
    /// Water depth, metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Temperature at the sensor, degrees Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
}
