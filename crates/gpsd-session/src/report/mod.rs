//! Catalogue of report schemas the session decodes.
//!
//! Every JSON object gpsd emits carries a `class` member naming its schema.
//! [`ReportClass`] is the closed set of classes this crate understands and
//! [`Report`] holds one fully decoded object of any of them. Objects of any
//! other class are valid protocol input but are never materialised.

mod control;
mod device;
mod fix;
mod sky;
mod timing;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use thiserror::Error;

pub use self::control::{ErrorReport, Poll, Version, Watch};
pub use self::device::{Device, Devices};
pub use self::fix::{Att, Gst, Tpv};
pub use self::sky::{Satellite, Sky};
pub use self::timing::{Osc, Pps, Toff};

/// Report classes with a known schema.
///
/// Parsing is case sensitive because the wire tags are.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ReportClass {
    /// Time-position-velocity fix.
    Tpv,
    /// Satellite sky view.
    Sky,
    /// Pseudorange noise statistics.
    Gst,
    /// Attitude.
    Att,
    /// Clock offset.
    Toff,
    /// Pulse-per-second edge.
    Pps,
    /// Oscillator status.
    Osc,
    /// Device inventory.
    Devices,
    /// Single device.
    Device,
    /// Daemon version, also sent as the connection greeting.
    Version,
    /// Watcher policy.
    Watch,
    /// Poll snapshot.
    Poll,
    /// Error notice.
    Error,
}

impl ReportClass {
    /// Wire tag of the class, e.g. `"TPV"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A fully decoded report.
///
/// Serialises back to the gpsd wire shape, including the `class` member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "class", rename_all = "UPPERCASE")]
pub enum Report {
    /// `TPV` report.
    Tpv(Tpv),
    /// `SKY` report.
    Sky(Sky),
    /// `GST` report.
    Gst(Gst),
    /// `ATT` report.
    Att(Att),
    /// `TOFF` report.
    Toff(Toff),
    /// `PPS` report.
    Pps(Pps),
    /// `OSC` report.
    Osc(Osc),
    /// `DEVICES` report.
    Devices(Devices),
    /// `DEVICE` report.
    Device(Device),
    /// `VERSION` report.
    Version(Version),
    /// `WATCH` report.
    Watch(Watch),
    /// `POLL` report.
    Poll(Poll),
    /// `ERROR` report.
    Error(ErrorReport),
}

impl Report {
    /// Decodes `line` as the schema belonging to `class`.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the line does not match the schema.
    pub fn from_slice(class: ReportClass, line: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match class {
            ReportClass::Tpv => Self::Tpv(serde_json::from_slice(line)?),
            ReportClass::Sky => Self::Sky(serde_json::from_slice(line)?),
            ReportClass::Gst => Self::Gst(serde_json::from_slice(line)?),
            ReportClass::Att => Self::Att(serde_json::from_slice(line)?),
            ReportClass::Toff => Self::Toff(serde_json::from_slice(line)?),
            ReportClass::Pps => Self::Pps(serde_json::from_slice(line)?),
            ReportClass::Osc => Self::Osc(serde_json::from_slice(line)?),
            ReportClass::Devices => Self::Devices(serde_json::from_slice(line)?),
            ReportClass::Device => Self::Device(serde_json::from_slice(line)?),
            ReportClass::Version => Self::Version(serde_json::from_slice(line)?),
            ReportClass::Watch => Self::Watch(serde_json::from_slice(line)?),
            ReportClass::Poll => Self::Poll(serde_json::from_slice(line)?),
            ReportClass::Error => Self::Error(serde_json::from_slice(line)?),
        })
    }

    /// Class of the decoded report.
    #[must_use]
    pub const fn class(&self) -> ReportClass {
        match self {
            Self::Tpv(_) => ReportClass::Tpv,
            Self::Sky(_) => ReportClass::Sky,
            Self::Gst(_) => ReportClass::Gst,
            Self::Att(_) => ReportClass::Att,
            Self::Toff(_) => ReportClass::Toff,
            Self::Pps(_) => ReportClass::Pps,
            Self::Osc(_) => ReportClass::Osc,
            Self::Devices(_) => ReportClass::Devices,
            Self::Device(_) => ReportClass::Device,
            Self::Version(_) => ReportClass::Version,
            Self::Watch(_) => ReportClass::Watch,
            Self::Poll(_) => ReportClass::Poll,
            Self::Error(_) => ReportClass::Error,
        }
    }
}

/// A schema type bound to exactly one [`ReportClass`].
///
/// Used by `Session::on` to hand handlers the concrete record instead of
/// the [`Report`] union.
pub trait ClassReport: Send + Sync + 'static {
    /// Class the schema decodes.
    const CLASS: ReportClass;

    /// Narrows a report to this schema.
    fn from_report(report: &Report) -> Option<&Self>;
}

macro_rules! class_report {
    ($($variant:ident => $schema:ty),+ $(,)?) => {
        $(
            impl ClassReport for $schema {
                const CLASS: ReportClass = ReportClass::$variant;

                fn from_report(report: &Report) -> Option<&Self> {
                    match report {
                        Report::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

class_report! {
    Tpv => Tpv,
    Sky => Sky,
    Gst => Gst,
    Att => Att,
    Toff => Toff,
    Pps => Pps,
    Osc => Osc,
    Devices => Devices,
    Device => Device,
    Version => Version,
    Watch => Watch,
    Poll => Poll,
    Error => ErrorReport,
}

/// NMEA fix mode carried by `TPV` reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    /// Mode not yet seen.
    #[default]
    NoValue,
    /// No fix.
    NoFix,
    /// Two-dimensional fix.
    TwoD,
    /// Three-dimensional fix.
    ThreeD,
}

/// Raised when a wire mode is outside `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown fix mode {0}")]
pub struct InvalidMode(pub u8);

impl TryFrom<u8> for Mode {
    type Error = InvalidMode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoValue),
            1 => Ok(Self::NoFix),
            2 => Ok(Self::TwoD),
            3 => Ok(Self::ThreeD),
            other => Err(InvalidMode(other)),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::NoValue => 0,
            Mode::NoFix => 1,
            Mode::TwoD => 2,
            Mode::ThreeD => 3,
        }
    }
}

#[cfg(test)]
mod tests;
