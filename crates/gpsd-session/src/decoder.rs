//! Line decoding for the report stream.
//!
//! Decoding happens in two steps: a cheap peek that only extracts the
//! `class` tag, and a full decode into the schema for that tag. The stream
//! loop only pays for the second step when a handler is waiting.

use serde::Deserialize;

use crate::error::DecodeError;
use crate::report::{Report, ReportClass};

/// Decodes report lines for the stream loop.
pub trait RecordDecoder: Send + Sync + 'static {
    /// Extracts the `class` tag without materialising the report.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Peek`] when the line is not a JSON object with
    /// a string `class` member.
    fn peek_class(&self, line: &[u8]) -> Result<String, DecodeError>;

    /// Fully decodes `line` into the schema registered for `class`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnrecognizedClass`] for tags outside the
    /// catalogue and [`DecodeError::Schema`] when the line does not fit.
    fn decode(&self, class: &str, line: &[u8]) -> Result<Report, DecodeError>;
}

/// `serde_json` backed decoder used by default.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

#[derive(Deserialize)]
struct ClassPeek {
    class: String,
}

impl RecordDecoder for JsonDecoder {
    fn peek_class(&self, line: &[u8]) -> Result<String, DecodeError> {
        serde_json::from_slice::<ClassPeek>(line)
            .map(|peek| peek.class)
            .map_err(DecodeError::Peek)
    }

    fn decode(&self, class: &str, line: &[u8]) -> Result<Report, DecodeError> {
        let known: ReportClass = class
            .parse()
            .map_err(|_| DecodeError::UnrecognizedClass(class.to_owned()))?;
        Report::from_slice(known, line).map_err(|source| DecodeError::Schema {
            class: class.to_owned(),
            source,
        })
    }
}
