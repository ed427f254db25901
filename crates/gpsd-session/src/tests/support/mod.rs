//! Shared helpers for session tests.

mod fake_gpsd;

use mockall::mock;

use crate::decoder::{JsonDecoder, RecordDecoder};
use crate::error::DecodeError;
use crate::report::Report;

pub(crate) use fake_gpsd::{FakeGpsd, GREETING, Script, WATCH_FRAME};

mock! {
    pub(crate) Decoder {}
    impl RecordDecoder for Decoder {
        fn peek_class(&self, line: &[u8]) -> Result<String, DecodeError>;
        fn decode(&self, class: &str, line: &[u8]) -> Result<Report, DecodeError>;
    }
}

/// Decoder double whose peeks defer to [`JsonDecoder`]. Callers add their
/// own `decode` expectations.
pub(crate) fn peeking_decoder(peeks: usize) -> MockDecoder {
    let mut decoder = MockDecoder::new();
    decoder
        .expect_peek_class()
        .times(peeks)
        .returning(|line: &[u8]| JsonDecoder.peek_class(line));
    decoder
}

/// A `TPV` line carrying the given fix mode.
pub(crate) fn tpv_line(mode: u8) -> String {
    format!(r#"{{"class":"TPV","device":"/dev/ttyUSB0","mode":{mode},"lat":51.5,"lon":-0.12}}"#)
}

/// A `SKY` line with two satellites, one of them used in the fix.
pub(crate) fn sky_line() -> String {
    String::from(
        r#"{"class":"SKY","device":"/dev/ttyUSB0","satellites":[{"PRN":7,"used":true},{"PRN":12,"used":false}]}"#,
    )
}
