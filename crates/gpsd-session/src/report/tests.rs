//! Unit tests for the report catalogue.

use rstest::rstest;
use strum::IntoEnumIterator;

use super::*;

const SAMPLE_TPV: &[u8] = br#"{"class":"TPV","device":"/dev/ttyUSB0","mode":3,"time":"2024-05-01T10:00:00.000Z","lat":51.5,"lon":-0.12,"altHAE":45.1,"speed":0.2}"#;

const SAMPLE_SKY: &[u8] = br#"{"class":"SKY","nSat":2,"uSat":1,"hdop":0.9,"satellites":[{"PRN":4,"el":45.0,"az":196.0,"ss":39.0,"used":true},{"PRN":9,"el":12.0,"az":40.0,"ss":0.0,"used":false}]}"#;

#[rstest]
#[case::tpv("TPV", ReportClass::Tpv)]
#[case::devices("DEVICES", ReportClass::Devices)]
#[case::error("ERROR", ReportClass::Error)]
fn class_tags_round_trip(#[case] tag: &str, #[case] class: ReportClass) {
    assert_eq!(tag.parse::<ReportClass>().expect("known tag"), class);
    assert_eq!(class.as_str(), tag);
}

#[rstest]
#[case::lowercase("tpv")]
#[case::unknown("AIS")]
#[case::empty("")]
fn unknown_tags_are_rejected(#[case] tag: &str) {
    assert!(tag.parse::<ReportClass>().is_err());
}

#[test]
fn every_class_tag_is_uppercase() {
    for class in ReportClass::iter() {
        let tag = class.as_str();
        assert_eq!(tag, tag.to_ascii_uppercase());
    }
}

#[test]
fn decodes_tpv_fix() {
    let report = Report::from_slice(ReportClass::Tpv, SAMPLE_TPV).expect("decode TPV");
    let tpv = Tpv::from_report(&report).expect("TPV variant");
    assert_eq!(tpv.mode, Mode::ThreeD);
    assert_eq!(tpv.device.as_deref(), Some("/dev/ttyUSB0"));
    assert_eq!(tpv.alt_hae, Some(45.1));
    assert_eq!(tpv.climb, None);
    assert_eq!(report.class(), ReportClass::Tpv);
}

#[test]
fn decodes_sky_satellites() {
    let report = Report::from_slice(ReportClass::Sky, SAMPLE_SKY).expect("decode SKY");
    let sky = Sky::from_report(&report).expect("SKY variant");
    assert_eq!(sky.n_sat, Some(2));
    assert_eq!(sky.satellites.len(), 2);
    let used: Vec<i32> = sky
        .satellites
        .iter()
        .filter(|satellite| satellite.used)
        .map(|satellite| satellite.prn)
        .collect();
    assert_eq!(used, vec![4]);
}

#[test]
fn decodes_greeting() {
    let line = br#"{"class":"VERSION","release":"3.25","rev":"3.25","proto_major":3,"proto_minor":15}"#;
    let report = Report::from_slice(ReportClass::Version, line).expect("decode VERSION");
    let Report::Version(version) = report else {
        panic!("expected VERSION, got {report:?}");
    };
    assert_eq!(version.release, "3.25");
    assert_eq!(version.proto_major, 3);
}

#[test]
fn narrowing_to_the_wrong_schema_yields_none() {
    let report = Report::from_slice(ReportClass::Tpv, SAMPLE_TPV).expect("decode TPV");
    assert!(Sky::from_report(&report).is_none());
}

#[rstest]
#[case::mode_out_of_range(br#"{"class":"TPV","mode":7}"#.as_slice())]
#[case::wrong_type(br#"{"class":"TPV","mode":"3d"}"#.as_slice())]
#[case::not_an_object(b"42".as_slice())]
fn schema_mismatches_fail(#[case] line: &[u8]) {
    assert!(Report::from_slice(ReportClass::Tpv, line).is_err());
}

#[test]
fn serialises_with_class_member_and_without_absent_fields() {
    let report = Report::from_slice(ReportClass::Tpv, br#"{"class":"TPV","mode":2}"#)
        .expect("decode TPV");
    let json = serde_json::to_value(&report).expect("serialise report");
    assert_eq!(json, serde_json::json!({"class": "TPV", "mode": 2}));
}

#[test]
fn error_reports_carry_the_message() {
    let line = br#"{"class":"ERROR","message":"Unrecognized request 'FOO'"}"#;
    let report = Report::from_slice(ReportClass::Error, line).expect("decode ERROR");
    let error = ErrorReport::from_report(&report).expect("ERROR variant");
    assert_eq!(error.message, "Unrecognized request 'FOO'");
}
