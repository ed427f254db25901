//! Crate-level integration and BDD tests.

use std::sync::{Arc, Mutex};

use crate::{Report, Session, StreamEnd};

pub(crate) mod support;

use support::{FakeGpsd, Script, sky_line, tpv_line};

#[test]
fn end_to_end_stream_skips_noise_and_keeps_wire_order() {
    let mut daemon = FakeGpsd::spawn(Script::new([
        String::from("not json at all"),
        sky_line(),
        String::from(r#"{"class":"AIS","type":5}"#),
        String::from(r#"{"class":"TPV","mode":"three"}"#),
        tpv_line(3),
        String::from(r#"{"class":"GST","rms":2.5}"#),
    ]))
    .expect("spawn fake gpsd");
    let session = Session::dial(&daemon.address()).expect("dial fake gpsd");

    let seen = Arc::new(Mutex::new(Vec::new()));
    for tag in ["TPV", "SKY", "AIS"] {
        let sink = Arc::clone(&seen);
        session.add_filter(tag, move |report: &Report| {
            sink.lock().expect("lock seen").push(report.clone());
        });
    }

    let completion = session.watch().expect("start watching");
    assert_eq!(completion.wait(), StreamEnd::EndOfStream);
    session.close().expect("close session");

    let classes: Vec<&str> = seen
        .lock()
        .expect("lock seen")
        .iter()
        .map(|report| report.class().as_str())
        .collect();
    assert_eq!(classes, ["SKY", "TPV"]);
    daemon.take_received().expect("fake gpsd finished");
}
