//! Arbitrary host pushes must never panic the widget, and a payload that
//! decodes must re-encode to something that decodes to the same snapshot.

#![no_main]

use ballot_app::{App, AppEvent};
use ballot_proto::Inbound;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let (selector, payload) = match data.split_first() {
        Some((selector, payload)) => (*selector, payload),
        None => return,
    };
    let channel = if selector & 1 == 0 { "get_languages" } else { "get_votes" };

    if let Ok(inbound) = Inbound::decode(channel, payload) {
        let body = inbound.encode().unwrap();
        assert_eq!(Inbound::decode(channel, &body).unwrap(), inbound);
    }

    let mut app = App::new();
    let _ = app.handle(AppEvent::host(channel, payload));
    for row in app.state().tally() {
        assert!(row.percentage <= 100);
    }
});
