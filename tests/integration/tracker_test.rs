//! End-to-end tracker tests

use btc_tracker::feed::FetchError;
use btc_tracker::render::{format_rows, LiveWriter};
use btc_tracker::sample::{Sample, Tint, ERROR_PRICE, PLACEHOLDER_PRICE};
use btc_tracker::tracker::Tracker;
use rust_decimal_macros::dec;

#[test]
fn test_scrolling_window_scenario() {
    let mut tracker = Tracker::new(3).unwrap();

    tracker.record(Ok(dec!(100)), "10:00:00");
    let snapshot = tracker.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot[0].price, PLACEHOLDER_PRICE);
    assert_eq!(snapshot[1].price, PLACEHOLDER_PRICE);
    assert_eq!(
        snapshot[2],
        Sample::quote(dec!(100), "10:00:00", Tint::Neutral)
    );

    tracker.record(Ok(dec!(110)), "10:00:01");
    assert_eq!(
        tracker.snapshot(),
        vec![
            Sample::placeholder(),
            Sample::quote(dec!(100), "10:00:00", Tint::Neutral),
            Sample::quote(dec!(110), "10:00:01", Tint::Up),
        ]
    );
}

#[test]
fn test_fetch_failure_scenario() {
    let mut tracker = Tracker::new(3).unwrap();
    tracker.record(Ok(dec!(100)), "10:00:00");
    let failed = tracker.record(Err(FetchError::MissingAmount), "10:00:10");

    assert_eq!(failed.price, ERROR_PRICE);
    assert_eq!(failed.tint, Tint::Neutral);

    let [prices, times] = format_rows(&tracker.snapshot(), true);
    assert_eq!(prices, "Price  -         100.00    Err!      ");
    assert_eq!(times, "Time   -         10:00:00  10:00:10  ");
}

#[test]
fn test_colored_repaint() {
    let mut tracker = Tracker::new(2).unwrap();
    tracker.record(Ok(dec!(200)), "10:00:00");
    tracker.record(Ok(dec!(150)), "10:00:10");

    let mut writer = LiveWriter::new(Vec::new());
    tracker.render(&mut writer, true);

    let out = String::from_utf8(writer.into_inner()).unwrap();
    assert_eq!(
        out,
        "Price  200.00    \x1b[31m150.00    \x1b[0m\nTime   10:00:00  10:00:10  \n"
    );
}
