use pagebloc_types::Timestamp;

#[test]
fn now_is_after_epoch() {
    assert!(Timestamp::now().as_millis() > 0);
}

#[test]
fn from_millis_roundtrip() {
    let ts = Timestamp::from_millis(1_700_000_000_000);
    assert_eq!(ts.as_millis(), 1_700_000_000_000);
}

#[test]
fn ordering_follows_millis() {
    let earlier = Timestamp::from_millis(1000);
    let later = Timestamp::from_millis(2000);
    assert!(earlier < later);
}

#[test]
fn now_is_monotonic_enough() {
    let a = Timestamp::now();
    let b = Timestamp::now();
    assert!(a <= b);
}

#[test]
fn serializes_as_bare_integer() {
    let ts = Timestamp::from_millis(42);
    assert_eq!(serde_json::to_string(&ts).unwrap(), "42");
    let parsed: Timestamp = serde_json::from_str("42").unwrap();
    assert_eq!(parsed, ts);
}
