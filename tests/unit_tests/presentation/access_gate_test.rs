use docrelay::presentation::AccessGate;

#[test]
fn given_matching_secret_when_checking_then_permits() {
    let gate = AccessGate::new("open-sesame");
    assert!(gate.permits(Some(b"open-sesame".as_slice())));
}

#[test]
fn given_missing_or_wrong_secret_when_checking_then_denies() {
    let gate = AccessGate::new("open-sesame");

    assert!(!gate.permits(None));
    assert!(!gate.permits(Some(b"".as_slice())));
    assert!(!gate.permits(Some(b"open-sesam".as_slice())));
    assert!(!gate.permits(Some(b"open-sesame ".as_slice())));
    assert!(!gate.permits(Some(b"OPEN-SESAME".as_slice())));
}

#[test]
fn given_paths_when_checking_public_access_then_only_health_is_public() {
    assert!(AccessGate::is_public("/health"));
    assert!(!AccessGate::is_public("/analyze"));
    assert!(!AccessGate::is_public("/health/extra"));
    assert!(!AccessGate::is_public("/test-download/1"));
}
