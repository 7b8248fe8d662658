use scrollsync::{Axis, DEFAULT_SYNC_KEY, SyncError, SyncInterval, SyncOptions, SyncType};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_options_defaults() {
    let options = SyncOptions::new();

    assert_eq!(options.sync_key, DEFAULT_SYNC_KEY);
    assert_eq!(options.interval, SyncInterval::FULL);
    assert_eq!(options.sync_type, SyncType::Absolute);
    assert_eq!(options.axis, Axis::Vertical);
}

#[test]
fn test_default_interval_is_unbounded() {
    let interval = SyncInterval::default();

    assert_eq!(interval.lo(), f64::NEG_INFINITY);
    assert_eq!(interval.hi(), f64::INFINITY);
    assert_eq!(interval, SyncInterval::FULL);
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_options_builder_chaining() {
    let interval = SyncInterval::new(0.0, 120.0).unwrap();
    let options = SyncOptions::new()
        .sync_key("toolbar")
        .interval(interval)
        .sync_type(SyncType::Relative)
        .axis(Axis::Horizontal);

    assert_eq!(options.sync_key, "toolbar");
    assert_eq!(options.interval, interval);
    assert_eq!(options.sync_type, SyncType::Relative);
    assert_eq!(options.axis, Axis::Horizontal);
}

#[test]
fn test_options_horizontal_shorthand() {
    let options = SyncOptions::new().horizontal();

    assert_eq!(options.axis, Axis::Horizontal);
}

// ============================================================================
// Interval Validation
// ============================================================================

#[test]
fn test_interval_accepts_ordered_bounds() {
    let interval = SyncInterval::new(-10.0, 250.0).unwrap();

    assert_eq!(interval.lo(), -10.0);
    assert_eq!(interval.hi(), 250.0);
}

#[test]
fn test_interval_rejects_inverted_bounds() {
    assert_eq!(
        SyncInterval::new(100.0, 0.0),
        Err(SyncError::InvalidInterval { lo: 100.0, hi: 0.0 })
    );
}

#[test]
fn test_interval_rejects_equal_bounds() {
    // A zero-width window would clamp and suppress at the same offset.
    assert!(SyncInterval::new(50.0, 50.0).is_err());
}

#[test]
fn test_interval_rejects_nan_bounds() {
    assert!(SyncInterval::new(f64::NAN, 10.0).is_err());
    assert!(SyncInterval::new(0.0, f64::NAN).is_err());
    assert!(SyncInterval::new(f64::NAN, f64::NAN).is_err());
}

#[test]
fn test_interval_error_message() {
    let err = SyncInterval::new(5.0, 2.0).unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid sync interval: lo (5) must be below hi (2)"
    );
}
