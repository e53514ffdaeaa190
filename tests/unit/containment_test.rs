// tests/unit/containment_test.rs
use closed_interval::ClosedInterval;

use crate::common::{RecordingComparer, five_to_ten, reversed_order, zero_to_ten};

#[test]
fn value_equal_to_lower_limit_is_contained() {
    assert!(five_to_ten().contains(&5));
}

#[test]
fn value_equal_to_upper_limit_is_contained() {
    assert!(five_to_ten().contains(&10));
}

#[test]
fn all_points_between_limits_are_contained() {
    let iv = zero_to_ten();

    for candidate in 0..=10 {
        assert!(iv.contains(&candidate), "Point: {candidate} should be contained in interval.");
    }
}

#[test]
fn points_outside_limits_are_not_contained() {
    let iv = zero_to_ten();

    assert!(!iv.contains(&-1));
    assert!(!iv.contains(&11));
    assert!(!iv.contains(&i32::MIN));
    assert!(!iv.contains(&i32::MAX));
}

#[test]
fn containment_is_judged_by_the_interval_comparer() {
    let iv = zero_to_ten().with_comparer(reversed_order());

    assert!(iv.contains(&0));
    assert!(iv.contains(&10));
    assert!(iv.contains(&3));
    assert!(!iv.contains(&-1));
    assert!(!iv.contains(&11));
}

#[test]
fn containment_asks_only_the_interval_comparer() {
    let recorder = RecordingComparer::natural();
    let iv = ClosedInterval::new_by(0, 10, &recorder);
    recorder.reset();

    assert!(iv.contains(&4));
    assert_eq!(recorder.calls(), vec![(4, 0), (4, 10)]);

    recorder.reset();
    assert!(!iv.contains(&-3));
    // Below the lower limit point short-circuits.
    assert_eq!(recorder.calls(), vec![(-3, 0)]);
}
