use super::*;
use std::thread;

#[test]
fn test_search_limits_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    assert!(!limits.time_control.is_expired());
}

#[test]
fn test_search_limits_with_time() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(100));
    assert_eq!(limits.depth, 4);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_time_control_expiry() {
    let tc = TimeControl::new(Some(Duration::from_millis(10)));

    // Wait for time to expire
    thread::sleep(Duration::from_millis(20));
    assert!(tc.is_expired());
    assert!(tc.exceeded_fraction(0.9));
    assert!(tc.remaining_below_fraction(0.1));
    assert_eq!(tc.remaining(), Some(Duration::ZERO));
}

#[test]
fn test_time_control_no_limit() {
    let tc = TimeControl::new(None);
    thread::sleep(Duration::from_millis(10));
    assert!(!tc.is_expired());
    assert!(!tc.exceeded_fraction(0.0));
    assert!(!tc.remaining_below_fraction(1.0));
    assert!(tc.remaining().is_none());
}

#[test]
fn test_restart_resets_clock() {
    let mut tc = TimeControl::new(Some(Duration::from_millis(200)));
    thread::sleep(Duration::from_millis(220));
    assert!(tc.is_expired());
    tc.restart();
    assert!(!tc.is_expired());
}
