use std::time::Duration;

use assert_approx_eq::assert_approx_eq;
use offboard_interface::{
    ArrivalCondition, BoundedDistanceThreshold, DistanceThreshold, Error, Vector3,
    DEFAULT_ARRIVAL_THRESHOLD,
};

#[test]
fn test_distance_threshold() {
    let c = DistanceThreshold::default();
    assert_approx_eq!(c.allowable_error, DEFAULT_ARRIVAL_THRESHOLD);
    let origin = Vector3::zeros();
    let zero = Duration::ZERO;
    assert!(c.is_arrived(&origin, &origin, zero).unwrap());
    assert!(c
        .is_arrived(&origin, &Vector3::new(0.1, 0.0, 0.0), zero)
        .unwrap());
    assert!(c
        .is_arrived(&origin, &Vector3::new(0.0, -0.1, 0.0), zero)
        .unwrap());
    assert!(!c
        .is_arrived(&origin, &Vector3::new(0.1001, 0.0, 0.0), zero)
        .unwrap());
    assert!(!c
        .is_arrived(&origin, &Vector3::new(0.06, 0.06, 0.06), zero)
        .unwrap());
    assert!(c
        .is_arrived(
            &Vector3::new(5.0, 0.0, 1.0),
            &Vector3::new(4.95, 0.0, 1.0),
            zero
        )
        .unwrap());
}

#[test]
fn test_distance_threshold_never_gives_up() {
    let c = DistanceThreshold::default();
    let far = Vector3::new(100.0, 0.0, 0.0);
    assert!(!c
        .is_arrived(&Vector3::zeros(), &far, Duration::from_secs(3600))
        .unwrap());
}

#[test]
fn test_bounded_distance_threshold() {
    let c = BoundedDistanceThreshold::new(0.1, 1.0);
    let origin = Vector3::zeros();
    let far = Vector3::new(1.0, 0.0, 0.0);
    assert!(!c
        .is_arrived(&origin, &far, Duration::from_millis(500))
        .unwrap());
    assert!(c
        .is_arrived(&origin, &origin, Duration::from_secs(10))
        .unwrap());
    let err = c
        .is_arrived(&origin, &far, Duration::from_secs(1))
        .unwrap_err();
    match err {
        Error::ArrivalTimeout {
            timeout,
            target,
            current,
            distance,
        } => {
            assert_eq!(timeout, Duration::from_secs(1));
            assert_eq!(target, origin);
            assert_eq!(current, far);
            assert_approx_eq!(distance, 1.0);
        }
        e => panic!("unexpected error {e:?}"),
    }
}

#[test]
fn test_condition_debug() {
    let c = BoundedDistanceThreshold::new(0.1, 2.0);
    assert_eq!(
        format!("{:?}", c),
        "BoundedDistanceThreshold { allowable_error: 0.1, timeout_sec: 2.0 }"
    );
    assert_eq!(
        format!("{:?}", DistanceThreshold::default()),
        "DistanceThreshold { allowable_error: 0.1 }"
    );
}

#[test]
fn test_condition_through_box() {
    let c: Box<dyn ArrivalCondition> = Box::new(DistanceThreshold::new(1.0));
    assert!(c
        .is_arrived(
            &Vector3::zeros(),
            &Vector3::new(0.5, 0.5, 0.5),
            Duration::ZERO
        )
        .unwrap());
}
