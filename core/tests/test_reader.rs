// core/tests/test_reader.rs
use workout_core::{create_workout, read_package, Package, WorkoutError, WorkoutKind};

#[test]
fn test_dispatch_known_codes() {
    let swm = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(
        *swm.kind(),
        WorkoutKind::Swimming { pool_length_m: 25.0, pool_laps: 40.0 }
    );
    assert_eq!(swm.action_count(), 720);

    let run = create_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(*run.kind(), WorkoutKind::Running);
    assert_eq!(run.weight_kg(), 75.0);

    let wlk = create_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(*wlk.kind(), WorkoutKind::SportsWalking { height_cm: 180.0 });
    assert_eq!(wlk.duration_hours(), 1.0);
}

#[test]
fn test_unknown_code_is_an_error() {
    let err = create_workout("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::UnknownWorkoutType { ref code } if code == "XYZ"));
    assert!(err.to_string().contains("SWM,RUN,WLK"));
}

#[test]
fn test_missing_weight_is_arity_error() {
    let err = create_workout("RUN", &[1.0, 2.0]).unwrap_err();
    assert!(matches!(
        err,
        WorkoutError::ArityMismatch { kind: "Running", expected: 3, got: 2 }
    ));
}

#[test]
fn test_swimming_needs_five_args() {
    let err = create_workout("SWM", &[720.0, 1.0, 80.0, 25.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::ArityMismatch { expected: 5, got: 4, .. }));
}

#[test]
fn test_read_package_uses_code_and_args() {
    let p = Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]);
    let w = read_package(&p).unwrap();
    assert_eq!(w.kind().label(), "SportsWalking");
}

#[test]
fn test_fractional_action_count_rejected() {
    let err = create_workout("RUN", &[15000.5, 1.0, 75.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::InvalidActionCount { .. }));
}

#[test]
fn test_negative_action_count_flows_through() {
    // antall >= 0 antas, sjekkes ikke
    let w = create_workout("RUN", &[-100.0, 1.0, 75.0]).unwrap();
    assert_eq!(w.action_count(), -100);
    assert!((w.distance_km() + 0.065).abs() < 1e-12);
    assert!(w
        .show_training_info()
        .message()
        .contains("Дистанция: -0.065 км"));
}
