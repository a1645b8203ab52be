// core/tests/test_storage.rs
use workout_core::{cfg_from_json, default_packages, packages_from_json, WorkoutError};

#[test]
fn test_packages_from_pairs() {
    let json = r#"[["SWM",[720,1,80,25,40]],["RUN",[15000,1,75]],["WLK",[9000,1,75,180]]]"#;
    let packages = packages_from_json(json).unwrap();
    assert_eq!(packages, default_packages());
}

#[test]
fn test_packages_from_objects() {
    let json = r#"[{"code":"RUN","args":[15000,1,75]}]"#;
    let packages = packages_from_json(json).unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].code, "RUN");
    assert_eq!(packages[0].args, vec![15000.0, 1.0, 75.0]);
}

#[test]
fn test_packages_bad_json_is_error() {
    let err = packages_from_json(r#"{"code":"RUN"}"#).unwrap_err();
    assert!(matches!(err, WorkoutError::Json { .. }));
}

#[test]
fn test_cfg_roundtrip_fields() {
    let cfg = cfg_from_json(r#"{"fail_fast": true, "json_output": true}"#).unwrap();
    assert!(cfg.fail_fast);
    assert!(cfg.json_output);
}
