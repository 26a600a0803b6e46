//! Schema resolution through the environment.
//!
//! Kept in its own test binary: it sets a process-wide environment variable.

use std::fs;

use mlprep_standards::{SCHEMA_ENV_VAR, resolve_schema, training_schema};
use tempfile::TempDir;

#[test]
#[allow(unsafe_code)]
fn test_resolve_schema_order() {
    let dir = TempDir::new().unwrap();
    let env_path = dir.path().join("env.json");
    fs::write(
        &env_path,
        r#"{"columns": [{"name": "score", "type": "float"}], "strict": false}"#,
    )
    .unwrap();
    let explicit_path = dir.path().join("explicit.json");
    fs::write(
        &explicit_path,
        r#"{"columns": [{"name": "label", "type": "categorical"}]}"#,
    )
    .unwrap();

    // SAFETY: the only test in this binary, so no other thread reads the environment.
    unsafe { std::env::remove_var(SCHEMA_ENV_VAR) };
    assert_eq!(resolve_schema(None).unwrap(), training_schema());

    // SAFETY: as above.
    unsafe { std::env::set_var(SCHEMA_ENV_VAR, &env_path) };
    let from_env = resolve_schema(None).unwrap();
    assert_eq!(from_env.column_names().collect::<Vec<_>>(), vec!["score"]);
    assert!(!from_env.strict);

    let explicit = resolve_schema(Some(&explicit_path)).unwrap();
    assert_eq!(explicit.column_names().collect::<Vec<_>>(), vec!["label"]);

    // SAFETY: as above.
    unsafe { std::env::set_var(SCHEMA_ENV_VAR, dir.path().join("absent.json")) };
    assert!(resolve_schema(None).is_err());

    // SAFETY: as above.
    unsafe { std::env::remove_var(SCHEMA_ENV_VAR) };
}
