//! Check evaluation
//!
//! Checks run in a fixed order: status code first, then literal-body
//! matches, then field checks against the parsed JSON body. The first
//! failed check fails the scenario. A missing field path is a failure,
//! never a silent pass.

use serde_json::Value;

use crate::common::{Error, Result};
use crate::http::ResponseRecord;
use crate::scenario::{Check, Scenario};

/// Evaluate every check of `scenario` against its own response
pub fn evaluate(scenario: &Scenario, response: &ResponseRecord) -> Result<()> {
    if response.status != scenario.expected_status {
        return Err(Error::StatusMismatch {
            expected: scenario.expected_status,
            actual: response.status,
        });
    }

    // Literal matches compare raw text; no JSON parse involved.
    for check in &scenario.checks {
        if let Check::BodyEquals { expected } = check {
            if response.body != *expected {
                return Err(Error::BodyMismatch {
                    expected: expected.clone(),
                    actual: response.body.clone(),
                });
            }
        }
    }

    let field_checks: Vec<&Check> = scenario
        .checks
        .iter()
        .filter(|check| !matches!(check, Check::BodyEquals { .. }))
        .collect();
    if field_checks.is_empty() {
        return Ok(());
    }

    // Parse once; every field check reads the same parsed body.
    let body = response.json()?;
    for check in field_checks {
        match check {
            Check::FieldEquals { path, expected } => {
                let actual = lookup(&body, path).ok_or_else(|| Error::FieldMissing {
                    path: path.clone(),
                })?;
                if actual != expected {
                    return Err(Error::FieldMismatch {
                        path: path.clone(),
                        expected: expected.clone(),
                        actual: actual.clone(),
                    });
                }
            }
            Check::FieldPresent { path } => {
                let actual = lookup(&body, path).ok_or_else(|| Error::FieldMissing {
                    path: path.clone(),
                })?;
                if is_empty(actual) {
                    return Err(Error::FieldEmpty { path: path.clone() });
                }
            }
            Check::FieldLen { path, expected } => {
                let actual = lookup(&body, path).ok_or_else(|| Error::FieldMissing {
                    path: path.clone(),
                })?;
                let items = actual.as_array().ok_or_else(|| Error::NotAnArray {
                    path: path.clone(),
                    actual: actual.clone(),
                })?;
                if items.len() != *expected {
                    return Err(Error::LengthMismatch {
                        path: path.clone(),
                        expected: *expected,
                        actual: items.len(),
                    });
                }
            }
            Check::BodyEquals { .. } => {}
        }
    }

    Ok(())
}

/// Walk a dotted path (`data.first_name`) through nested JSON objects
fn lookup<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = body;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Null, empty strings, and empty collections fail presence checks;
/// numbers and booleans always count as present.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Scenario;
    use serde_json::json;

    fn response(status: u16, body: &str) -> ResponseRecord {
        ResponseRecord {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_status_is_checked_first() {
        // Status and field are both wrong; the status mismatch wins.
        let scenario = Scenario::get("single user", "users/2")
            .expect_status(200)
            .expect_field("data.first_name", json!("Janet"));
        let err = evaluate(&scenario, &response(500, r#"{"data":{}}"#)).unwrap_err();
        assert!(matches!(
            err,
            Error::StatusMismatch {
                expected: 200,
                actual: 500
            }
        ));
    }

    #[test]
    fn test_exact_status_match_passes() {
        let scenario = Scenario::get("single user not found", "users/23").expect_status(404);
        assert!(evaluate(&scenario, &response(404, "{}")).is_ok());
    }

    #[test]
    fn test_literal_body_match() {
        let scenario = Scenario::get("single resource not found", "unknown/23")
            .expect_status(404)
            .expect_body("{}");
        assert!(evaluate(&scenario, &response(404, "{}")).is_ok());

        let err = evaluate(&scenario, &response(404, "{} ")).unwrap_err();
        assert!(matches!(err, Error::BodyMismatch { .. }));
    }

    #[test]
    fn test_literal_body_needs_no_json_parse() {
        let scenario = Scenario::get("maintenance page", "status")
            .expect_status(200)
            .expect_body("down");
        assert!(evaluate(&scenario, &response(200, "down")).is_ok());
    }

    #[test]
    fn test_nested_field_equality() {
        let scenario = Scenario::get("single user", "users/2")
            .expect_status(200)
            .expect_field("data.first_name", json!("Janet"));
        let body = r#"{"data":{"id":2,"first_name":"Janet","last_name":"Weaver"}}"#;
        assert!(evaluate(&scenario, &response(200, body)).is_ok());
    }

    #[test]
    fn test_field_mismatch_carries_both_values() {
        let scenario = Scenario::get("single user", "users/2")
            .expect_status(200)
            .expect_field("data.first_name", json!("Janet"));
        let err =
            evaluate(&scenario, &response(200, r#"{"data":{"first_name":"Jane"}}"#)).unwrap_err();
        match err {
            Error::FieldMismatch {
                path,
                expected,
                actual,
            } => {
                assert_eq!(path, "data.first_name");
                assert_eq!(expected, json!("Janet"));
                assert_eq!(actual, json!("Jane"));
            }
            other => panic!("expected FieldMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_field_fails_instead_of_passing() {
        let scenario = Scenario::get("single user", "users/2")
            .expect_status(200)
            .expect_field("data.first_name", json!("Janet"));
        let err = evaluate(&scenario, &response(200, r#"{"data":{}}"#)).unwrap_err();
        assert!(matches!(err, Error::FieldMissing { path } if path == "data.first_name"));
    }

    #[test]
    fn test_missing_intermediate_segment_is_reported() {
        let scenario = Scenario::get("single user", "users/2")
            .expect_status(200)
            .expect_field("data.first_name", json!("Janet"));
        let err = evaluate(&scenario, &response(200, r#"{"support":{}}"#)).unwrap_err();
        assert!(matches!(err, Error::FieldMissing { .. }));
    }

    #[test]
    fn test_path_through_non_object_is_missing() {
        // `data` is an array here, so `data.first_name` cannot resolve.
        let scenario = Scenario::get("users", "users")
            .expect_status(200)
            .expect_field("data.first_name", json!("Janet"));
        let err = evaluate(&scenario, &response(200, r#"{"data":[1,2,3]}"#)).unwrap_err();
        assert!(matches!(err, Error::FieldMissing { .. }));
    }

    #[test]
    fn test_numeric_equality_is_typed() {
        let scenario = Scenario::get("get users", "users?page=2")
            .expect_status(200)
            .expect_field("total", json!(12));
        assert!(evaluate(&scenario, &response(200, r#"{"total":12}"#)).is_ok());
        // The string "12" is not the number 12.
        let err = evaluate(&scenario, &response(200, r#"{"total":"12"}"#)).unwrap_err();
        assert!(matches!(err, Error::FieldMismatch { .. }));
    }

    #[test]
    fn test_present_accepts_numbers_and_strings() {
        let scenario = Scenario::post("register", "register")
            .expect_status(200)
            .expect_present("id");
        assert!(evaluate(&scenario, &response(200, r#"{"id":4}"#)).is_ok());
        assert!(evaluate(&scenario, &response(200, r#"{"id":"970"}"#)).is_ok());
    }

    #[test]
    fn test_present_rejects_null_and_empty() {
        let scenario = Scenario::post("login", "login")
            .expect_status(200)
            .expect_present("token");
        for body in [r#"{"token":null}"#, r#"{"token":""}"#, r#"{"token":[]}"#] {
            let err = evaluate(&scenario, &response(200, body)).unwrap_err();
            assert!(matches!(err, Error::FieldEmpty { .. }), "body: {body}");
        }
        let err = evaluate(&scenario, &response(200, "{}")).unwrap_err();
        assert!(matches!(err, Error::FieldMissing { .. }));
    }

    #[test]
    fn test_array_length_check() {
        let scenario = Scenario::get("list resources", "unknown")
            .expect_status(200)
            .expect_len("data", 6);
        let body = r#"{"data":[{},{},{},{},{},{}]}"#;
        assert!(evaluate(&scenario, &response(200, body)).is_ok());

        let err = evaluate(&scenario, &response(200, r#"{"data":[{}]}"#)).unwrap_err();
        assert!(matches!(
            err,
            Error::LengthMismatch {
                expected: 6,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_length_check_on_non_array_is_reported() {
        let scenario = Scenario::get("list resources", "unknown")
            .expect_status(200)
            .expect_len("data", 6);
        let err = evaluate(&scenario, &response(200, r#"{"data":"six"}"#)).unwrap_err();
        assert!(matches!(err, Error::NotAnArray { .. }));
    }

    #[test]
    fn test_unparseable_body_with_field_checks_is_an_error() {
        let scenario = Scenario::get("get users", "users?page=2")
            .expect_status(200)
            .expect_field("total", json!(12));
        let err = evaluate(&scenario, &response(200, "<html></html>")).unwrap_err();
        assert!(matches!(err, Error::BodyNotJson { .. }));
    }

    #[test]
    fn test_status_only_scenario_ignores_body_entirely() {
        let scenario = Scenario::delete("delete user", "users/2").expect_status(204);
        assert!(evaluate(&scenario, &response(204, "")).is_ok());
    }
}
