use project_intake::models::{FieldErrors, FormState};
use serde_json::json;

#[test]
fn idle_state_matches_form_initial_state() {
    let body = serde_json::to_value(FormState::default()).unwrap();
    assert_eq!(body, json!({ "success": false, "errors": {}, "projectCode": "" }));
}

#[test]
fn accepted_state_carries_code_without_errors() {
    let body = serde_json::to_value(FormState::accepted("ABC-123")).unwrap();
    assert_eq!(body, json!({ "success": true, "projectCode": "ABC-123" }));
}

#[test]
fn failed_state_serializes_only_present_messages() {
    let state = FormState::failed(FieldErrors {
        description: Some("Description must be at least 10 characters".into()),
        ..FieldErrors::default()
    });
    let body = serde_json::to_value(state).unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "errors": { "description": "Description must be at least 10 characters" }
        })
    );
}
