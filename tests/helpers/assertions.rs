// Test Assertion Helpers
//
// Common assertions over decoded JSON response bodies.

use serde_json::Value;

/// Assert the standard error envelope `{"error": {"code", "message"}}`
pub fn assert_error_body(body: &Value, expected_code: u16) {
    assert_eq!(
        body["error"]["code"].as_u64(),
        Some(u64::from(expected_code)),
        "Expected error code {}, body was {}",
        expected_code,
        body
    );
    assert!(
        body["error"]["message"].is_string(),
        "Error body must carry a message: {}",
        body
    );
}

/// Assert a numeric field equals `expected` (within float tolerance)
pub fn assert_amount(body: &Value, field: &str, expected: f64) {
    let actual = body[field]
        .as_f64()
        .unwrap_or_else(|| panic!("Field '{}' is not a number in {}", field, body));
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {} = {}, got {}",
        field,
        expected,
        actual
    );
}

/// Assert the document carries store-managed metadata
pub fn assert_has_metadata(body: &Value) {
    assert!(body["id"].is_string(), "Document must have an id: {}", body);
    assert!(body["createdAt"].is_string(), "Document must have createdAt: {}", body);
    assert!(body["updatedAt"].is_string(), "Document must have updatedAt: {}", body);
}

/// Extract the document id from a response body
pub fn id_of(body: &Value) -> String {
    body["id"]
        .as_str()
        .unwrap_or_else(|| panic!("Response has no id: {}", body))
        .to_string()
}
