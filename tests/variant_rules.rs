//! Variant Rule Tests
//!
//! One section per variant family, exercising the rule table through the
//! compiled schema: bounds, patterns, character classes, list limits, and
//! coercion outcomes.

use formsmith::descriptor::{FieldDescriptor, Variant};
use formsmith::schema::{FieldValue, FormSchema};
use serde_json::{json, Map, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn single(variant: Variant) -> FormSchema {
    FormSchema::compile(&[FieldDescriptor::new("field", "Field", variant)])
}

fn messages_for(schema: &FormSchema, value: Value) -> Vec<String> {
    match schema.validate(&record(json!({ "field": value }))) {
        Ok(_) => Vec::new(),
        Err(errors) => errors
            .messages("field")
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

// =============================================================================
// Slider
// =============================================================================

#[test]
fn test_slider_default_bounds_inclusive() {
    let schema = single(Variant::Slider);
    assert!(messages_for(&schema, json!(0)).is_empty());
    assert!(messages_for(&schema, json!(100)).is_empty());
    assert!(!messages_for(&schema, json!(-1)).is_empty());
    assert!(!messages_for(&schema, json!(101)).is_empty());
}

#[test]
fn test_slider_custom_bounds_and_step() {
    let schema = FormSchema::compile(&[FieldDescriptor::new("field", "Field", Variant::Slider)
        .bounds(10.0, 50.0, 10.0)]);

    assert!(messages_for(&schema, json!(10)).is_empty());
    assert!(messages_for(&schema, json!(50)).is_empty());
    assert!(messages_for(&schema, json!(9))
        .iter()
        .any(|m| m.contains("between 10 and 50")));
    assert!(messages_for(&schema, json!(25))
        .iter()
        .any(|m| m.contains("increments of 10")));
}

#[test]
fn test_slider_step_misalignment_with_default_step() {
    let schema = single(Variant::Slider);
    assert!(messages_for(&schema, json!(41.5))
        .iter()
        .any(|m| m.contains("increments of 1")));
}

#[test]
fn test_slider_rejects_non_number() {
    let schema = single(Variant::Slider);
    assert!(messages_for(&schema, json!("fast"))
        .iter()
        .any(|m| m.contains("must be a number")));
}

// =============================================================================
// Password
// =============================================================================

#[test]
fn test_password_accepts_strong_value() {
    let schema = single(Variant::Password);
    assert!(messages_for(&schema, json!("Abc12345!")).is_empty());
}

#[test]
fn test_password_weak_value_gets_multiple_distinct_messages() {
    let schema = single(Variant::Password);
    let messages = messages_for(&schema, json!("abc12345"));
    // Missing uppercase AND missing special character.
    assert!(messages.len() >= 2);
    assert!(messages.iter().any(|m| m.contains("uppercase")));
    assert!(messages.iter().any(|m| m.contains("special character")));
    let unique: std::collections::BTreeSet<_> = messages.iter().collect();
    assert_eq!(unique.len(), messages.len());
}

#[test]
fn test_password_short_value_reports_length() {
    let schema = single(Variant::Password);
    assert!(messages_for(&schema, json!("Ab1!"))
        .iter()
        .any(|m| m.contains("at least 8")));
}

// =============================================================================
// Input OTP
// =============================================================================

#[test]
fn test_otp_accepts_six_digits() {
    let schema = single(Variant::InputOtp);
    assert!(messages_for(&schema, json!("123456")).is_empty());
}

#[test]
fn test_otp_rejects_non_digit() {
    let schema = single(Variant::InputOtp);
    let messages = messages_for(&schema, json!("12a456"));
    assert_eq!(messages, vec!["must contain only digits"]);
}

#[test]
fn test_otp_rejects_wrong_length() {
    let schema = single(Variant::InputOtp);
    let messages = messages_for(&schema, json!("12345"));
    assert_eq!(messages, vec!["must be exactly 6 characters"]);
}

// =============================================================================
// Tags Input
// =============================================================================

#[test]
fn test_tags_single_short_tag_passes() {
    let schema = single(Variant::TagsInput);
    assert!(messages_for(&schema, json!(["a"])).is_empty());
}

#[test]
fn test_tags_over_twenty_items_fails() {
    let schema = single(Variant::TagsInput);
    let tags: Vec<String> = (0..21).map(|i| format!("tag{}", i)).collect();
    assert!(messages_for(&schema, json!(tags))
        .iter()
        .any(|m| m.contains("at most 20")));
}

#[test]
fn test_tags_oversized_item_fails() {
    let schema = single(Variant::TagsInput);
    let long_tag = "x".repeat(51);
    assert!(messages_for(&schema, json!([long_tag]))
        .iter()
        .any(|m| m.contains("at most 50 characters")));
}

#[test]
fn test_tags_empty_list_fails() {
    let schema = single(Variant::TagsInput);
    assert!(messages_for(&schema, json!([]))
        .iter()
        .any(|m| m.contains("at least 1")));
}

// =============================================================================
// Multi Select
// =============================================================================

#[test]
fn test_multi_select_bounds() {
    let schema = single(Variant::MultiSelect);
    assert!(messages_for(&schema, json!(["one"])).is_empty());

    let eleven: Vec<String> = (0..11).map(|i| i.to_string()).collect();
    assert!(!messages_for(&schema, json!(eleven)).is_empty());
    assert!(!messages_for(&schema, json!([])).is_empty());
}

// =============================================================================
// Combobox
// =============================================================================

#[test]
fn test_combobox_accepts_known_language_code() {
    let schema = single(Variant::Combobox);
    assert!(messages_for(&schema, json!("en")).is_empty());
    assert!(messages_for(&schema, json!("zh")).is_empty());
}

#[test]
fn test_combobox_rejects_unknown_code() {
    let schema = single(Variant::Combobox);
    assert!(messages_for(&schema, json!("xx"))
        .iter()
        .any(|m| m.contains("must be one of")));
}

// =============================================================================
// Phone
// =============================================================================

#[test]
fn test_phone_accepts_e164() {
    let schema = single(Variant::Phone);
    assert!(messages_for(&schema, json!("+14155552671")).is_empty());
    assert!(messages_for(&schema, json!("4155552671")).is_empty());
}

#[test]
fn test_phone_rejects_leading_zero_and_letters() {
    let schema = single(Variant::Phone);
    assert!(messages_for(&schema, json!("0123"))
        .iter()
        .any(|m| m.contains("valid phone number")));
    assert!(!messages_for(&schema, json!("call me")).is_empty());
}

// =============================================================================
// Signature Input
// =============================================================================

#[test]
fn test_signature_requires_data_uri() {
    let schema = single(Variant::SignatureInput);
    assert!(messages_for(&schema, json!("data:image/png;base64,iVBORw0KGgo=")).is_empty());
    assert!(messages_for(&schema, json!("hello"))
        .iter()
        .any(|m| m.contains("data-URI")));
}

// =============================================================================
// File Input
// =============================================================================

#[test]
fn test_file_input_within_limits_passes() {
    let schema = single(Variant::FileInput);
    let files = json!([
        {"name": "cv.pdf", "size": 1024},
        {"name": "photo.jpg", "size": 2 * 1024 * 1024}
    ]);
    assert!(messages_for(&schema, files).is_empty());
}

#[test]
fn test_file_input_too_many_files_fails() {
    let schema = single(Variant::FileInput);
    let files: Vec<Value> = (0..6)
        .map(|i| json!({"name": format!("f{}.txt", i), "size": 1}))
        .collect();
    assert!(messages_for(&schema, json!(files))
        .iter()
        .any(|m| m.contains("at most 5 files")));
}

#[test]
fn test_file_input_oversized_file_fails() {
    let schema = single(Variant::FileInput);
    let files = json!([{"name": "huge.bin", "size": 5 * 1024 * 1024}]);
    assert!(messages_for(&schema, files)
        .iter()
        .any(|m| m.contains("at most 4 MiB")));
}

// =============================================================================
// Location Input
// =============================================================================

#[test]
fn test_location_country_with_optional_state() {
    let schema = single(Variant::LocationInput);
    assert!(messages_for(&schema, json!(["US", "CA"])).is_empty());
    assert!(messages_for(&schema, json!(["US"])).is_empty());
}

#[test]
fn test_location_blank_country_fails() {
    let schema = single(Variant::LocationInput);
    assert!(messages_for(&schema, json!([" "]))
        .iter()
        .any(|m| m.contains("country")));
}

// =============================================================================
// Date Variants
// =============================================================================

#[test]
fn test_date_variants_parse_and_coerce() {
    for variant in [
        Variant::DatePicker,
        Variant::DatetimePicker,
        Variant::SmartDatetimeInput,
    ] {
        let schema = FormSchema::compile(&[FieldDescriptor::new("field", "Field", variant)]);
        let values = schema
            .validate(&record(json!({"field": "2024-05-01T12:00:00Z"})))
            .unwrap();
        assert!(matches!(values["field"], FieldValue::Date(_)));
    }
}

#[test]
fn test_date_rejects_garbage() {
    let schema = single(Variant::DatePicker);
    assert_eq!(
        messages_for(&schema, json!("yesterday-ish")),
        vec!["must be a valid date"]
    );
}

// =============================================================================
// Text Variants
// =============================================================================

#[test]
fn test_input_trims_and_rejects_whitespace_only() {
    let schema = single(Variant::Input);
    let values = schema
        .validate(&record(json!({"field": "  Ada  "})))
        .unwrap();
    assert_eq!(values["field"], FieldValue::Text("Ada".to_string()));

    assert!(messages_for(&schema, json!("   "))
        .iter()
        .any(|m| m.contains("must not be empty")));
}

#[test]
fn test_textarea_length_bounds() {
    let schema = single(Variant::Textarea);
    assert!(messages_for(&schema, json!("fine")).is_empty());

    let long = "x".repeat(1001);
    assert!(messages_for(&schema, json!(long))
        .iter()
        .any(|m| m.contains("at most 1000")));
}

#[test]
fn test_select_requires_non_empty() {
    let schema = single(Variant::Select);
    assert!(messages_for(&schema, json!("option-a")).is_empty());
    assert!(!messages_for(&schema, json!("  ")).is_empty());
}

// =============================================================================
// Checkbox / Switch
// =============================================================================

#[test]
fn test_boolean_variants_accept_bool_and_reject_strings() {
    for variant in [Variant::Checkbox, Variant::Switch] {
        let schema = single(variant);
        assert!(messages_for(&schema, json!(true)).is_empty());
        assert!(messages_for(&schema, json!(false)).is_empty());
        assert!(messages_for(&schema, json!("yes"))
            .iter()
            .any(|m| m.contains("must be a boolean")));
    }
}
