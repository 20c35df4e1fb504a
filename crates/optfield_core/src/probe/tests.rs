use super::{FieldState, decode_field, probe_field, probe_fields};
use crate::error::OptError;

const DOCUMENT: &[u8] = br#"{"primitive": "hello world", "map": null, "slice": []}"#;

#[test]
fn probe_tells_absent_null_and_present_apart() {
	assert_eq!(probe_field(DOCUMENT, "primitive").expect("probe"), FieldState::Present);
	assert_eq!(probe_field(DOCUMENT, "map").expect("probe"), FieldState::Null);
	assert_eq!(probe_field(DOCUMENT, "struct").expect("probe"), FieldState::Absent);
}

#[test]
fn empty_values_probe_as_present() {
	assert_eq!(probe_field(DOCUMENT, "slice").expect("probe"), FieldState::Present);
	assert_eq!(probe_field(br#"{"s": ""}"#, "s").expect("probe"), FieldState::Present);
}

#[test]
fn probe_fields_preserves_key_order() {
	let states = probe_fields(DOCUMENT, ["struct", "map", "primitive"]).expect("probe");

	assert_eq!(
		states,
		vec![("struct", FieldState::Absent), ("map", FieldState::Null), ("primitive", FieldState::Present)]
	);
}

#[test]
fn non_object_document_is_rejected() {
	let err = probe_field(b"[1, 2]", "primitive").expect_err("arrays have no keys");

	assert!(matches!(err, OptError::NotAnObject { kind: "array" }));
	assert_eq!(err.to_string(), "expected a JSON object, got array");
}

#[test]
fn malformed_document_is_a_decode_error() {
	let err = probe_field(b"{", "primitive").expect_err("truncated document");
	assert!(matches!(err, OptError::Decode { .. }));
}

#[test]
fn decode_field_collapses_absent_and_null() {
	let absent = decode_field::<String>(DOCUMENT, "missing").expect("absent key decodes");
	let null = decode_field::<String>(br#"{"missing": null}"#, "missing").expect("null key decodes");

	assert_eq!(absent, null);
	assert!(!absent.exists());
	assert_eq!(absent.get_with_default("default".to_owned()), "default");
}

#[test]
fn decode_field_reads_present_value() {
	let primitive = decode_field::<String>(DOCUMENT, "primitive").expect("string decodes");
	let slice = decode_field::<Vec<i32>>(DOCUMENT, "slice").expect("empty slice decodes");

	assert_eq!(primitive.get(), "hello world");
	assert!(slice.exists());
	assert!(slice.get().is_empty());
}

#[test]
fn decode_field_type_mismatch_fails() {
	let err = decode_field::<i64>(DOCUMENT, "primitive").expect_err("string is not a number");
	assert!(matches!(err, OptError::Decode { .. }));
}

#[test]
fn labels_match_serialized_form() {
	for state in [FieldState::Absent, FieldState::Null, FieldState::Present] {
		assert_eq!(serde_json::to_value(state).expect("state serializes"), state.label());
	}
}
