//! Schema compiler and aggregate validator
//!
//! Compilation is a pure function from a descriptor list to a `FormSchema`:
//! one compiled field per unique name, each owning its base rule and the
//! required/optional composition. Compilation never fails: an empty list or
//! a list of only unrecognized variants produces a trivial always-valid
//! schema.
//!
//! Validation evaluates every field independently and collects all failures,
//! so the caller can display every message at once. Both operations are
//! deterministic: no clocks, no randomness, no ordering dependence.

use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};

use crate::descriptor::{FieldDescriptor, Variant};
use crate::observability::Logger;

use super::errors::{FieldIssue, ValidationErrors};
use super::rules::{base_rule, FieldRule};
use super::value::{coerce, FieldValue};

/// One field with its compiled rule and composition metadata.
#[derive(Debug, Clone)]
pub struct CompiledField {
    pub name: String,
    pub label: String,
    pub variant: Variant,
    pub required: bool,
    pub rule: FieldRule,
}

impl CompiledField {
    /// Compile one descriptor: rule-table lookup plus metadata.
    pub fn compile(descriptor: &FieldDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            label: descriptor.label.clone(),
            variant: descriptor.variant.clone(),
            required: descriptor.required,
            rule: base_rule(descriptor),
        }
    }

    /// Validate one raw value with required/optional composition applied.
    ///
    /// Absence (missing key, null, or empty string) short-circuits: required
    /// fields report exactly one "`<label>` is required" issue with base
    /// constraints skipped; optional fields accept unconditionally. A present
    /// value is coerced, then checked against every base constraint so all
    /// failures surface together.
    pub fn validate(&self, raw: Option<&Value>) -> Result<Option<FieldValue>, Vec<FieldIssue>> {
        if is_absent(raw) {
            return if self.required {
                Err(vec![FieldIssue::required(&self.label)])
            } else {
                Ok(None)
            };
        }
        let raw = raw.expect("absence check covers None");

        let value = match coerce(raw, self.rule.kind, self.rule.trim) {
            Ok(value) => value,
            Err(message) => return Err(vec![FieldIssue::constraint(message)]),
        };

        let issues: Vec<FieldIssue> = self
            .rule
            .constraints
            .iter()
            .filter_map(|constraint| constraint.check(&value))
            .map(FieldIssue::constraint)
            .collect();

        if issues.is_empty() {
            Ok(Some(value))
        } else {
            Err(issues)
        }
    }
}

/// The aggregate validator for one field list.
///
/// Immutable after compilation; discard and recompile when the field list
/// changes. Fields are held in ascending `rowIndex` order (stable for ties),
/// which matters only for presentation.
#[derive(Debug, Clone)]
pub struct FormSchema {
    fields: Vec<CompiledField>,
}

impl FormSchema {
    /// Compile a descriptor list into an aggregate validator.
    ///
    /// Duplicate names resolve last-wins: the later descriptor's rule
    /// replaces the earlier one, keeping the earlier display position.
    /// Unrecognized variants and duplicates are logged as diagnostics, never
    /// errors.
    pub fn compile(descriptors: &[FieldDescriptor]) -> Self {
        let mut ordered: Vec<&FieldDescriptor> = descriptors.iter().collect();
        ordered.sort_by_key(|d| d.row_index);

        let mut fields: Vec<CompiledField> = Vec::with_capacity(ordered.len());
        let mut index_by_name: HashMap<&str, usize> = HashMap::with_capacity(ordered.len());

        for descriptor in ordered {
            if let Variant::Other(tag) = &descriptor.variant {
                Logger::warn(
                    "unknown_variant",
                    &[("field", descriptor.name.as_str()), ("variant", tag)],
                );
            }

            let compiled = CompiledField::compile(descriptor);
            match index_by_name.get(descriptor.name.as_str()).copied() {
                Some(index) => {
                    Logger::warn("duplicate_field", &[("field", descriptor.name.as_str())]);
                    fields[index] = compiled;
                }
                None => {
                    index_by_name.insert(descriptor.name.as_str(), fields.len());
                    fields.push(compiled);
                }
            }
        }

        Self { fields }
    }

    /// Validate a submission record.
    ///
    /// Every field is evaluated; on success the coerced values are returned.
    /// Record keys that match no compiled field are ignored and never echoed
    /// into the output.
    pub fn validate(
        &self,
        record: &Map<String, Value>,
    ) -> Result<BTreeMap<String, FieldValue>, ValidationErrors> {
        let mut values = BTreeMap::new();
        let mut errors = BTreeMap::new();

        for field in &self.fields {
            match field.validate(record.get(&field.name)) {
                Ok(Some(value)) => {
                    values.insert(field.name.clone(), value);
                }
                Ok(None) => {}
                Err(issues) => {
                    errors.insert(field.name.clone(), issues);
                }
            }
        }

        if errors.is_empty() {
            Ok(values)
        } else {
            Err(ValidationErrors::new(errors))
        }
    }

    /// Default values the renderer should display, keyed by field name.
    pub fn default_values(&self) -> BTreeMap<String, FieldValue> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .rule
                    .default
                    .clone()
                    .map(|default| (field.name.clone(), default))
            })
            .collect()
    }

    /// Compiled fields in presentation order.
    pub fn fields(&self) -> &[CompiledField] {
        &self.fields
    }

    /// Look up one compiled field by name.
    pub fn field(&self, name: &str) -> Option<&CompiledField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A value is absent when the key is missing, the value is null, or the
/// value is the empty string.
fn is_absent(raw: Option<&Value>) -> bool {
    match raw {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_empty_descriptor_list_compiles_to_trivial_schema() {
        let schema = FormSchema::compile(&[]);
        assert!(schema.is_empty());
        let values = schema.validate(&Map::new()).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_fields_sorted_by_row_index() {
        let descriptors = vec![
            FieldDescriptor::new("b", "B", Variant::Input).row(2),
            FieldDescriptor::new("a", "A", Variant::Input).row(1),
        ];
        let schema = FormSchema::compile(&descriptors);
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_duplicate_name_last_wins_keeps_position() {
        let descriptors = vec![
            FieldDescriptor::new("field", "First", Variant::Input).row(0),
            FieldDescriptor::new("other", "Other", Variant::Input).row(1),
            FieldDescriptor::new("field", "Second", Variant::Textarea).row(2),
        ];
        let schema = FormSchema::compile(&descriptors);
        assert_eq!(schema.len(), 2);

        let field = schema.field("field").unwrap();
        assert_eq!(field.label, "Second");
        assert_eq!(field.variant, Variant::Textarea);
        // Earlier display position retained.
        assert_eq!(schema.fields()[0].name, "field");
    }

    #[test]
    fn test_required_absent_yields_single_issue() {
        let descriptors = vec![FieldDescriptor::new("email", "Email", Variant::Input).required()];
        let schema = FormSchema::compile(&descriptors);

        for raw in [json!({}), json!({"email": null}), json!({"email": ""})] {
            let errors = schema.validate(&record(raw)).unwrap_err();
            assert_eq!(errors.messages("email"), vec!["Email is required"]);
        }
    }

    #[test]
    fn test_optional_absent_is_accepted_and_omitted() {
        let descriptors = vec![FieldDescriptor::new("nick", "Nickname", Variant::Input)];
        let schema = FormSchema::compile(&descriptors);

        let values = schema.validate(&record(json!({}))).unwrap();
        assert!(!values.contains_key("nick"));
    }

    #[test]
    fn test_optional_present_is_fully_validated() {
        let descriptors = vec![FieldDescriptor::new("pin", "PIN", Variant::InputOtp)];
        let schema = FormSchema::compile(&descriptors);

        let errors = schema.validate(&record(json!({"pin": "12a456"}))).unwrap_err();
        assert_eq!(errors.messages("pin"), vec!["must contain only digits"]);
    }

    #[test]
    fn test_coerced_values_returned_not_raw() {
        let descriptors = vec![FieldDescriptor::new("name", "Name", Variant::Input).required()];
        let schema = FormSchema::compile(&descriptors);

        let values = schema
            .validate(&record(json!({"name": "  Ada  "})))
            .unwrap();
        assert_eq!(values["name"], FieldValue::Text("Ada".to_string()));
    }

    #[test]
    fn test_unknown_record_keys_ignored() {
        let descriptors = vec![FieldDescriptor::new("name", "Name", Variant::Input).required()];
        let schema = FormSchema::compile(&descriptors);

        let values = schema
            .validate(&record(json!({"name": "Ada", "stray": 42})))
            .unwrap();
        assert_eq!(values.len(), 1);
        assert!(!values.contains_key("stray"));
    }

    #[test]
    fn test_all_fields_evaluated_not_just_first_failure() {
        let descriptors = vec![
            FieldDescriptor::new("a", "A", Variant::Input).required(),
            FieldDescriptor::new("b", "B", Variant::InputOtp).required(),
        ];
        let schema = FormSchema::compile(&descriptors);

        let errors = schema.validate(&record(json!({"b": "12"}))).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.messages("a"), vec!["A is required"]);
        assert_eq!(errors.messages("b"), vec!["must be exactly 6 characters"]);
    }

    #[test]
    fn test_unknown_variant_compiles_to_optional_string() {
        let descriptors = vec![FieldDescriptor::new(
            "gizmo",
            "Gizmo",
            Variant::Other("Frobnicator".to_string()),
        )];
        let schema = FormSchema::compile(&descriptors);

        assert!(schema.validate(&record(json!({}))).is_ok());
        assert!(schema
            .validate(&record(json!({"gizmo": "anything at all"})))
            .is_ok());
        // Wrong shape still fails coercion.
        assert!(schema.validate(&record(json!({"gizmo": 42}))).is_err());
    }

    #[test]
    fn test_defaults_exposed_for_boolean_variants() {
        let descriptors = vec![
            FieldDescriptor::new("tos", "Terms", Variant::Checkbox).checked(true),
            FieldDescriptor::new("dark", "Dark Mode", Variant::Switch),
            FieldDescriptor::new("name", "Name", Variant::Input),
        ];
        let schema = FormSchema::compile(&descriptors);

        let defaults = schema.default_values();
        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults["tos"], FieldValue::Bool(true));
        assert_eq!(defaults["dark"], FieldValue::Bool(false));
    }
}
