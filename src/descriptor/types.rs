//! Field descriptor types
//!
//! A field descriptor is the atomic unit consumed by the schema compiler:
//! one entry per form input, tagged with the widget variant that selects its
//! validation rules. Descriptors arrive as camelCase JSON from the generator
//! or from static files and are never mutated after parsing.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Widget variants recognized by the rule table.
///
/// The enumeration is closed: every recognized tag is a unit variant, and any
/// other tag is preserved verbatim in `Other`. Dispatch over variants is an
/// exhaustive match, so adding a variant is a compile-time change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Variant {
    Checkbox,
    Combobox,
    DatePicker,
    DatetimePicker,
    FileInput,
    Input,
    InputOtp,
    LocationInput,
    MultiSelect,
    Password,
    Phone,
    Select,
    SignatureInput,
    Slider,
    SmartDatetimeInput,
    Switch,
    TagsInput,
    Textarea,
    /// Unrecognized tag, kept verbatim. Compiles to a generic string rule.
    Other(String),
}

impl Variant {
    /// Resolve a tag string to a variant. Unrecognized tags are preserved
    /// in `Other` and never rejected.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Checkbox" => Variant::Checkbox,
            "Combobox" => Variant::Combobox,
            "Date Picker" => Variant::DatePicker,
            "Datetime Picker" => Variant::DatetimePicker,
            "File Input" => Variant::FileInput,
            "Input" => Variant::Input,
            "Input OTP" => Variant::InputOtp,
            "Location Input" => Variant::LocationInput,
            "Multi Select" => Variant::MultiSelect,
            "Password" => Variant::Password,
            "Phone" => Variant::Phone,
            "Select" => Variant::Select,
            "Signature Input" => Variant::SignatureInput,
            "Slider" => Variant::Slider,
            "Smart Datetime Input" => Variant::SmartDatetimeInput,
            "Switch" => Variant::Switch,
            "Tags Input" => Variant::TagsInput,
            "Textarea" => Variant::Textarea,
            other => Variant::Other(other.to_string()),
        }
    }

    /// Returns the canonical tag string for this variant.
    pub fn tag(&self) -> &str {
        match self {
            Variant::Checkbox => "Checkbox",
            Variant::Combobox => "Combobox",
            Variant::DatePicker => "Date Picker",
            Variant::DatetimePicker => "Datetime Picker",
            Variant::FileInput => "File Input",
            Variant::Input => "Input",
            Variant::InputOtp => "Input OTP",
            Variant::LocationInput => "Location Input",
            Variant::MultiSelect => "Multi Select",
            Variant::Password => "Password",
            Variant::Phone => "Phone",
            Variant::Select => "Select",
            Variant::SignatureInput => "Signature Input",
            Variant::Slider => "Slider",
            Variant::SmartDatetimeInput => "Smart Datetime Input",
            Variant::Switch => "Switch",
            Variant::TagsInput => "Tags Input",
            Variant::Textarea => "Textarea",
            Variant::Other(tag) => tag,
        }
    }

    /// True for the 18 recognized tags, false for `Other`.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Variant::Other(_))
    }

    /// All recognized tags, in catalogue order.
    pub fn recognized_tags() -> &'static [&'static str] {
        &[
            "Checkbox",
            "Combobox",
            "Date Picker",
            "Datetime Picker",
            "File Input",
            "Input",
            "Input OTP",
            "Location Input",
            "Multi Select",
            "Password",
            "Phone",
            "Select",
            "Signature Input",
            "Slider",
            "Smart Datetime Input",
            "Switch",
            "Tags Input",
            "Textarea",
        ]
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Variant::from_tag(&tag))
    }
}

/// One form field as described by the generator.
///
/// `name` keys the field in the submission record; `variant` drives rule
/// selection. `min`/`max`/`step` are consulted only by Slider. `locale`,
/// `hour12` and `className` are display hints carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub variant: Variant,
    #[serde(default)]
    pub required: bool,
    /// Default value for boolean-valued variants (Checkbox, Switch).
    #[serde(default)]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour12: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Ascending presentation order. Never affects validation semantics.
    #[serde(default)]
    pub row_index: u32,
}

impl FieldDescriptor {
    /// Create a descriptor with only the identifying fields set.
    pub fn new(name: impl Into<String>, label: impl Into<String>, variant: Variant) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            placeholder: None,
            variant,
            required: false,
            checked: false,
            min: None,
            max: None,
            step: None,
            locale: None,
            hour12: None,
            class_name: None,
            row_index: 0,
        }
    }

    /// Mark the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the boolean default used by Checkbox and Switch.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the Slider bounds and step.
    pub fn bounds(mut self, min: f64, max: f64, step: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self.step = Some(step);
        self
    }

    /// Set the presentation row.
    pub fn row(mut self, index: u32) -> Self {
        self.row_index = index;
        self
    }
}
