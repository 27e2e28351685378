//! Variant rule table
//!
//! Pure mapping from widget variant to base rule: the value kind a field
//! expects, the constraints that apply to a present value, whether text is
//! trimmed, and the default the renderer should display. Unrecognized
//! variants map to an unconstrained text rule, never an error.

use crate::descriptor::{FieldDescriptor, Variant};

use super::constraint::Constraint;
use super::value::{FieldValue, ValueKind};

/// Language codes accepted by the Combobox variant.
pub const LANGUAGE_CODES: &[&str] = &["en", "fr", "de", "es", "pt", "ru", "ja", "ko", "zh"];

/// E.164-style phone pattern.
pub const PHONE_PATTERN: &str = r"^\+?[1-9]\d{1,14}$";

const OTP_DIGITS_PATTERN: &str = r"^[0-9]*$";
const OTP_LENGTH: usize = 6;
const PASSWORD_MIN_CHARS: usize = 8;
const TEXTAREA_MAX_CHARS: usize = 1000;
const MULTI_SELECT_MAX_ITEMS: usize = 10;
const TAGS_MAX_ITEMS: usize = 20;
const TAG_MAX_CHARS: usize = 50;
const MAX_FILES: usize = 5;
const MAX_FILE_BYTES: u64 = 4 * 1024 * 1024;
const SLIDER_MIN: f64 = 0.0;
const SLIDER_MAX: f64 = 100.0;
const SLIDER_STEP: f64 = 1.0;
const SIGNATURE_PREFIX: &str = "data:image/";

/// Base rule for one field: everything the compiler needs besides the
/// required/optional composition.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub kind: ValueKind,
    pub constraints: Vec<Constraint>,
    /// Trim whitespace from text before constraints run.
    pub trim: bool,
    /// Default value the renderer should display.
    pub default: Option<FieldValue>,
}

impl FieldRule {
    fn new(kind: ValueKind, constraints: Vec<Constraint>) -> Self {
        Self {
            kind,
            constraints,
            trim: false,
            default: None,
        }
    }

    fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    fn with_default(mut self, default: FieldValue) -> Self {
        self.default = Some(default);
        self
    }
}

/// Build the base rule for a descriptor's variant.
///
/// Slider consults the descriptor's `min`/`max`/`step` (defaults 0, 100, 1);
/// Checkbox and Switch consult `checked`; every other variant ignores the
/// numeric fields entirely.
pub fn base_rule(descriptor: &FieldDescriptor) -> FieldRule {
    match &descriptor.variant {
        Variant::Checkbox | Variant::Switch => FieldRule::new(ValueKind::Bool, Vec::new())
            .with_default(FieldValue::Bool(descriptor.checked)),

        Variant::Combobox => FieldRule::new(
            ValueKind::Text,
            vec![
                Constraint::NonEmpty,
                Constraint::OneOf {
                    choices: LANGUAGE_CODES,
                },
            ],
        ),

        Variant::DatePicker | Variant::DatetimePicker | Variant::SmartDatetimeInput => {
            // Parsing IS the rule: coercion rejects anything that is not a date.
            FieldRule::new(ValueKind::Date, Vec::new())
        }

        Variant::FileInput => FieldRule::new(
            ValueKind::FileList,
            vec![
                Constraint::Items {
                    min: None,
                    max: Some(MAX_FILES),
                },
                Constraint::FileSize {
                    max_bytes: MAX_FILE_BYTES,
                },
            ],
        ),

        Variant::Input => {
            FieldRule::new(ValueKind::Text, vec![Constraint::NonEmpty]).trimmed()
        }

        Variant::InputOtp => FieldRule::new(
            ValueKind::Text,
            vec![
                Constraint::Chars {
                    min: Some(OTP_LENGTH),
                    max: Some(OTP_LENGTH),
                },
                Constraint::Pattern {
                    regex: regex::Regex::new(OTP_DIGITS_PATTERN)
                        .expect("OTP digits pattern is valid"),
                    message: "must contain only digits",
                },
            ],
        ),

        Variant::LocationInput => {
            FieldRule::new(ValueKind::Location, vec![Constraint::CountryRequired])
        }

        Variant::MultiSelect => FieldRule::new(
            ValueKind::TextList,
            vec![Constraint::Items {
                min: Some(1),
                max: Some(MULTI_SELECT_MAX_ITEMS),
            }],
        ),

        Variant::Password => FieldRule::new(
            ValueKind::Text,
            vec![
                Constraint::Chars {
                    min: Some(PASSWORD_MIN_CHARS),
                    max: None,
                },
                Constraint::CharClass {
                    test: char::is_uppercase,
                    message: "must contain at least one uppercase letter",
                },
                Constraint::CharClass {
                    test: char::is_lowercase,
                    message: "must contain at least one lowercase letter",
                },
                Constraint::CharClass {
                    test: |c| c.is_ascii_digit(),
                    message: "must contain at least one digit",
                },
                Constraint::CharClass {
                    test: |c| !c.is_alphanumeric(),
                    message: "must contain at least one special character",
                },
            ],
        ),

        Variant::Phone => FieldRule::new(
            ValueKind::Text,
            vec![
                Constraint::NonEmpty,
                Constraint::Pattern {
                    regex: regex::Regex::new(PHONE_PATTERN).expect("phone pattern is valid"),
                    message: "must be a valid phone number",
                },
            ],
        ),

        Variant::Select => FieldRule::new(ValueKind::Text, vec![Constraint::NonEmpty]),

        Variant::SignatureInput => FieldRule::new(
            ValueKind::Text,
            vec![
                Constraint::NonEmpty,
                Constraint::Prefix {
                    prefix: SIGNATURE_PREFIX,
                    message: "must be a data-URI encoded image",
                },
            ],
        ),

        Variant::Slider => {
            let min = descriptor.min.unwrap_or(SLIDER_MIN);
            let max = descriptor.max.unwrap_or(SLIDER_MAX);
            let step = descriptor.step.unwrap_or(SLIDER_STEP);
            FieldRule::new(
                ValueKind::Number,
                vec![
                    Constraint::Range { min, max },
                    Constraint::Step { step, origin: min },
                ],
            )
        }

        Variant::TagsInput => FieldRule::new(
            ValueKind::TextList,
            vec![
                Constraint::Items {
                    min: Some(1),
                    max: Some(TAGS_MAX_ITEMS),
                },
                Constraint::ItemChars { max: TAG_MAX_CHARS },
            ],
        ),

        Variant::Textarea => FieldRule::new(
            ValueKind::Text,
            vec![Constraint::Chars {
                min: Some(1),
                max: Some(TEXTAREA_MAX_CHARS),
            }],
        )
        .trimmed(),

        Variant::Other(_) => FieldRule::new(ValueKind::Text, Vec::new()),
    }
}
