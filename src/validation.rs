//! Static validation table for the eleven prediction inputs.
//!
//! Every field has exactly one rule: an inclusive numeric range or a closed
//! set of encoded values. Input arrives as the raw text typed or selected by
//! the user and is parsed as `f64`; text that is not a finite number fails the
//! field's rule.

use std::fmt;

/// Message returned for any empty field, regardless of its rule.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// One of the eleven prediction inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Age,
    Sex,
    ChestPainType,
    RestingBloodPressure,
    Cholesterol,
    FastingBloodSugar,
    RestingEcg,
    MaxHeartRate,
    ExerciseAngina,
    Oldpeak,
    StSlope,
}

/// Validation rule attached to a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldRule {
    /// Inclusive numeric range.
    Range { min: f64, max: f64 },
    /// Closed enumeration of encoded values.
    Options(&'static [f64]),
}

/// A selectable value for an enumerated field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldOption {
    /// Encoded value as it is stored in the form.
    pub value: &'static str,
    /// Human-readable label shown in the picker.
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> FieldOption {
    FieldOption { value, label }
}

const BINARY: &[f64] = &[0.0, 1.0];

const SEX_OPTIONS: &[FieldOption] = &[option("1", "Male"), option("0", "Female")];
const CHEST_PAIN_OPTIONS: &[FieldOption] = &[
    option("1", "Typical Angina"),
    option("2", "Atypical Angina"),
    option("3", "Non-anginal Pain"),
    option("4", "Asymptomatic"),
];
const FASTING_BLOOD_SUGAR_OPTIONS: &[FieldOption] = &[
    option("1", "Greater than 120 mg/dl"),
    option("0", "Less than or equal to 120 mg/dl"),
];
const RESTING_ECG_OPTIONS: &[FieldOption] = &[
    option("0", "Normal"),
    option("1", "ST-T Wave Abnormality"),
    option("2", "Left Ventricular Hypertrophy"),
];
const YES_NO_OPTIONS: &[FieldOption] = &[option("1", "Yes"), option("0", "No")];
const ST_SLOPE_OPTIONS: &[FieldOption] = &[
    option("1", "Upsloping"),
    option("2", "Flat"),
    option("3", "Downsloping"),
];

impl Field {
    /// All fields in form and wire order.
    pub const ALL: [Field; 11] = [
        Field::Age,
        Field::Sex,
        Field::ChestPainType,
        Field::RestingBloodPressure,
        Field::Cholesterol,
        Field::FastingBloodSugar,
        Field::RestingEcg,
        Field::MaxHeartRate,
        Field::ExerciseAngina,
        Field::Oldpeak,
        Field::StSlope,
    ];

    /// Position of the field inside [`Field::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// JSON key used by the prediction service.
    pub fn wire_name(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Sex => "sex",
            Field::ChestPainType => "chest pain type",
            Field::RestingBloodPressure => "resting bp s",
            Field::Cholesterol => "cholesterol",
            Field::FastingBloodSugar => "fasting blood sugar",
            Field::RestingEcg => "resting ecg",
            Field::MaxHeartRate => "max heart rate",
            Field::ExerciseAngina => "exercise angina",
            Field::Oldpeak => "oldpeak",
            Field::StSlope => "ST slope",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::ChestPainType => "Chest Pain Type",
            Field::RestingBloodPressure => "Resting Blood Pressure",
            Field::Cholesterol => "Cholesterol",
            Field::FastingBloodSugar => "Fasting Blood Sugar",
            Field::RestingEcg => "Resting ECG",
            Field::MaxHeartRate => "Maximum Heart Rate",
            Field::ExerciseAngina => "Exercise Induced Angina",
            Field::Oldpeak => "ST Depression (Oldpeak)",
            Field::StSlope => "ST Slope",
        }
    }

    /// Optional helper line shown under the input.
    pub fn hint(self) -> Option<&'static str> {
        match self {
            Field::Age => Some("Age in years"),
            Field::ChestPainType => Some("Type of chest pain experienced"),
            Field::RestingBloodPressure => Some("In mm Hg"),
            Field::Cholesterol => Some("Serum cholesterol in mg/dl"),
            Field::RestingEcg => Some("Results of electrocardiogram while at rest"),
            Field::MaxHeartRate => Some("Maximum heart rate achieved"),
            Field::Oldpeak => Some("ST depression induced by exercise relative to rest"),
            Field::StSlope => Some("Slope of the peak exercise ST segment"),
            Field::Sex | Field::FastingBloodSugar | Field::ExerciseAngina => None,
        }
    }

    pub fn rule(self) -> FieldRule {
        match self {
            Field::Age => FieldRule::Range { min: 0.0, max: 120.0 },
            Field::Sex => FieldRule::Options(BINARY),
            Field::ChestPainType => FieldRule::Options(&[1.0, 2.0, 3.0, 4.0]),
            Field::RestingBloodPressure => FieldRule::Range { min: 80.0, max: 200.0 },
            Field::Cholesterol => FieldRule::Range { min: 100.0, max: 600.0 },
            Field::FastingBloodSugar => FieldRule::Options(BINARY),
            Field::RestingEcg => FieldRule::Options(&[0.0, 1.0, 2.0]),
            Field::MaxHeartRate => FieldRule::Range { min: 60.0, max: 220.0 },
            Field::ExerciseAngina => FieldRule::Options(BINARY),
            Field::Oldpeak => FieldRule::Range { min: 0.0, max: 10.0 },
            Field::StSlope => FieldRule::Options(&[1.0, 2.0, 3.0]),
        }
    }

    /// Message shown when the field's rule rejects the value.
    pub fn message(self) -> &'static str {
        match self {
            Field::Age => "Age must be between 0 and 120",
            Field::Sex => "Please select a valid sex",
            Field::ChestPainType => "Please select a valid chest pain type",
            Field::RestingBloodPressure => {
                "Resting blood pressure must be between 80 and 200 mm Hg"
            }
            Field::Cholesterol => "Cholesterol must be between 100 and 600 mg/dl",
            Field::FastingBloodSugar => "Please select a valid fasting blood sugar value",
            Field::RestingEcg => "Please select a valid resting ECG result",
            Field::MaxHeartRate => "Maximum heart rate must be between 60 and 220",
            Field::ExerciseAngina => "Please select whether exercise induced angina occurred",
            Field::Oldpeak => "ST depression must be between 0 and 10",
            Field::StSlope => "Please select a valid ST slope",
        }
    }

    /// Picker entries for enumerated fields; empty for range fields.
    pub fn options(self) -> &'static [FieldOption] {
        match self {
            Field::Sex => SEX_OPTIONS,
            Field::ChestPainType => CHEST_PAIN_OPTIONS,
            Field::FastingBloodSugar => FASTING_BLOOD_SUGAR_OPTIONS,
            Field::RestingEcg => RESTING_ECG_OPTIONS,
            Field::ExerciseAngina => YES_NO_OPTIONS,
            Field::StSlope => ST_SLOPE_OPTIONS,
            Field::Age
            | Field::RestingBloodPressure
            | Field::Cholesterol
            | Field::MaxHeartRate
            | Field::Oldpeak => &[],
        }
    }

    /// Label of the option matching `raw`, if any.
    pub fn option_label(self, raw: &str) -> Option<&'static str> {
        self.options()
            .iter()
            .find(|option| option.value == raw.trim())
            .map(|option| option.label)
    }

    /// Whether the field is picked from a closed set rather than typed.
    pub fn is_enumerated(self) -> bool {
        matches!(self.rule(), FieldRule::Options(_))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FieldRule {
    /// Whether an already-parsed value satisfies the rule.
    pub fn accepts(self, value: f64) -> bool {
        match self {
            FieldRule::Range { min, max } => min <= value && value <= max,
            FieldRule::Options(allowed) => allowed.iter().any(|candidate| *candidate == value),
        }
    }
}

/// Parse raw form text into a finite number.
pub fn parse_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Validate one raw input, returning the error message if it is rejected.
pub fn validate(field: Field, raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return Some(REQUIRED_MESSAGE.to_string());
    }
    match parse_value(raw) {
        Some(value) if field.rule().accepts(value) => None,
        _ => Some(field.message().to_string()),
    }
}
