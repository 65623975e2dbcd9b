//! Raw prediction form values and their conversion into a service request.

use std::collections::BTreeMap;

use crate::prediction_api::PredictionRequest;
use crate::validation::{self, Field};

/// Current text of every prediction input, exactly as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionForm {
    values: [String; Field::ALL.len()],
}

impl PredictionForm {
    /// Build a form from `(field, value)` pairs; unspecified fields stay empty.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (Field, &'a str)>) -> Self {
        let mut form = Self::default();
        for (field, value) in pairs {
            form.set(field, value);
        }
        form
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|value| value.trim().is_empty())
    }
}

/// Per-field error messages; a missing entry means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Drop the error for one field, typically after the user edits it.
    pub fn clear_field(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validate every field and collect all failures, not just the first.
pub fn validate_form(form: &PredictionForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::ALL {
        if let Some(message) = validation::validate(field, form.value(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Convert a fully valid form into the wire request.
pub fn build_request(form: &PredictionForm) -> Result<PredictionRequest, FieldErrors> {
    let errors = validate_form(form);
    if !errors.is_empty() {
        return Err(errors);
    }
    let number = |field: Field| validation::parse_value(form.value(field)).unwrap_or_default();
    // Enumerated values are whole numbers once they pass their rule.
    let code = |field: Field| number(field) as u8;
    Ok(PredictionRequest {
        age: number(Field::Age),
        sex: code(Field::Sex),
        chest_pain_type: code(Field::ChestPainType),
        resting_bp_s: number(Field::RestingBloodPressure),
        cholesterol: number(Field::Cholesterol),
        fasting_blood_sugar: code(Field::FastingBloodSugar),
        resting_ecg: code(Field::RestingEcg),
        max_heart_rate: number(Field::MaxHeartRate),
        exercise_angina: code(Field::ExerciseAngina),
        oldpeak: number(Field::Oldpeak),
        st_slope: code(Field::StSlope),
    })
}

/// Test fixture: a form that passes every rule.
#[cfg(test)]
pub(crate) fn valid_form() -> PredictionForm {
    PredictionForm::with_values([
        (Field::Age, "54"),
        (Field::Sex, "1"),
        (Field::ChestPainType, "3"),
        (Field::RestingBloodPressure, "150"),
        (Field::Cholesterol, "195"),
        (Field::FastingBloodSugar, "0"),
        (Field::RestingEcg, "0"),
        (Field::MaxHeartRate, "122"),
        (Field::ExerciseAngina, "0"),
        (Field::Oldpeak, "0.5"),
        (Field::StSlope, "1"),
    ])
}
