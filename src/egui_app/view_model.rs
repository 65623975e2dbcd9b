//! Helpers to convert service results into egui-facing view structs.

use std::path::Path;

use crate::egui_app::state::Route;
use crate::form::FieldErrors;
use crate::prediction_api::{BatchPredictionResult, PredictionResult, RetrainingMetrics};
use crate::validation::Field;

pub const HIGH_RISK_LABEL: &str = "High Risk";
pub const LOW_RISK_LABEL: &str = "Low Risk";
pub const UNKNOWN_RISK_LABEL: &str = "Unknown";
const HIGH_RISK_MESSAGE: &str = "Based on the provided information, there is a high likelihood of heart disease. Please consult with a healthcare professional for a thorough evaluation.";
const LOW_RISK_MESSAGE: &str = "Based on the provided information, there is a low likelihood of heart disease. However, maintain a healthy lifestyle and regular check-ups.";

/// Display data for a single prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct RiskSummary {
    pub high_risk: bool,
    pub label: &'static str,
    pub probability_text: String,
    pub message: &'static str,
}

pub fn risk_summary(result: &PredictionResult) -> RiskSummary {
    let high_risk = result.is_high_risk();
    RiskSummary {
        high_risk,
        label: risk_label(high_risk),
        probability_text: format_probability(result.probability),
        message: if high_risk {
            HIGH_RISK_MESSAGE
        } else {
            LOW_RISK_MESSAGE
        },
    }
}

/// Probability as a percentage with two decimals, e.g. `0.87` -> `87.00%`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

fn risk_label(high_risk: bool) -> &'static str {
    if high_risk {
        HIGH_RISK_LABEL
    } else {
        LOW_RISK_LABEL
    }
}

/// One row of the batch results table.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchRow {
    pub name: String,
    /// `None` when the service returned a class other than 0 or 1.
    pub high_risk: Option<bool>,
    pub label: &'static str,
    pub probability_text: String,
}

/// Rows for the batch table, truncated to the shortest of the three sequences.
pub fn batch_rows(result: &BatchPredictionResult) -> Vec<BatchRow> {
    result
        .names
        .iter()
        .zip(&result.predictions)
        .zip(&result.probabilities)
        .map(|((name, prediction), probability)| {
            let high_risk = match prediction {
                0 => Some(false),
                1 => Some(true),
                _ => None,
            };
            BatchRow {
                name: name.clone(),
                high_risk,
                label: high_risk.map_or(UNKNOWN_RISK_LABEL, risk_label),
                probability_text: format_probability(*probability),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
}

/// Metrics table for a retrained model; scores as percentages, counts as integers.
pub fn metric_rows(metrics: &RetrainingMetrics) -> Vec<MetricRow> {
    let score = |label, value: f64| MetricRow {
        label,
        value: format_probability(value),
    };
    vec![
        score("Accuracy", metrics.accuracy),
        score("Precision", metrics.precision),
        score("Recall", metrics.recall),
        score("F1 score", metrics.f1_score),
        score("ROC AUC", metrics.roc_auc),
        MetricRow {
            label: "Training samples",
            value: metrics.training_samples.to_string(),
        },
        MetricRow {
            label: "Test samples",
            value: metrics.test_samples.to_string(),
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub route: Route,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation links with the current route highlighted.
pub fn nav_links(current: Route) -> Vec<NavLink> {
    Route::NAV_LINKS
        .iter()
        .map(|route| NavLink {
            route: *route,
            label: route.label(),
            active: *route == current,
        })
        .collect()
}

pub fn file_label(path: Option<&Path>) -> String {
    match path {
        Some(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        None => "No file selected".to_string(),
    }
}

/// Text shown in a dropdown for the current raw value.
pub fn option_choice_text(field: Field, raw: &str) -> String {
    if raw.trim().is_empty() {
        return "Select".to_string();
    }
    field
        .option_label(raw)
        .map(str::to_string)
        .unwrap_or_else(|| raw.to_string())
}

/// The single line drawn under a form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldCaption<'a> {
    Error(&'a str),
    Hint(&'static str),
}

/// A field's error when it has one, otherwise its hint.
pub fn field_caption(field: Field, errors: &FieldErrors) -> Option<FieldCaption<'_>> {
    match errors.get(field) {
        Some(error) => Some(FieldCaption::Error(error)),
        None => field.hint().map(FieldCaption::Hint),
    }
}
