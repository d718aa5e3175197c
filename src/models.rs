// src/models.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// The five datasets the backend knows how to classify. Closed set; an
/// invalid identifier can never reach the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Iris,
    Heart,
    Diabetes,
    Stroke,
    WaterPotability,
}

impl Dataset {
    pub const ALL: [Dataset; 5] = [
        Dataset::Iris,
        Dataset::Heart,
        Dataset::Diabetes,
        Dataset::Stroke,
        Dataset::WaterPotability,
    ];

    /// Wire identifier sent as `dataset_name`.
    pub fn slug(&self) -> &'static str {
        match self {
            Dataset::Iris => "iris",
            Dataset::Heart => "heart",
            Dataset::Diabetes => "diabetes",
            Dataset::Stroke => "stroke",
            Dataset::WaterPotability => "water_potability",
        }
    }

    /// Human label for the dataset dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Dataset::Iris => "Iris Dataset",
            Dataset::Heart => "Heart Disease Dataset",
            Dataset::Diabetes => "Diabetes Dataset",
            Dataset::Stroke => "Stroke Prediction Dataset",
            Dataset::WaterPotability => "Water Potability Dataset",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Body of the outbound comparison call.
#[derive(Serialize, Debug, Clone)]
pub struct ExperimentRequest {
    pub dataset_name: Dataset,
}

/// One model's scores, each a fraction in [0, 1].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// The backend's verdict, carried through to the results page unchanged.
/// `winner` stays a plain string: the server may send "SVM", "VQC", "Tie"
/// or anything else, and we round-trip it verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    pub svm_metrics: Metrics,
    pub vqc_metrics: Metrics,
    pub winner: String,
    pub execution_time_seconds: f64,
    pub dataset_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_slugs_match_wire_identifiers() {
        let slugs: Vec<&str> = Dataset::ALL.iter().map(|d| d.slug()).collect();
        assert_eq!(
            slugs,
            vec!["iris", "heart", "diabetes", "stroke", "water_potability"]
        );
    }

    #[test]
    fn dataset_serializes_to_its_slug() {
        for dataset in Dataset::ALL {
            let json = serde_json::to_string(&dataset).unwrap();
            assert_eq!(json, format!("\"{}\"", dataset.slug()));
        }
    }

    #[test]
    fn request_body_uses_dataset_name_key() {
        let body = serde_json::to_value(ExperimentRequest {
            dataset_name: Dataset::WaterPotability,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "dataset_name": "water_potability" })
        );
    }

    #[test]
    fn unknown_dataset_slug_is_rejected() {
        let parsed: std::result::Result<Dataset, _> = serde_json::from_str("\"mnist\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn experiment_result_round_trips_server_json() {
        let raw = serde_json::json!({
            "svm_metrics": { "accuracy": 0.9667, "precision": 0.9697, "recall": 0.9667, "f1_score": 0.9666 },
            "vqc_metrics": { "accuracy": 0.9333, "precision": 0.9444, "recall": 0.9333, "f1_score": 0.9327 },
            "winner": "SVM",
            "execution_time_seconds": 42.7,
            "dataset_name": "iris"
        });

        let result: ExperimentResult = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(result.winner, "SVM");
        assert_eq!(result.svm_metrics.accuracy, 0.9667);
        assert_eq!(result.vqc_metrics.f1_score, 0.9327);
        assert_eq!(result.execution_time_seconds, 42.7);
        assert_eq!(result.dataset_name, "iris");

        assert_eq!(serde_json::to_value(&result).unwrap(), raw);
    }
}
