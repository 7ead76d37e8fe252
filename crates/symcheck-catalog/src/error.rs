use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate symptom id: {0}")]
    DuplicateSymptom(String),

    #[error("condition '{condition_id}' references unknown symptom '{symptom_id}'")]
    DanglingSymptom {
        condition_id: String,
        symptom_id: String,
    },

    #[error("condition '{condition_id}' lists symptom '{symptom_id}' more than once")]
    RepeatedSymptom {
        condition_id: String,
        symptom_id: String,
    },

    #[error("condition '{0}' lists no symptoms")]
    NoSymptoms(String),

    #[error("condition '{condition_id}' has an invalid age range [{min}, {max}]")]
    InvalidAgeRange {
        condition_id: String,
        min: f64,
        max: f64,
    },

    #[error("condition '{condition_id}' has a non-positive typical duration ({days} days)")]
    InvalidDuration { condition_id: String, days: f64 },

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
