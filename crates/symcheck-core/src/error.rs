use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid age: {0:?} is not a number")]
    InvalidAge(String),

    #[error("at least one symptom must be selected")]
    NoSymptoms,

    #[error("unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}
