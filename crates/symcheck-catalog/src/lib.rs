//! symcheck-catalog
//!
//! Static symptom and condition registries. Pure data plus load-time
//! validation: every symptom id a condition refers to must exist, so the
//! matching engine never has to guess at a display name for built-in data.
//!
//! A catalog can also be read from JSON with the shape
//! `{ "symptoms": [...], "conditions": [...] }`; it goes through the same
//! checks as the built-in one.

pub mod conditions;
pub mod error;
pub mod suggestions;
pub mod symptoms;
mod validate;

use std::path::Path;

use serde::{Deserialize, Serialize};
use symcheck_core::SymptomLookup;
use symcheck_core::models::condition::Condition;
use symcheck_core::models::symptom::Symptom;

pub use conditions::{ConditionCatalog, builtin_conditions};
pub use error::CatalogError;
pub use suggestions::Suggestions;
pub use symptoms::{SymptomCatalog, builtin_symptoms};

/// On-disk catalog format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub symptoms: Vec<Symptom>,
    pub conditions: Vec<Condition>,
}

/// A validated pair of symptom and condition registries.
///
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Catalog {
    symptoms: SymptomCatalog,
    conditions: ConditionCatalog,
}

impl Catalog {
    pub fn new(symptoms: Vec<Symptom>, conditions: Vec<Condition>) -> Result<Self, CatalogError> {
        let symptoms = SymptomCatalog::new(symptoms)?;
        let conditions = ConditionCatalog::new(conditions, &symptoms)?;
        validate::warn_unreferenced_symptoms(&symptoms, conditions.all());

        tracing::info!(
            symptoms = symptoms.len(),
            conditions = conditions.len(),
            "catalog loaded"
        );
        Ok(Self {
            symptoms,
            conditions,
        })
    }

    /// The catalog compiled into the crate.
    pub fn load_builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_symptoms(), builtin_conditions())
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.symptoms, file.conditions)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "reading catalog file");
        Self::from_json(&json)
    }

    pub fn symptoms(&self) -> &SymptomCatalog {
        &self.symptoms
    }

    pub fn conditions(&self) -> &ConditionCatalog {
        &self.conditions
    }

    pub fn suggestions(&self) -> Suggestions {
        Suggestions::from_conditions(self.conditions.all())
    }

    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            symptoms: self.symptoms.as_slice().to_vec(),
            conditions: self.conditions.all().to_vec(),
        }
    }
}

impl SymptomLookup for Catalog {
    fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.get(id)
    }
}
