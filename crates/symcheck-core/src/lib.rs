//! symcheck-core
//!
//! Pure domain types for the symptom checker: symptoms, conditions, the
//! user's self-assessment query and the scored match result. No catalog data
//! and no scoring logic live here; this is the shared vocabulary of the
//! other crates and of the browser UI (via ts-rs bindings).

pub mod display;
pub mod error;
pub mod models;

use models::symptom::Symptom;

/// Resolves symptom ids to catalog records.
///
/// Implemented by the symptom catalog; the matching engine only needs this
/// much of it to turn ids into display names.
pub trait SymptomLookup {
    fn symptom(&self, id: &str) -> Option<&Symptom>;

    /// Display name for `id`, if the symptom is known.
    fn symptom_name(&self, id: &str) -> Option<&str> {
        self.symptom(id).map(|s| s.name.as_str())
    }
}

impl SymptomLookup for [Symptom] {
    fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.iter().find(|s| s.id == id)
    }
}

impl SymptomLookup for Vec<Symptom> {
    fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.as_slice().symptom(id)
    }
}
