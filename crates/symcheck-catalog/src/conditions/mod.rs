//! The condition registry and its built-in entries, one file per body
//! system.

mod digestive;
mod musculoskeletal;
mod neurological;
mod respiratory;
mod skin;
mod systemic;

use symcheck_core::models::condition::Condition;

use crate::error::CatalogError;
use crate::symptoms::SymptomCatalog;
use crate::validate;

/// Ordered, validated condition records.
///
/// There is no index by symptom: matching walks every condition, and the
/// catalog is small enough that this is cheap.
#[derive(Debug, Clone)]
pub struct ConditionCatalog {
    conditions: Vec<Condition>,
}

impl ConditionCatalog {
    /// Validate `conditions` against `symptoms` and wrap them.
    ///
    /// Duplicate condition ids are kept as separate entries and only logged.
    pub fn new(
        conditions: Vec<Condition>,
        symptoms: &SymptomCatalog,
    ) -> Result<Self, CatalogError> {
        for condition in &conditions {
            validate::condition(condition, symptoms)?;
        }
        validate::warn_duplicate_conditions(&conditions);
        Ok(Self { conditions })
    }

    pub fn all(&self) -> &[Condition] {
        &self.conditions
    }

    /// First condition with the given id.
    pub fn get(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// The built-in condition table.
pub fn builtin_conditions() -> Vec<Condition> {
    let mut conditions = Vec::new();
    conditions.extend(respiratory::conditions());
    conditions.extend(digestive::conditions());
    conditions.extend(neurological::conditions());
    conditions.extend(skin::conditions());
    conditions.extend(musculoskeletal::conditions());
    conditions.extend(systemic::conditions());
    conditions
}
