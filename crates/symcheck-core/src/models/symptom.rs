use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Body-system grouping used to lay out the symptom picker.
///
/// Declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SymptomCategory {
    General,
    Head,
    Respiratory,
    Digestive,
    Skin,
    Musculoskeletal,
    Other,
}

impl SymptomCategory {
    pub const ALL: [SymptomCategory; 7] = [
        SymptomCategory::General,
        SymptomCategory::Head,
        SymptomCategory::Respiratory,
        SymptomCategory::Digestive,
        SymptomCategory::Skin,
        SymptomCategory::Musculoskeletal,
        SymptomCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomCategory::General => "general",
            SymptomCategory::Head => "head",
            SymptomCategory::Respiratory => "respiratory",
            SymptomCategory::Digestive => "digestive",
            SymptomCategory::Skin => "skin",
            SymptomCategory::Musculoskeletal => "musculoskeletal",
            SymptomCategory::Other => "other",
        }
    }

    /// Heading shown above the category in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            SymptomCategory::General => "General",
            SymptomCategory::Head => "Head & Neurological",
            SymptomCategory::Respiratory => "Respiratory",
            SymptomCategory::Digestive => "Digestive",
            SymptomCategory::Skin => "Skin",
            SymptomCategory::Musculoskeletal => "Muscles & Joints",
            SymptomCategory::Other => "Other",
        }
    }
}

impl fmt::Display for SymptomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymptomCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymptomCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "symptom category",
                value: s.to_string(),
            })
    }
}

/// An atomic reported sign or complaint, referenced from conditions by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub category: SymptomCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
}

impl Symptom {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: SymptomCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
