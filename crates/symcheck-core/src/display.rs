//! Display text and color tokens for urgency and severity.
//!
//! The matches are exhaustive over closed enums, so there is no fallback
//! branch to reach at runtime; adding a variant fails to compile here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::condition::{Condition, MedicalAttention, Severity};

pub fn medical_attention_text(level: MedicalAttention) -> &'static str {
    match level {
        MedicalAttention::Immediately => "Seek immediate medical attention",
        MedicalAttention::Within24Hours => "See a doctor within 24 hours",
        MedicalAttention::WithinWeek => "Schedule an appointment within a week",
        MedicalAttention::SelfCare => "Self-care is usually sufficient",
    }
}

pub fn medical_attention_color(level: MedicalAttention) -> &'static str {
    match level {
        MedicalAttention::Immediately => "red",
        MedicalAttention::Within24Hours => "orange",
        MedicalAttention::WithinWeek => "yellow",
        MedicalAttention::SelfCare => "green",
    }
}

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Mild => "green",
        Severity::Moderate => "yellow",
        Severity::Severe => "red",
    }
}

impl MedicalAttention {
    pub fn text(&self) -> &'static str {
        medical_attention_text(*self)
    }

    pub fn color(&self) -> &'static str {
        medical_attention_color(*self)
    }
}

impl Severity {
    pub fn color(&self) -> &'static str {
        severity_color(*self)
    }
}

/// Pre-rendered display fields for one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayInfo {
    pub attention_text: String,
    pub attention_color: String,
    pub severity_color: String,
}

impl DisplayInfo {
    pub fn for_condition(condition: &Condition) -> Self {
        Self {
            attention_text: condition.seek_medical_attention.text().to_string(),
            attention_color: condition.seek_medical_attention.color().to_string(),
            severity_color: condition.severity.color().to_string(),
        }
    }
}
