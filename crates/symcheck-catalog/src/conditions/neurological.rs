use symcheck_core::models::condition::{
    Condition, GenderAffinity, MedicalAttention, MedicationEffect, Severity,
};

/// Headache, neurological and mental-health conditions.
pub(crate) fn conditions() -> Vec<Condition> {
    vec![
        Condition::new(
            "migraine",
            "Migraine",
            &["headache", "nausea", "sensitivity_to_light", "blurred_vision", "vomiting", "dizziness"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("Recurrent throbbing headaches, often one-sided, with nausea and light sensitivity.")
        .with_age_range(15.0, 55.0)
        .with_gender(GenderAffinity::Female)
        .with_typical_duration(2.0)
        .with_family_history(&["Migraine"])
        .with_medication("oral contraceptive", MedicationEffect::Positive)
        .with_medication("sumatriptan", MedicationEffect::Positive),
        Condition::new(
            "tension_headache",
            "Tension Headache",
            &["headache", "stiff_neck", "fatigue", "insomnia"],
            Severity::Mild,
            MedicalAttention::SelfCare,
        )
        .with_description("A dull, band-like headache linked to stress and muscle tension.")
        .with_age_range(20.0, 50.0)
        .with_typical_duration(1.0),
        Condition::new(
            "meningitis",
            "Meningitis",
            &["fever", "headache", "stiff_neck", "sensitivity_to_light", "confusion", "vomiting", "rash"],
            Severity::Severe,
            MedicalAttention::Immediately,
        )
        .with_description("Inflammation of the membranes around the brain and spinal cord.")
        .with_age_range(0.0, 24.0)
        .with_typical_duration(2.0),
        Condition::new(
            "generalized_anxiety",
            "Generalized Anxiety Disorder",
            &["anxiety", "restlessness", "insomnia", "fatigue", "palpitations", "muscle_aches"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("Persistent, excessive worry that interferes with daily life.")
        .with_typical_duration(180.0)
        .with_family_history(&["Anxiety", "Depression"])
        .with_related_conditions(&["Depression", "Insomnia"])
        .with_medication("caffeine", MedicationEffect::Positive)
        .with_medication("sertraline", MedicationEffect::Negative),
        Condition::new(
            "vertigo",
            "Benign Positional Vertigo",
            &["dizziness", "nausea", "vomiting", "blurred_vision"],
            Severity::Mild,
            MedicalAttention::WithinWeek,
        )
        .with_description("Brief spinning sensations triggered by head movement.")
        .with_age_range(50.0, 90.0)
        .with_related_conditions(&["Inner ear infection"]),
    ]
}
