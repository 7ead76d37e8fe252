use symcheck_core::models::condition::{
    Condition, GenderAffinity, MedicalAttention, MedicationEffect, Severity,
};

/// Metabolic, cardiac, urinary and whole-body conditions.
pub(crate) fn conditions() -> Vec<Condition> {
    vec![
        Condition::new(
            "type_2_diabetes",
            "Type 2 Diabetes",
            &["excessive_thirst", "frequent_urination", "fatigue", "blurred_vision", "weight_loss"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("A chronic condition affecting how the body regulates blood sugar.")
        .with_age_range(45.0, 100.0)
        .with_typical_duration(90.0)
        .with_family_history(&["Diabetes"])
        .with_related_conditions(&["Obesity", "High blood pressure", "Gestational diabetes"])
        .with_medication("corticosteroid", MedicationEffect::Positive),
        Condition::new(
            "hypothyroidism",
            "Hypothyroidism",
            &["fatigue", "weight_gain", "cold_intolerance", "dry_skin", "constipation"],
            Severity::Mild,
            MedicalAttention::WithinWeek,
        )
        .with_description("An underactive thyroid gland that slows metabolism.")
        .with_age_range(40.0, 100.0)
        .with_gender(GenderAffinity::Female)
        .with_typical_duration(90.0)
        .with_family_history(&["Thyroid disease", "Autoimmune disease"])
        .with_medication("lithium", MedicationEffect::Positive)
        .with_medication("levothyroxine", MedicationEffect::Negative),
        Condition::new(
            "uti",
            "Urinary Tract Infection",
            &["painful_urination", "frequent_urination", "cloudy_urine", "abdominal_pain", "fever"],
            Severity::Mild,
            MedicalAttention::Within24Hours,
        )
        .with_description("A bacterial infection of the bladder or urethra.")
        .with_gender(GenderAffinity::Female)
        .with_typical_duration(5.0)
        .with_related_conditions(&["Diabetes", "Kidney stones"]),
        Condition::new(
            "mononucleosis",
            "Infectious Mononucleosis",
            &["fatigue", "sore_throat", "fever", "swollen_lymph_nodes", "headache", "rash"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("The \"kissing disease\": prolonged fatigue caused by Epstein-Barr virus.")
        .with_age_range(15.0, 24.0)
        .with_typical_duration(28.0),
        Condition::new(
            "heart_attack",
            "Heart Attack",
            &["chest_pain", "shortness_of_breath", "sweating", "nausea", "dizziness", "palpitations"],
            Severity::Severe,
            MedicalAttention::Immediately,
        )
        .with_description("Blocked blood flow to the heart muscle. Call emergency services.")
        .with_age_range(45.0, 100.0)
        .with_gender(GenderAffinity::Male)
        .with_family_history(&["Heart disease", "High cholesterol", "Diabetes"])
        .with_related_conditions(&["High blood pressure", "High cholesterol", "Diabetes", "Obesity"])
        .with_medication("aspirin", MedicationEffect::Negative),
        Condition::new(
            "tuberculosis",
            "Tuberculosis",
            &["productive_cough", "night_sweats", "weight_loss", "fever", "fatigue", "chest_pain"],
            Severity::Severe,
            MedicalAttention::Within24Hours,
        )
        .with_description("A bacterial lung infection with a cough lasting three weeks or more.")
        .with_typical_duration(21.0)
        .with_related_conditions(&["HIV", "Diabetes"]),
        Condition::new(
            "panic_attack",
            "Panic Attack",
            &["palpitations", "chest_tightness", "shortness_of_breath", "sweating", "dizziness", "anxiety"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("A sudden surge of intense fear with physical symptoms.")
        .with_age_range(15.0, 45.0)
        .with_typical_duration(1.0)
        .with_related_conditions(&["Anxiety", "Depression"]),
        Condition::new(
            "dehydration",
            "Dehydration",
            &["excessive_thirst", "dizziness", "fatigue", "headache", "confusion"],
            Severity::Moderate,
            MedicalAttention::Within24Hours,
        )
        .with_description("Not enough fluid in the body, often after vomiting, diarrhoea or heat.")
        .with_typical_duration(1.0)
        .with_medication("diuretic", MedicationEffect::Positive),
    ]
}
