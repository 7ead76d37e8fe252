use symcheck_core::models::condition::{Condition, MedicalAttention, MedicationEffect, Severity};

pub(crate) fn conditions() -> Vec<Condition> {
    vec![
        Condition::new(
            "contact_dermatitis",
            "Contact Dermatitis",
            &["rash", "itching", "skin_redness", "blisters", "skin_burning"],
            Severity::Mild,
            MedicalAttention::SelfCare,
        )
        .with_description("A skin reaction to something it touched, such as nickel or a plant.")
        .with_typical_duration(14.0)
        .with_allergies(&["Nickel", "Latex", "Fragrance"]),
        Condition::new(
            "eczema",
            "Eczema (Atopic Dermatitis)",
            &["dry_skin", "itching", "rash", "skin_redness"],
            Severity::Mild,
            MedicalAttention::WithinWeek,
        )
        .with_description("A chronic condition that makes skin dry, red and itchy.")
        .with_age_range(0.0, 12.0)
        .with_family_history(&["Eczema", "Asthma", "Allergies"])
        .with_related_conditions(&["Asthma", "Allergies"]),
        Condition::new(
            "anaphylaxis",
            "Severe Allergic Reaction (Anaphylaxis)",
            &["hives", "facial_swelling", "shortness_of_breath", "wheezing", "dizziness", "vomiting"],
            Severity::Severe,
            MedicalAttention::Immediately,
        )
        .with_description("A life-threatening allergic reaction that needs emergency treatment.")
        .with_typical_duration(1.0)
        .with_related_conditions(&["Allergies", "Asthma"])
        .with_medication("penicillin", MedicationEffect::Positive)
        .with_medication("epinephrine", MedicationEffect::Positive)
        .with_allergies(&["Peanuts", "Tree nuts", "Shellfish", "Penicillin", "Bee stings", "Latex"]),
        Condition::new(
            "shingles",
            "Shingles",
            &["skin_burning", "rash", "blisters", "itching", "fever", "fatigue"],
            Severity::Moderate,
            MedicalAttention::Within24Hours,
        )
        .with_description("A painful, one-sided blistering rash caused by the chickenpox virus.")
        .with_age_range(50.0, 100.0)
        .with_typical_duration(21.0)
        .with_related_conditions(&["Chickenpox"])
        .with_medication("prednisone", MedicationEffect::Positive),
    ]
}
