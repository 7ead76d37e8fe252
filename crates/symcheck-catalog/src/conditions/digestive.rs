use symcheck_core::models::condition::{Condition, MedicalAttention, MedicationEffect, Severity};

pub(crate) fn conditions() -> Vec<Condition> {
    vec![
        Condition::new(
            "gastroenteritis",
            "Gastroenteritis (Stomach Flu)",
            &["nausea", "vomiting", "diarrhea", "abdominal_pain", "fever"],
            Severity::Mild,
            MedicalAttention::SelfCare,
        )
        .with_description("Inflammation of the stomach and intestines, usually viral.")
        .with_typical_duration(3.0),
        Condition::new(
            "food_poisoning",
            "Food Poisoning",
            &["nausea", "vomiting", "diarrhea", "abdominal_pain", "chills"],
            Severity::Moderate,
            MedicalAttention::Within24Hours,
        )
        .with_description("Illness caused by contaminated food; symptoms start within hours.")
        .with_typical_duration(2.0),
        Condition::new(
            "gerd",
            "Gastroesophageal Reflux (GERD)",
            &["heartburn", "chest_pain", "difficulty_swallowing", "cough", "nausea"],
            Severity::Mild,
            MedicalAttention::WithinWeek,
        )
        .with_description("Stomach acid flowing back into the oesophagus.")
        .with_age_range(30.0, 70.0)
        .with_related_conditions(&["Obesity", "Hiatal hernia"])
        .with_medication("ibuprofen", MedicationEffect::Positive)
        .with_medication("omeprazole", MedicationEffect::Negative),
        Condition::new(
            "ibs",
            "Irritable Bowel Syndrome",
            &["abdominal_pain", "bloating", "diarrhea", "constipation"],
            Severity::Mild,
            MedicalAttention::WithinWeek,
        )
        .with_description("A chronic disorder of the large intestine affecting bowel habits.")
        .with_age_range(18.0, 50.0)
        .with_typical_duration(90.0)
        .with_family_history(&["IBS"])
        .with_related_conditions(&["Anxiety", "Depression"]),
        Condition::new(
            "appendicitis",
            "Appendicitis",
            &["lower_right_abdominal_pain", "abdominal_pain", "nausea", "vomiting", "fever", "loss_of_appetite"],
            Severity::Severe,
            MedicalAttention::Immediately,
        )
        .with_description("Inflammation of the appendix; a surgical emergency.")
        .with_age_range(10.0, 30.0)
        .with_typical_duration(1.0),
    ]
}
