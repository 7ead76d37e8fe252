use symcheck_core::models::condition::{
    Condition, GenderAffinity, MedicalAttention, MedicationEffect, Severity,
};

/// Upper and lower respiratory tract conditions.
pub(crate) fn conditions() -> Vec<Condition> {
    vec![
        Condition::new(
            "common_cold",
            "Common Cold",
            &["runny_nose", "nasal_congestion", "sneezing", "sore_throat", "cough", "fatigue"],
            Severity::Mild,
            MedicalAttention::SelfCare,
        )
        .with_description("A viral infection of the nose and throat that usually clears on its own.")
        .with_gender(GenderAffinity::Any)
        .with_typical_duration(7.0),
        Condition::new(
            "influenza",
            "Influenza (Flu)",
            &["fever", "chills", "muscle_aches", "fatigue", "cough", "headache", "sore_throat"],
            Severity::Moderate,
            MedicalAttention::Within24Hours,
        )
        .with_description("A contagious viral infection with sudden fever and body aches.")
        .with_gender(GenderAffinity::Any)
        .with_typical_duration(7.0)
        .with_related_conditions(&["Asthma", "Diabetes", "Heart disease"]),
        Condition::new(
            "covid_19",
            "COVID-19",
            &["fever", "cough", "fatigue", "loss_of_smell", "shortness_of_breath", "muscle_aches", "sore_throat"],
            Severity::Moderate,
            MedicalAttention::Within24Hours,
        )
        .with_description("Respiratory illness caused by SARS-CoV-2; loss of taste or smell is characteristic.")
        .with_typical_duration(10.0)
        .with_related_conditions(&["Diabetes", "High blood pressure", "Obesity"]),
        Condition::new(
            "strep_throat",
            "Strep Throat",
            &["sore_throat", "fever", "swollen_lymph_nodes", "difficulty_swallowing", "headache"],
            Severity::Moderate,
            MedicalAttention::Within24Hours,
        )
        .with_description("A bacterial throat infection that needs antibiotics.")
        .with_age_range(5.0, 15.0)
        .with_typical_duration(7.0)
        .with_medication("amoxicillin", MedicationEffect::Negative),
        Condition::new(
            "acute_bronchitis",
            "Acute Bronchitis",
            &["cough", "productive_cough", "chest_tightness", "fatigue", "wheezing"],
            Severity::Mild,
            MedicalAttention::WithinWeek,
        )
        .with_description("Inflammation of the airways, usually after a cold.")
        .with_typical_duration(14.0)
        .with_related_conditions(&["Asthma", "Common cold"]),
        Condition::new(
            "pneumonia",
            "Pneumonia",
            &["fever", "chills", "productive_cough", "shortness_of_breath", "chest_pain", "fatigue"],
            Severity::Severe,
            MedicalAttention::Immediately,
        )
        .with_description("Infection that inflames the air sacs of one or both lungs.")
        .with_age_range(65.0, 100.0)
        .with_typical_duration(21.0)
        .with_related_conditions(&["Asthma", "COPD", "Heart disease"]),
        Condition::new(
            "asthma",
            "Asthma",
            &["wheezing", "shortness_of_breath", "chest_tightness", "cough"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("Chronic airway inflammation causing episodes of wheezing and breathlessness.")
        .with_family_history(&["Asthma", "Allergies", "Eczema"])
        .with_related_conditions(&["Allergies", "Eczema"])
        .with_medication("albuterol", MedicationEffect::Positive)
        .with_medication("beta blocker", MedicationEffect::Positive),
        Condition::new(
            "allergic_rhinitis",
            "Allergic Rhinitis (Hay Fever)",
            &["sneezing", "runny_nose", "nasal_congestion", "itchy_eyes", "watery_eyes"],
            Severity::Mild,
            MedicalAttention::SelfCare,
        )
        .with_description("An allergic response to pollen, dust or pet dander.")
        .with_family_history(&["Allergies", "Asthma"])
        .with_medication("antihistamine", MedicationEffect::Negative)
        .with_allergies(&["Pollen", "Dust mites", "Pet dander"]),
        Condition::new(
            "sinusitis",
            "Sinusitis",
            &["facial_pressure", "nasal_congestion", "headache", "runny_nose", "cough", "fever"],
            Severity::Mild,
            MedicalAttention::WithinWeek,
        )
        .with_description("Inflammation of the sinuses, often following a cold.")
        .with_typical_duration(10.0)
        .with_related_conditions(&["Allergies", "Common cold"]),
        Condition::new(
            "otitis_media",
            "Middle Ear Infection",
            &["ear_pain", "fever", "headache", "dizziness", "runny_nose"],
            Severity::Mild,
            MedicalAttention::Within24Hours,
        )
        .with_description("Infection behind the eardrum, common in young children after a cold.")
        .with_age_range(0.0, 7.0)
        .with_typical_duration(3.0)
        .with_related_conditions(&["Common cold", "Allergies"]),
    ]
}
