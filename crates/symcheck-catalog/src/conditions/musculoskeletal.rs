use symcheck_core::models::condition::{
    Condition, GenderAffinity, MedicalAttention, MedicationEffect, Severity,
};

pub(crate) fn conditions() -> Vec<Condition> {
    vec![
        Condition::new(
            "osteoarthritis",
            "Osteoarthritis",
            &["joint_pain", "joint_stiffness", "limited_mobility", "joint_swelling"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("Wear-and-tear breakdown of joint cartilage.")
        .with_age_range(50.0, 100.0)
        .with_typical_duration(365.0)
        .with_family_history(&["Arthritis"])
        .with_related_conditions(&["Obesity", "Joint injury"]),
        Condition::new(
            "rheumatoid_arthritis",
            "Rheumatoid Arthritis",
            &["joint_pain", "joint_swelling", "joint_stiffness", "fatigue", "fever", "weight_loss"],
            Severity::Moderate,
            MedicalAttention::WithinWeek,
        )
        .with_description("An autoimmune disease that inflames the lining of the joints.")
        .with_age_range(30.0, 60.0)
        .with_gender(GenderAffinity::Female)
        .with_typical_duration(42.0)
        .with_family_history(&["Rheumatoid arthritis", "Autoimmune disease"]),
        Condition::new(
            "back_strain",
            "Lower Back Strain",
            &["back_pain", "muscle_spasms", "limited_mobility", "joint_stiffness"],
            Severity::Mild,
            MedicalAttention::SelfCare,
        )
        .with_description("An injury to the muscles or ligaments of the lower back.")
        .with_age_range(25.0, 60.0)
        .with_typical_duration(14.0),
        Condition::new(
            "gout",
            "Gout",
            &["joint_pain", "joint_swelling", "skin_redness", "limited_mobility"],
            Severity::Moderate,
            MedicalAttention::Within24Hours,
        )
        .with_description("Sudden, severe attacks of pain in a joint, often the big toe.")
        .with_age_range(40.0, 80.0)
        .with_gender(GenderAffinity::Male)
        .with_typical_duration(7.0)
        .with_family_history(&["Gout"])
        .with_related_conditions(&["High blood pressure", "Kidney disease"])
        .with_medication("diuretic", MedicationEffect::Positive)
        .with_medication("allopurinol", MedicationEffect::Negative),
        Condition::new(
            "viral_myalgia",
            "Viral Muscle Aches",
            &["muscle_aches", "fatigue", "fever", "chills"],
            Severity::Mild,
            MedicalAttention::SelfCare,
        )
        .with_description("Generalized muscle pain accompanying a viral illness.")
        .with_typical_duration(5.0),
    ]
}
