//! Invariants of a match run, checked over a spread of user profiles
//! against the built-in catalog.

use symcheck_catalog::Catalog;
use symcheck_core::SymptomLookup;
use symcheck_core::models::condition::{Condition, GenderAffinity, MedicalAttention, Severity};
use symcheck_core::models::user_data::{Gender, UserData};
use symcheck_matching::weights::{MAX_RESULTS, MIN_MATCH_PERCENTAGE, W_SYMPTOM};
use symcheck_matching::{match_conditions, score_condition};

fn profiles(catalog: &Catalog) -> Vec<UserData> {
    let mut symptom_sets: Vec<Vec<String>> = vec![Vec::new()];
    for (_, members) in catalog.symptoms().by_category() {
        symptom_sets.push(members.iter().map(|s| s.id.clone()).collect());
    }
    symptom_sets.push(catalog.symptoms().iter().map(|s| s.id.clone()).collect());
    symptom_sets.push(catalog.symptoms().iter().step_by(3).map(|s| s.id.clone()).collect());
    symptom_sets.push(vec!["fever".into(), "cough".into(), "fatigue".into()]);
    symptom_sets.push(vec!["chest_pain".into(), "shortness_of_breath".into(), "sweating".into()]);

    let ages = ["", "n/a", "3", "19", "47", "72"];
    let genders = [None, Some(Gender::Male), Some(Gender::Female), Some(Gender::Other)];
    let histories: [(&[&str], &[&str]); 2] = [
        (&[], &[]),
        (&["Aspirin 81mg", "ibuprofen"], &["Penicillin", "Peanuts"]),
    ];

    let mut profiles = Vec::new();
    for symptoms in &symptom_sets {
        for (i, age) in ages.iter().enumerate() {
            let (medications, allergies) = histories[i % histories.len()];
            let mut user = UserData::new()
                .with_age(*age)
                .with_duration((i * 4) as f64)
                .with_medications(medications)
                .with_allergies(allergies)
                .with_family_history(&["Diabetes", "Asthma"])
                .with_past_conditions(&["High blood pressure"]);
            user.gender = genders[i % genders.len()];
            user.symptoms = symptoms.clone();
            profiles.push(user);
        }
    }
    profiles
}

#[test]
fn results_are_deterministic() {
    let catalog = Catalog::load_builtin().unwrap();
    for user in profiles(&catalog) {
        let first = match_conditions(&user, catalog.conditions().all(), &catalog);
        let second = match_conditions(&user, catalog.conditions().all(), &catalog);
        assert_eq!(first, second);
    }
}

#[test]
fn results_respect_bounds_filter_and_order() {
    let catalog = Catalog::load_builtin().unwrap();
    for user in profiles(&catalog) {
        let results = match_conditions(&user, catalog.conditions().all(), &catalog);

        assert!(results.len() <= MAX_RESULTS);
        for m in &results {
            assert!(m.match_percentage <= 100);
            assert!(m.match_percentage > MIN_MATCH_PERCENTAGE);
        }
        for pair in results.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{} ranked above {}",
                pair[0].condition.id,
                pair[1].condition.id
            );
        }
    }
}

#[test]
fn matched_and_unmatched_partition_condition_symptoms() {
    let catalog = Catalog::load_builtin().unwrap();
    for user in profiles(&catalog) {
        for m in match_conditions(&user, catalog.conditions().all(), &catalog) {
            let mut expected: Vec<&str> = m
                .condition
                .symptoms
                .iter()
                .map(|id| catalog.symptom_name(id).unwrap())
                .collect();
            let mut actual: Vec<&str> = m
                .matched_symptoms
                .iter()
                .chain(&m.not_matched_symptoms)
                .map(String::as_str)
                .collect();
            expected.sort();
            actual.sort();
            assert_eq!(actual, expected);

            for name in &m.matched_symptoms {
                assert!(!m.not_matched_symptoms.contains(name));
            }
        }
    }
}

#[test]
fn no_symptoms_means_only_risk_factors_score() {
    let catalog = Catalog::load_builtin().unwrap();
    for user in profiles(&catalog).into_iter().filter(|u| u.symptoms.is_empty()) {
        for condition in catalog.conditions().all() {
            let bare = score_condition(&user, condition, &catalog);
            assert!(bare.matched_symptoms.is_empty());

            // Adding every condition symptom adds exactly the symptom weight per symptom.
            let mut full = user.clone();
            full.symptoms = condition.symptoms.clone();
            let with_symptoms = score_condition(&full, condition, &catalog);
            let symptom_part = W_SYMPTOM * condition.symptoms.len() as f64;
            assert!(
                (with_symptoms.score - symptom_part - bare.score).abs() < 1e-9,
                "{}: {} vs {}",
                condition.id,
                with_symptoms.score,
                bare.score
            );
        }
    }
}

#[test]
fn no_symptoms_score_is_the_sum_of_risk_factors() {
    let condition = Condition::new(
        "gd",
        "Gestational diabetes",
        &["fatigue"],
        Severity::Moderate,
        MedicalAttention::WithinWeek,
    )
        .with_age_range(20.0, 40.0)
        .with_gender(GenderAffinity::Female)
        .with_typical_duration(10.0)
        .with_family_history(&["Diabetes"]);
    let user = UserData::new()
        .with_age("30")
        .with_gender(Gender::Female)
        .with_duration(5.0)
        .with_family_history(&["Diabetes"]);

    let catalog = Catalog::load_builtin().unwrap();
    let result = score_condition(&user, &condition, &catalog);
    // age 1.5 + gender 1.5 + duration 1.2 * 0.5 + family 1.8 * 1.5
    assert!((result.score - 6.3).abs() < 1e-9, "score was {}", result.score);
    assert!(result.matched_symptoms.is_empty());
}

#[test]
fn no_symptoms_and_no_risk_factors_match_nothing() {
    let plain = vec![
        Condition::new("a", "A", &["fever"], Severity::Mild, MedicalAttention::SelfCare),
        Condition::new("b", "B", &["cough", "rash"], Severity::Severe, MedicalAttention::Immediately),
    ];
    let user = UserData::new()
        .with_age("30")
        .with_gender(Gender::Female)
        .with_duration(4.0);
    let catalog = Catalog::load_builtin().unwrap();

    assert!(match_conditions(&user, &plain, &catalog).is_empty());
}

#[test]
fn every_category_can_surface_a_match() {
    let catalog = Catalog::load_builtin().unwrap();
    for (category, members) in catalog.symptoms().by_category() {
        assert!(!members.is_empty(), "{category} has no symptoms");
        let user = UserData {
            symptoms: members.iter().map(|s| s.id.clone()).collect(),
            ..UserData::default()
        };
        let results = match_conditions(&user, catalog.conditions().all(), &catalog);
        assert!(!results.is_empty(), "no match for {category} symptoms");
    }
}

#[test]
fn classic_presentations_rank_expected_condition_first() {
    let catalog = Catalog::load_builtin().unwrap();
    let cases: [(&[&str], &str, &str); 4] = [
        (&["sneezing", "itchy_eyes", "watery_eyes", "runny_nose", "nasal_congestion"], "30", "allergic_rhinitis"),
        (&["lower_right_abdominal_pain", "abdominal_pain", "nausea", "loss_of_appetite", "fever"], "19", "appendicitis"),
        (&["chest_pain", "sweating", "shortness_of_breath", "nausea", "palpitations"], "60", "heart_attack"),
        (&["painful_urination", "frequent_urination", "cloudy_urine"], "28", "uti"),
    ];

    for (symptoms, age, expected) in cases {
        let user = UserData::new().with_age(age).with_symptoms(symptoms);
        let results = match_conditions(&user, catalog.conditions().all(), &catalog);
        assert_eq!(results.first().map(|m| m.condition.id.as_str()), Some(expected));
    }
}
