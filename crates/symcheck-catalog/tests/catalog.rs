use std::io::Write;

use symcheck_catalog::{Catalog, CatalogError, ConditionCatalog, SymptomCatalog};
use symcheck_core::SymptomLookup;
use symcheck_core::models::condition::{Condition, MedicalAttention, Severity};
use symcheck_core::models::symptom::{Symptom, SymptomCategory};

fn symptoms() -> Vec<Symptom> {
    vec![
        Symptom::new("cough", "Cough", SymptomCategory::Respiratory),
        Symptom::new("fever", "Fever", SymptomCategory::General),
        Symptom::new("rash", "Rash", SymptomCategory::Skin),
        Symptom::new("chills", "Chills", SymptomCategory::General),
    ]
}

fn condition(id: &str, symptoms: &[&str]) -> Condition {
    Condition::new(id, id, symptoms, Severity::Mild, MedicalAttention::SelfCare)
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::load_builtin().unwrap();
    assert!(catalog.symptoms().len() >= 50);
    assert!(catalog.conditions().len() >= 30);

    for condition in catalog.conditions().all() {
        for id in &condition.symptoms {
            assert!(
                catalog.symptom(id).is_some(),
                "{} refers to missing symptom {id}",
                condition.id
            );
        }
    }
}

#[test]
fn builtin_catalog_has_unique_condition_ids() {
    let catalog = Catalog::load_builtin().unwrap();
    let mut ids: Vec<_> = catalog.conditions().all().iter().map(|c| &c.id).collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn lookup_by_id() {
    let catalog = Catalog::load_builtin().unwrap();
    let fever = catalog.symptoms().get("fever").unwrap();
    assert_eq!(fever.name, "Fever");
    assert_eq!(fever.category, SymptomCategory::General);
    assert!(catalog.symptoms().get("not_a_symptom").is_none());
    assert_eq!(catalog.symptom_name("cough"), Some("Cough"));
}

#[test]
fn by_category_follows_declared_category_order() {
    let catalog = SymptomCatalog::new(symptoms()).unwrap();
    let grouped = catalog.by_category();

    let order: Vec<_> = grouped.iter().map(|(c, _)| *c).collect();
    assert_eq!(order, SymptomCategory::ALL.to_vec());

    let general: Vec<_> = grouped[0].1.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(general, vec!["fever", "chills"]);

    let head = &grouped[1];
    assert_eq!(head.0, SymptomCategory::Head);
    assert!(head.1.is_empty());
}

#[test]
fn duplicate_symptom_ids_are_rejected() {
    let mut list = symptoms();
    list.push(Symptom::new("fever", "High Temperature", SymptomCategory::General));
    let err = SymptomCatalog::new(list).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSymptom(id) if id == "fever"));
}

#[test]
fn dangling_symptom_reference_fails_fast() {
    let err = Catalog::new(symptoms(), vec![condition("flu", &["fever", "sneezing"])]).unwrap_err();
    match err {
        CatalogError::DanglingSymptom {
            condition_id,
            symptom_id,
        } => {
            assert_eq!(condition_id, "flu");
            assert_eq!(symptom_id, "sneezing");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn condition_without_symptoms_is_rejected() {
    let err = Catalog::new(symptoms(), vec![condition("empty", &[])]).unwrap_err();
    assert!(matches!(err, CatalogError::NoSymptoms(id) if id == "empty"));
}

#[test]
fn inverted_age_range_is_rejected() {
    let bad = condition("flu", &["fever"]).with_age_range(60.0, 40.0);
    let err = Catalog::new(symptoms(), vec![bad]).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidAgeRange { .. }));
}

#[test]
fn non_positive_duration_is_rejected() {
    let bad = condition("flu", &["fever"]).with_typical_duration(0.0);
    let err = Catalog::new(symptoms(), vec![bad]).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDuration { .. }));
}

#[test]
fn duplicate_condition_ids_are_kept() {
    let symptom_catalog = SymptomCatalog::new(symptoms()).unwrap();
    let conditions = ConditionCatalog::new(
        vec![condition("flu", &["fever"]), condition("flu", &["cough"])],
        &symptom_catalog,
    )
    .unwrap();
    assert_eq!(conditions.len(), 2);
    assert_eq!(conditions.get("flu").unwrap().symptoms, vec!["fever"]);
}

#[test]
fn json_catalog_matches_builtin() {
    let builtin = Catalog::load_builtin().unwrap();
    let json = serde_json::to_string(&builtin.to_file()).unwrap();
    let parsed = Catalog::from_json(&json).unwrap();
    assert_eq!(parsed.symptoms().as_slice(), builtin.symptoms().as_slice());
    assert_eq!(parsed.conditions().all(), builtin.conditions().all());
}

#[test]
fn json_catalog_accepts_minimal_conditions() {
    let json = r#"{
        "symptoms": [
            {"id": "fever", "name": "Fever", "category": "general"},
            {"id": "cough", "name": "Cough", "category": "respiratory"}
        ],
        "conditions": [
            {
                "id": "cold",
                "name": "Cold",
                "description": "",
                "symptoms": ["fever", "cough"],
                "severity": "mild",
                "seek_medical_attention": "self_care"
            }
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    let cold = catalog.conditions().get("cold").unwrap();
    assert!(cold.risk_factors.is_none());
    assert!(cold.family_history_factors.is_empty());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = Catalog::from_json("{\"symptoms\": 3}").unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn catalog_reads_from_file() {
    let builtin = Catalog::load_builtin().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&builtin.to_file()).unwrap().as_bytes())
        .unwrap();

    let loaded = Catalog::from_path(file.path()).unwrap();
    assert_eq!(loaded.conditions().len(), builtin.conditions().len());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn suggestions_are_distinct_and_sorted() {
    let catalog = Catalog::load_builtin().unwrap();
    let suggestions = catalog.suggestions();

    assert!(suggestions.family_history.contains(&"Asthma".to_string()));
    assert!(suggestions.medications.contains(&"aspirin".to_string()));
    assert!(suggestions.allergies.contains(&"Peanuts".to_string()));

    let mut sorted = suggestions.past_medical_conditions.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted, suggestions.past_medical_conditions);
}

#[test]
fn repeated_symptom_within_condition_is_rejected() {
    let err = Catalog::new(symptoms(), vec![condition("flu", &["fever", "cough", "fever"])]).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::RepeatedSymptom { ref symptom_id, .. } if symptom_id == "fever"
    ));
}
