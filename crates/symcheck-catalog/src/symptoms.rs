use std::collections::HashMap;

use symcheck_core::SymptomLookup;
use symcheck_core::models::symptom::{Symptom, SymptomCategory};

use crate::error::CatalogError;

/// The symptom registry with an id index built once at load.
#[derive(Debug, Clone)]
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
    index: HashMap<String, usize>,
}

impl SymptomCatalog {
    /// Build the catalog, rejecting duplicate ids.
    pub fn new(symptoms: Vec<Symptom>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(symptoms.len());
        for (position, symptom) in symptoms.iter().enumerate() {
            if index.insert(symptom.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateSymptom(symptom.id.clone()));
            }
        }
        Ok(Self { symptoms, index })
    }

    pub fn get(&self, id: &str) -> Option<&Symptom> {
        self.index.get(id).map(|&i| &self.symptoms[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter()
    }

    pub fn as_slice(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Symptoms grouped by category, in [`SymptomCategory::ALL`] order.
    ///
    /// Every category is present, even when it has no symptoms; within a
    /// category symptoms keep catalog order.
    pub fn by_category(&self) -> Vec<(SymptomCategory, Vec<&Symptom>)> {
        SymptomCategory::ALL
            .iter()
            .map(|&category| {
                let members = self
                    .symptoms
                    .iter()
                    .filter(|s| s.category == category)
                    .collect();
                (category, members)
            })
            .collect()
    }
}

impl SymptomLookup for SymptomCatalog {
    fn symptom(&self, id: &str) -> Option<&Symptom> {
        self.get(id)
    }
}

/// The built-in symptom table.
pub fn builtin_symptoms() -> Vec<Symptom> {
    use symcheck_core::models::symptom::SymptomCategory::{
        Digestive, General, Head, Musculoskeletal, Other, Respiratory, Skin,
    };

    let table: &[(&str, &str, SymptomCategory, Option<&str>)] = &[
        ("fever", "Fever", General, Some("Body temperature above 38 °C (100.4 °F)")),
        ("chills", "Chills", General, None),
        ("fatigue", "Fatigue", General, Some("Persistent tiredness not relieved by rest")),
        ("night_sweats", "Night Sweats", General, None),
        ("weight_loss", "Unexplained Weight Loss", General, None),
        ("weight_gain", "Unexplained Weight Gain", General, None),
        ("loss_of_appetite", "Loss of Appetite", General, None),
        ("swollen_lymph_nodes", "Swollen Lymph Nodes", General, None),
        ("excessive_thirst", "Excessive Thirst", General, None),
        ("dizziness", "Dizziness", General, None),
        ("cold_intolerance", "Sensitivity to Cold", General, None),
        ("headache", "Headache", Head, None),
        ("sensitivity_to_light", "Sensitivity to Light", Head, None),
        ("blurred_vision", "Blurred Vision", Head, None),
        ("confusion", "Confusion", Head, Some("Difficulty thinking clearly or staying oriented")),
        ("stiff_neck", "Stiff Neck", Head, None),
        ("sore_throat", "Sore Throat", Head, None),
        ("ear_pain", "Ear Pain", Head, None),
        ("runny_nose", "Runny Nose", Head, None),
        ("nasal_congestion", "Nasal Congestion", Head, None),
        ("facial_pressure", "Facial Pain or Pressure", Head, None),
        ("loss_of_smell", "Loss of Taste or Smell", Head, None),
        ("itchy_eyes", "Itchy Eyes", Head, None),
        ("watery_eyes", "Watery Eyes", Head, None),
        ("cough", "Cough", Respiratory, None),
        ("productive_cough", "Cough with Mucus", Respiratory, None),
        ("shortness_of_breath", "Shortness of Breath", Respiratory, None),
        ("wheezing", "Wheezing", Respiratory, None),
        ("chest_pain", "Chest Pain", Respiratory, Some("Pain, pressure or squeezing in the chest")),
        ("chest_tightness", "Chest Tightness", Respiratory, None),
        ("sneezing", "Sneezing", Respiratory, None),
        ("nausea", "Nausea", Digestive, None),
        ("vomiting", "Vomiting", Digestive, None),
        ("diarrhea", "Diarrhea", Digestive, None),
        ("constipation", "Constipation", Digestive, None),
        ("abdominal_pain", "Abdominal Pain", Digestive, None),
        ("lower_right_abdominal_pain", "Pain in Lower Right Abdomen", Digestive, None),
        ("bloating", "Bloating", Digestive, None),
        ("heartburn", "Heartburn", Digestive, Some("Burning sensation behind the breastbone")),
        ("difficulty_swallowing", "Difficulty Swallowing", Digestive, None),
        ("rash", "Rash", Skin, None),
        ("itching", "Itching", Skin, None),
        ("hives", "Hives", Skin, Some("Raised, itchy welts on the skin")),
        ("dry_skin", "Dry Skin", Skin, None),
        ("skin_redness", "Skin Redness", Skin, None),
        ("blisters", "Blisters", Skin, None),
        ("skin_burning", "Burning or Tingling Skin", Skin, None),
        ("muscle_aches", "Muscle Aches", Musculoskeletal, None),
        ("joint_pain", "Joint Pain", Musculoskeletal, None),
        ("joint_swelling", "Joint Swelling", Musculoskeletal, None),
        ("joint_stiffness", "Joint Stiffness", Musculoskeletal, Some("Stiffness, often worst in the morning")),
        ("back_pain", "Back Pain", Musculoskeletal, None),
        ("limited_mobility", "Limited Range of Motion", Musculoskeletal, None),
        ("muscle_spasms", "Muscle Spasms", Musculoskeletal, None),
        ("anxiety", "Anxiety or Excessive Worry", Other, None),
        ("insomnia", "Difficulty Sleeping", Other, None),
        ("palpitations", "Heart Palpitations", Other, None),
        ("restlessness", "Restlessness", Other, None),
        ("frequent_urination", "Frequent Urination", Other, None),
        ("painful_urination", "Painful Urination", Other, None),
        ("cloudy_urine", "Cloudy or Strong-Smelling Urine", Other, None),
        ("facial_swelling", "Swelling of Face, Lips or Tongue", Other, None),
        ("sweating", "Cold Sweat", Other, None),
    ];

    table
        .iter()
        .map(|&(id, name, category, description)| {
            let symptom = Symptom::new(id, name, category);
            match description {
                Some(text) => symptom.with_description(text),
                None => symptom,
            }
        })
        .collect()
}
