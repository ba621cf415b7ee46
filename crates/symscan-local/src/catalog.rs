use symscan_core::DiseaseEntry;

/// The fixed disease catalog: major disease categories and the encyclopedia
/// page each resolves to. Order here is iteration order; display order is
/// decided by ranking.
const CATALOG: &[(&str, &str)] = &[
    (
        "Cardiovascular Diseases",
        "https://en.wikipedia.org/wiki/Cardiovascular_disease",
    ),
    ("Cancers", "https://en.wikipedia.org/wiki/Cancer"),
    (
        "Chronic Obstructive Pulmonary Disease (COPD)",
        "https://en.wikipedia.org/wiki/Chronic_obstructive_pulmonary_disease",
    ),
    (
        "Lower Respiratory Infections",
        "https://en.wikipedia.org/wiki/Lower_respiratory_tract_infection",
    ),
    (
        "Diabetes Mellitus",
        "https://en.wikipedia.org/wiki/Diabetes_mellitus",
    ),
    (
        "Alzheimer's Disease and Other Dementias",
        "https://en.wikipedia.org/wiki/Alzheimer%27s_disease",
    ),
    ("Diarrheal Diseases", "https://en.wikipedia.org/wiki/Diarrhea"),
    (
        "Kidney Diseases",
        "https://en.wikipedia.org/wiki/Kidney_disease",
    ),
    (
        "Tuberculosis (TB)",
        "https://en.wikipedia.org/wiki/Tuberculosis",
    ),
    (
        "Road Injuries",
        "https://en.wikipedia.org/wiki/Traffic_collision",
    ),
    ("HIV/AIDS", "https://en.wikipedia.org/wiki/HIV/AIDS"),
    ("Malaria", "https://en.wikipedia.org/wiki/Malaria"),
    (
        "Neglected Tropical Diseases (NTDs)",
        "https://en.wikipedia.org/wiki/Neglected_tropical_diseases",
    ),
    (
        "Mental Disorder",
        "https://en.wikipedia.org/wiki/Mental_disorder",
    ),
    (
        "Substance Use Disorder",
        "https://en.wikipedia.org/wiki/Substance_use_disorder",
    ),
    (
        "Musculoskeletal Disorders",
        "https://en.wikipedia.org/wiki/Musculoskeletal_disorder",
    ),
    (
        "Preterm Birth Complications",
        "https://en.wikipedia.org/wiki/Preterm_birth",
    ),
    ("Obesity", "https://en.wikipedia.org/wiki/Obesity"),
    ("Oral Diseases", "https://en.wikipedia.org/wiki/Oral_disease"),
    ("Liver Diseases", "https://en.wikipedia.org/wiki/Liver_disease"),
    (
        "Hypertensive Heart Disease",
        "https://en.wikipedia.org/wiki/Hypertensive_heart_disease",
    ),
    (
        "Birth Asphyxia",
        "https://en.wikipedia.org/wiki/Birth_asphyxia",
    ),
    ("Birth Trauma", "https://en.wikipedia.org/wiki/Birth_trauma"),
    (
        "Congenital Anomalies",
        "https://en.wikipedia.org/wiki/Congenital_anomaly",
    ),
    (
        "Foodborne Illness",
        "https://en.wikipedia.org/wiki/Foodborne_illness",
    ),
    ("Dengue", "https://en.wikipedia.org/wiki/Dengue_fever"),
    ("Self-harm", "https://en.wikipedia.org/wiki/Self-harm"),
    ("Suicide", "https://en.wikipedia.org/wiki/Suicide"),
];

pub fn default_catalog() -> Vec<DiseaseEntry> {
    CATALOG
        .iter()
        .map(|(category, url)| DiseaseEntry::new(*category, *url))
        .collect()
}
