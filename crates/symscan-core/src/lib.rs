use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
    #[error("client setup failed: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// One catalog record: a display category and the page it resolves to.
///
/// The catalog is fixed at startup; insertion order defines iteration order
/// (not display order, which is rank order).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiseaseEntry {
    pub category: String,
    pub url: String,
}

impl DiseaseEntry {
    pub fn new(category: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            url: url.into(),
        }
    }
}

/// Per-disease outcome of matching the user's symptoms against the page.
///
/// Invariant: `shared_count == matched_symptoms.len()`, and every matched
/// symptom is a lower-cased user input (or the documented "dementia" add-on).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub category: String,
    pub page_title: String,
    pub url: String,
    pub shared_count: usize,
    pub matched_symptoms: Vec<String>,
    pub description: String,
}

/// Results sorted by shared count descending; ties keep catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankedReport {
    pub results: Vec<MatchResult>,
}

impl RankedReport {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Stable-sort results by shared count descending. Callers are expected to
/// have dropped zero-count entries already; ranking does not filter.
pub fn rank(mut results: Vec<MatchResult>) -> RankedReport {
    // Vec::sort_by is stable, so ties preserve the incoming (catalog) order.
    results.sort_by(|a, b| b.shared_count.cmp(&a.shared_count));
    RankedReport { results }
}

/// Parse the user's comma-separated symptom input.
///
/// Entries are trimmed and empties dropped; case is preserved for display
/// (matching lower-cases on its own).
pub fn parse_symptom_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Retrieve the raw markup for `url`. Implementations surface network,
    /// timeout, and HTTP-status problems as `Error::Fetch`; they never panic
    /// across this boundary.
    async fn fetch(&self, url: &str) -> Result<String>;
}
