use crate::{extract, matches};
use serde::{Deserialize, Serialize};
use symscan_core::{rank, DiseaseEntry, MatchResult, PageFetcher, RankedReport, Result};

pub const TITLE_NOT_FOUND_SUFFIX: &str = "(Title Not Found)";

/// Paragraph count for the fallback passage when no symptoms section exists.
const FALLBACK_PARAGRAPHS: usize = 3;

/// A fetch failure for one catalog entry. Non-fatal: the entry is dropped
/// from the report and the run continues.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanError {
    pub category: String,
    pub url: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub report: RankedReport,
    pub errors: Vec<ScanError>,
}

/// Fetch one catalog entry and match the user's symptoms against it.
///
/// The page is fetched once and reused for the passage, the description, and
/// the title. Zero-count results are returned as-is; filtering is the
/// caller's job. Public so a presentation layer can drive per-entry progress
/// itself.
pub async fn check_entry<F>(
    fetcher: &F,
    entry: &DiseaseEntry,
    user_symptoms: &[String],
) -> Result<MatchResult>
where
    F: PageFetcher + ?Sized,
{
    let markup = fetcher.fetch(&entry.url).await?;

    let mut passage = extract::extract_symptom_section(&markup);
    if passage.is_empty() {
        passage = extract::leading_paragraphs_text(&markup, FALLBACK_PARAGRAPHS);
    }
    let matched = matches::shared_symptoms(&passage, user_symptoms, &entry.url);
    let description = extract::extract_description(&markup);
    let page_title = extract::extract_title(&markup)
        .unwrap_or_else(|| format!("{} {TITLE_NOT_FOUND_SUFFIX}", entry.category));

    Ok(MatchResult {
        category: entry.category.clone(),
        page_title,
        url: entry.url.clone(),
        shared_count: matched.shared_count,
        matched_symptoms: matched.matched,
        description,
    })
}

/// Visit the catalog sequentially, keep entries with at least one shared
/// symptom, and rank them. Fetch failures are collected per entry and never
/// abort the run.
pub async fn run_report<F>(
    fetcher: &F,
    catalog: &[DiseaseEntry],
    user_symptoms: &[String],
) -> ScanReport
where
    F: PageFetcher + ?Sized,
{
    run_report_with_progress(fetcher, catalog, user_symptoms, |_, _, _| {}).await
}

/// Like [`run_report`], but calls `on_entry(position, total, entry)` before
/// each fetch so a presentation layer can show progress. The drop rule
/// (zero-count and failed entries) lives only here.
pub async fn run_report_with_progress<F, P>(
    fetcher: &F,
    catalog: &[DiseaseEntry],
    user_symptoms: &[String],
    mut on_entry: P,
) -> ScanReport
where
    F: PageFetcher + ?Sized,
    P: FnMut(usize, usize, &DiseaseEntry),
{
    let total = catalog.len();
    let mut results: Vec<MatchResult> = Vec::new();
    let mut errors: Vec<ScanError> = Vec::new();
    for (i, entry) in catalog.iter().enumerate() {
        on_entry(i + 1, total, entry);
        match check_entry(fetcher, entry, user_symptoms).await {
            Ok(result) if result.shared_count > 0 => results.push(result),
            Ok(_) => {}
            Err(e) => errors.push(ScanError {
                category: entry.category.clone(),
                url: entry.url.clone(),
                reason: e.to_string(),
            }),
        }
    }
    ScanReport {
        report: rank(results),
        errors,
    }
}
