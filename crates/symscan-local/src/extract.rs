use html_scraper::{ElementRef, Html, Selector};

/// Sentinel returned when no paragraph qualifies as a description.
pub const NO_DESCRIPTION: &str = "No description available.";

/// Candidate symptom-section headings, most common first. Encyclopedia pages
/// are inconsistent about where symptoms live; "Characteristics" sometimes
/// carries them too.
const SYMPTOM_HEADINGS: [&str; 4] = [
    "Symptoms",
    "Signs and symptoms",
    "Clinical presentation",
    "Characteristics",
];

/// Heading levels to try, most specific first.
const HEADING_LEVELS: [u8; 3] = [2, 3, 4];

/// Inline reference/annotation markup skipped during sibling accumulation so
/// citation fragments don't pollute the passage.
const SKIP_INLINE: [&str; 3] = ["sup", "a", "span"];

const DISAMBIGUATION_PREFIX: &str = "for other uses, see";

fn norm_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(el: &ElementRef) -> String {
    norm_ws(&el.text().collect::<Vec<_>>().join(" "))
}

fn heading_level(name: &str) -> Option<u8> {
    let level: u8 = name.strip_prefix('h')?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

/// Locate a symptoms-like section and return its concatenated visible text,
/// or an empty string when no heading/phrase combination yields content.
///
/// For each heading level (h2 before h3 before h4) and each candidate phrase
/// in order, the first heading whose visible text contains the phrase
/// (case-insensitive) opens a section; following siblings are accumulated
/// until a heading of the same or higher level closes it. The first
/// combination producing non-empty text wins; there is no merging across
/// candidates.
pub fn extract_symptom_section(html: &str) -> String {
    let doc = Html::parse_document(html);
    for level in HEADING_LEVELS {
        let Ok(sel) = Selector::parse(&format!("h{level}")) else {
            continue;
        };
        for phrase in SYMPTOM_HEADINGS {
            let phrase_lc = phrase.to_ascii_lowercase();
            let heading = doc
                .select(&sel)
                .find(|h| element_text(h).to_lowercase().contains(&phrase_lc));
            let Some(heading) = heading else {
                continue;
            };
            let text = collect_section_text(heading, level);
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

fn collect_section_text(heading: ElementRef<'_>, level: u8) -> String {
    let mut parts: Vec<String> = Vec::new();
    for node in heading.next_siblings() {
        let Some(el) = ElementRef::wrap(node) else {
            continue;
        };
        let name = el.value().name();
        if let Some(l) = heading_level(name) {
            if l <= level {
                break;
            }
        }
        if SKIP_INLINE.contains(&name) {
            continue;
        }
        let text = element_text(&el);
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join(" ")
}

/// Build a short description from the first few substantive paragraphs.
///
/// Candidates are direct `<p>` children of the main content container when
/// one is identifiable, otherwise any `<p>` in document order. A paragraph
/// qualifies when it has more than 5 words and is not a disambiguation
/// notice. The first 3 qualifying paragraphs are joined with single spaces;
/// when none qualify the sentinel is returned.
pub fn extract_description(html: &str) -> String {
    let doc = Html::parse_document(html);
    let kept: Vec<String> = candidate_paragraphs(&doc)
        .into_iter()
        .filter(|t| qualifies_as_description(t))
        .take(3)
        .collect();
    if kept.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        kept.join(" ")
    }
}

fn qualifies_as_description(text: &str) -> bool {
    text.split_whitespace().count() > 5 && !text.to_lowercase().starts_with(DISAMBIGUATION_PREFIX)
}

fn candidate_paragraphs(doc: &Html) -> Vec<String> {
    if let Ok(sel) = Selector::parse("div.mw-parser-output") {
        if let Some(container) = doc.select(&sel).next() {
            return container
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "p")
                .map(|el| element_text(&el))
                .collect();
        }
    }
    all_paragraph_texts(doc)
}

fn all_paragraph_texts(doc: &Html) -> Vec<String> {
    let Ok(sel) = Selector::parse("p") else {
        return Vec::new();
    };
    doc.select(&sel).map(|el| element_text(&el)).collect()
}

/// Unfiltered concatenation of the first `limit` paragraphs anywhere in the
/// document. Used as the matching passage when no symptoms section exists.
pub fn leading_paragraphs_text(html: &str, limit: usize) -> String {
    let doc = Html::parse_document(html);
    all_paragraph_texts(&doc)
        .into_iter()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The canonical page title, when the page exposes one.
pub fn extract_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse("span.mw-page-title-main").ok()?;
    let el = doc.select(&sel).next()?;
    let t = element_text(&el);
    (!t.is_empty()).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_stops_at_next_same_level_heading() {
        let html = r#"
        <html><body>
          <h2>Signs and symptoms</h2>
          <p>Fever and cough are common.</p>
          <p>Fatigue may follow.</p>
          <h2>Diagnosis</h2>
          <p>Blood tests are used.</p>
        </body></html>
        "#;
        let out = extract_symptom_section(html);
        assert_eq!(out, "Fever and cough are common. Fatigue may follow.");
    }

    #[test]
    fn section_includes_deeper_headings_but_not_higher() {
        let html = r#"
        <html><body>
          <h2>Symptoms</h2>
          <p>Early signs.</p>
          <h3>Late stage</h3>
          <p>Late signs.</p>
          <h1>Unrelated</h1>
          <p>Outside.</p>
        </body></html>
        "#;
        let out = extract_symptom_section(html);
        assert!(out.contains("Early signs."));
        assert!(out.contains("Late stage"));
        assert!(out.contains("Late signs."));
        assert!(!out.contains("Outside."));
    }

    #[test]
    fn section_skips_inline_reference_siblings() {
        let html = r#"
        <html><body>
          <h2>Symptoms</h2>
          <sup>[1]</sup>
          <a href="/ref">citation</a>
          <span>edit</span>
          <p>Headache is typical.<sup>[2]</sup></p>
          <h2>Causes</h2>
        </body></html>
        "#;
        let out = extract_symptom_section(html);
        assert!(out.contains("Headache is typical."));
        assert!(!out.contains("citation"));
        assert!(!out.contains("edit"));
        assert!(!out.contains("[1]"));
    }

    #[test]
    fn section_heading_match_is_case_insensitive_substring() {
        let html = r#"
        <html><body>
          <h2>Clinical presentation and course</h2>
          <p>Presenting complaint is pain.</p>
        </body></html>
        "#;
        let out = extract_symptom_section(html);
        assert_eq!(out, "Presenting complaint is pain.");
    }

    #[test]
    fn section_falls_back_to_h3_headings() {
        let html = r#"
        <html><body>
          <h2>Overview</h2>
          <h3>Symptoms</h3>
          <p>Nausea and vomiting.</p>
          <h3>Treatment</h3>
          <p>Rest.</p>
        </body></html>
        "#;
        let out = extract_symptom_section(html);
        assert_eq!(out, "Nausea and vomiting.");
    }

    #[test]
    fn section_empty_when_no_candidate_heading() {
        let html = "<html><body><h2>History</h2><p>Old.</p></body></html>";
        assert_eq!(extract_symptom_section(html), "");
    }

    #[test]
    fn section_with_empty_body_yields_empty_not_partial() {
        // A matching heading with no content under it must not stop the
        // search; the later matching combination still wins.
        let html = r#"
        <html><body>
          <h2>Symptoms</h2>
          <h2>Signs and symptoms</h2>
          <p>Chills.</p>
        </body></html>
        "#;
        let out = extract_symptom_section(html);
        assert_eq!(out, "Chills.");
    }

    #[test]
    fn description_filters_short_and_disambiguation_paragraphs() {
        let html = r#"
        <html><body><div class="mw-parser-output">
          <p>Too short here.</p>
          <p>For other uses, see the thing (disambiguation) over there please.</p>
          <p>Influenza is a contagious respiratory illness caused by influenza viruses that infect people.</p>
          <p>Symptoms range from mild to severe and typically begin one to four days after exposure to the virus.</p>
        </div></body></html>
        "#;
        let out = extract_description(html);
        assert!(out.starts_with("Influenza is a contagious"));
        assert!(out.contains("one to four days"));
        assert!(!out.contains("Too short"));
        assert!(!out.contains("For other uses"));
    }

    #[test]
    fn description_takes_at_most_three_qualifying_paragraphs() {
        let p = "<p>This paragraph easily has more than five words in it.</p>";
        let html = format!(
            "<html><body><div class=\"mw-parser-output\">{}</div></body></html>",
            p.repeat(5)
        );
        let out = extract_description(&html);
        assert_eq!(out.matches("This paragraph easily").count(), 3);
    }

    #[test]
    fn description_falls_back_to_any_paragraph_without_container() {
        let html = "<html><body><article><p>Dengue fever is a mosquito-borne tropical disease of humans.</p></article></body></html>";
        let out = extract_description(html);
        assert!(out.contains("mosquito-borne"));
    }

    #[test]
    fn description_sentinel_when_nothing_qualifies() {
        let html = "<html><body><p>Tiny one.</p></body></html>";
        assert_eq!(extract_description(html), NO_DESCRIPTION);
        assert_eq!(extract_description("<html><body></body></html>"), NO_DESCRIPTION);
    }

    #[test]
    fn leading_paragraphs_are_unfiltered() {
        let html = r#"
        <html><body>
          <p>Short.</p>
          <p>For other uses, see elsewhere.</p>
          <p>Fever is a symptom.</p>
          <p>Never reached.</p>
        </body></html>
        "#;
        let out = leading_paragraphs_text(html, 3);
        assert!(out.contains("Short."));
        assert!(out.contains("For other uses"));
        assert!(out.contains("Fever is a symptom."));
        assert!(!out.contains("Never reached."));
    }

    #[test]
    fn title_comes_from_the_title_span() {
        let html = r#"<html><body><h1><span class="mw-page-title-main"> Malaria </span></h1></body></html>"#;
        assert_eq!(extract_title(html).as_deref(), Some("Malaria"));
    }

    #[test]
    fn title_absent_when_span_missing() {
        assert_eq!(extract_title("<html><body><h1>Malaria</h1></body></html>"), None);
    }

    #[test]
    fn whitespace_is_collapsed_in_extracted_text() {
        let html = "<html><body><h2>Symptoms</h2><p>  lots \n of\t gaps  </p><h2>End</h2></body></html>";
        assert_eq!(extract_symptom_section(html), "lots of gaps");
    }
}
