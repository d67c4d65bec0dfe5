// One-line summaries shown next to the structured search result

use market_fiyati_sdk::{Lookup, SearchResultEnvelope};

pub const NO_SEARCH_RESULTS: &str = "No results found.";
pub const NO_IDENTITY_RESULTS: &str = "No products found.";
pub const NO_SIMILAR_RESULTS: &str = "No similar products found.";

/// Format an integer with `,` between groups of three digits.
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn search_summary(result: &Lookup<SearchResultEnvelope>) -> String {
    match top(result) {
        Some((envelope, title, brand)) => format!(
            "Top match: {} ({}) — {} result(s).",
            title,
            brand,
            format_count(envelope.number_of_found)
        ),
        None => NO_SEARCH_RESULTS.to_string(),
    }
}

pub fn identity_summary(result: &Lookup<SearchResultEnvelope>, identity: &str) -> String {
    match top(result) {
        Some((envelope, title, brand)) => format!(
            "Found {} item(s) for '{}'. Example: {} ({}).",
            format_count(envelope.number_of_found),
            identity,
            title,
            brand
        ),
        None => NO_IDENTITY_RESULTS.to_string(),
    }
}

pub fn similar_summary(result: &Lookup<SearchResultEnvelope>) -> String {
    match top(result) {
        Some((envelope, title, brand)) => format!(
            "{} similar product(s) found. Closest match: {} ({}).",
            format_count(envelope.number_of_found),
            title,
            brand
        ),
        None => NO_SIMILAR_RESULTS.to_string(),
    }
}

// Absent and empty content read the same to the user.
fn top(result: &Lookup<SearchResultEnvelope>) -> Option<(&SearchResultEnvelope, &str, &str)> {
    match result {
        Lookup::Found(envelope) => envelope
            .top()
            .map(|item| (envelope, item.title.as_str(), item.brand.as_str())),
        Lookup::Absent => None,
    }
}
