//! Human-readable rendering of client results into tool output text.

use std::cmp::Ordering;

use sclient::{
    Bilingual, CalendarEntry, CalendarSnapshot, CommentaryLink, SearchHit, TextVersion,
    truncate_chars,
};
use serde_json::Value;

pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const EXTRA_DETAIL_LIMIT: usize = 3;

pub fn format_text_result(reference: &str, version: Option<&TextVersion>) -> String {
    match version {
        Some(version) => version.body_text(),
        None => format!("No text found for '{reference}'"),
    }
}

pub fn format_commentaries(links: &[CommentaryLink]) -> String {
    links
        .iter()
        .map(|link| link.reference.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A response with at most one hit renders as "no results", even when the
/// upstream hit count says otherwise. Long-standing behavior callers depend
/// on; do not fold the single-hit case into the block renderer.
pub fn format_search_results(query: &str, hits: &[SearchHit]) -> String {
    if hits.len() <= 1 {
        return format!("No results found for '{query}'");
    }

    hits.iter()
        .map(format_search_hit)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn format_search_hit(hit: &SearchHit) -> String {
    format!(
        "Reference: {}\nHebrew Reference: {}\nHighlight: {}",
        hit.reference, hit.hebrew_reference, hit.snippet
    )
}

pub fn format_calendar(snapshot: &CalendarSnapshot) -> String {
    let mut output = format!(
        "Learning schedule for {} ({})",
        snapshot.date, snapshot.timezone
    );

    let mut entries: Vec<&CalendarEntry> = snapshot.items.iter().collect();
    entries.sort_by(|a, b| a.order.partial_cmp(&b.order).unwrap_or(Ordering::Equal));

    for (index, entry) in entries.iter().enumerate() {
        output.push_str("\n\n");
        output.push_str(&format_calendar_entry(index + 1, entry));
    }

    output
}

fn format_calendar_entry(ordinal: usize, entry: &CalendarEntry) -> String {
    let mut block = format!("{ordinal}. {}", format_bilingual(&entry.title));
    block.push_str(&format!("\n   {}", format_bilingual(&entry.display_value)));

    if let Some(reference) = &entry.reference {
        block.push_str(&format!("\n   Reference: {reference}"));
    }
    if let Some(category) = &entry.category {
        block.push_str(&format!("\n   Category: {category}"));
    }
    if let Some(description) = &entry.description {
        if !description.en.is_empty() {
            block.push_str(&format!(
                "\n   Description: {}",
                truncate_chars(&description.en, DESCRIPTION_MAX_CHARS)
            ));
        }
    }

    if let Some(details) = &entry.extra_details {
        for (key, value) in details {
            let Some(values) = value.as_array() else {
                continue;
            };
            let shown: Vec<&str> = values
                .iter()
                .filter_map(Value::as_str)
                .take(EXTRA_DETAIL_LIMIT)
                .collect();
            if shown.is_empty() {
                continue;
            }

            block.push_str(&format!("\n   {}: {}", capitalize(key), shown.join(", ")));
            if values.len() > EXTRA_DETAIL_LIMIT {
                block.push_str("...");
            }
        }
    }

    block
}

fn format_bilingual(value: &Bilingual) -> String {
    if value.he.is_empty() {
        value.en.clone()
    } else if value.en.is_empty() {
        value.he.clone()
    } else {
        format!("{} ({})", value.en, value.he)
    }
}

fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
