//! Connecting transport and facility grouping for station detail pages.

use std::collections::HashMap;

use super::station::{FacilityItem, RetailItem};

/// Bucket used when an item has no category label.
pub const CATCH_ALL_CATEGORY: &str = "Lain-lain";

/// A connecting transport mode and the routes serving the station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportLink {
    pub mode: String,
    pub routes: Vec<String>,
}

/// A retail or facility item as shown in a category bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityEntry {
    pub id: String,
    pub name: String,
    pub cover: String,
    pub category: String,
}

/// Parse the free-text connecting transport description.
///
/// The text is a series of blocks separated by a blank line. Each block is
/// a mode label on its first line followed by a `", "` separated route list
/// on the second, e.g.
///
/// ```text
/// Metromini
/// B85, S72
///
/// KWK
/// S03, S05
/// ```
///
/// Blocks with fewer than two lines, or whose route list is empty, are
/// skipped.
pub fn parse_connecting_transport(text: &str) -> Vec<TransportLink> {
    let text = text.replace("\r\n", "\n");

    text.split("\n\n")
        .filter_map(|block| {
            let mut lines = block.trim().split('\n');
            let mode = lines.next()?.trim();
            let routes: Vec<String> = lines
                .next()?
                .trim()
                .split(", ")
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect();

            if routes.is_empty() {
                return None;
            }

            Some(TransportLink {
                mode: mode.to_string(),
                routes,
            })
        })
        .collect()
}

/// Normalize a category label: trimmed and title-cased, blank becomes
/// [`CATCH_ALL_CATEGORY`].
pub fn normalize_category(label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        return CATCH_ALL_CATEGORY.to_string();
    }
    title_case(label)
}

/// Upper-case the first letter of each word, lower-case the rest.
///
/// A word starts after any character that is not alphanumeric or `_`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;

    for c in s.chars() {
        if c.is_alphanumeric() || c == '_' {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }

    out
}

/// Group retail and facility items by normalized category.
///
/// Retail items are appended before facility items; within a bucket each
/// list keeps its source order. Key order is unspecified.
pub fn group_facilities(
    retail: &[RetailItem],
    facilities: &[FacilityItem],
) -> HashMap<String, Vec<FacilityEntry>> {
    let mut grouped: HashMap<String, Vec<FacilityEntry>> = HashMap::new();

    let entries = retail
        .iter()
        .map(|r| (&r.id, &r.title, &r.cover, &r.category))
        .chain(
            facilities
                .iter()
                .map(|f| (&f.id, &f.title, &f.cover, &f.category)),
        );

    for (id, title, cover, raw_category) in entries {
        let category = normalize_category(raw_category);
        grouped
            .entry(category.clone())
            .or_default()
            .push(FacilityEntry {
                id: id.clone(),
                name: title.clone(),
                cover: cover.clone(),
                category,
            });
    }

    grouped
}
