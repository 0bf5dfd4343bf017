//! URL and HTML parsing.
//!
//! This module extracts structured data from ad and search inputs:
//! - Advertiser / creative ids from ad-transparency URLs
//! - Open Graph tags (title, description, image) from ad pages
//! - Search terms from search URLs
//!
//! Parsing never fails: malformed input degrades to absent values.

mod ad_url;
mod open_graph;
mod search;

// Re-export public API
pub use ad_url::{fallback_ids_from_path, parse_ids_from_ad_url, resolve_ad_ids, AdIdentifiers};
pub use open_graph::{extract_open_graph, OpenGraph};
pub use search::{extract_search_terms, search_terms_from_url};

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
