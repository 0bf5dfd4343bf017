//! Search term extraction from search URLs.

/// Query parameters that carry the search term, in priority order.
const SEARCH_QUERY_PARAMS: &[&str] = &["q", "query"];

/// Terms carried by a single search URL.
///
/// Every non-empty value of `q` is returned; failing that every non-empty
/// value of `query`; failing that the last non-empty path segment, exactly as
/// written in `url`.
pub fn search_terms_from_url(url: &str) -> Vec<String> {
    let (path, query) = split_path_and_query(url);

    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    for param in SEARCH_QUERY_PARAMS {
        let values: Vec<String> = pairs
            .iter()
            .filter(|(k, v)| k.as_str() == *param && !v.is_empty())
            .map(|(_, v)| v.clone())
            .collect();
        if !values.is_empty() {
            return values;
        }
    }

    path.split('/')
        .rfind(|segment| !segment.is_empty())
        .map(|segment| vec![segment.to_string()])
        .unwrap_or_default()
}

/// Collects the terms of all URLs in order and drops exact duplicates,
/// keeping the first occurrence.
pub fn extract_search_terms(urls: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    urls.iter()
        .flat_map(|u| search_terms_from_url(u))
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Splits `url` into its raw path and query.
///
/// The path is returned as written: no percent-encoding and no dot-segment
/// resolution. Only the query goes through `form_urlencoded`.
fn split_path_and_query(url: &str) -> (&str, &str) {
    let without_fragment = url.split('#').next().unwrap_or_default();
    let (rest, query) = without_fragment
        .split_once('?')
        .unwrap_or((without_fragment, ""));
    (strip_authority(strip_scheme(rest)), query)
}

fn strip_scheme(url: &str) -> &str {
    match url.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => url,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn strip_authority(url: &str) -> &str {
    match url.strip_prefix("//") {
        Some(after) => after.find('/').map_or("", |i| &after[i..]),
        None => url,
    }
}
