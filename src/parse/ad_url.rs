//! Ad identifier extraction from ad-transparency URLs.
//!
//! Ad pages live under
//! `https://adstransparency.google.com/advertiser/AR<digits>/creative/CR<digits>/`.
//! The advertiser and creative ids are read straight from that path. URLs
//! that do not follow the pattern fall back to positional path segments.

use regex::Regex;
use std::sync::LazyLock;

const AD_URL_PATTERN: &str = r"(?i)^https?://(?:www\.)?adstransparency\.google\.com/advertiser/(?P<advertiser>AR[0-9]+)/creative/(?P<creative>CR[0-9]+)/?";

static AD_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(AD_URL_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in AD_URL_RE: {}. This is a programming error.",
            AD_URL_PATTERN, e
        )
    })
});

/// Advertiser and creative ids found in an ad URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdIdentifiers {
    /// `AR...` id, or the third-from-last path segment
    pub advertiser_id: Option<String>,
    /// `CR...` id, or the last path segment
    pub creative_id: Option<String>,
}

impl AdIdentifiers {
    fn is_complete(&self) -> bool {
        let non_empty = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        non_empty(&self.advertiser_id) && non_empty(&self.creative_id)
    }
}

/// Matches `url` against the ad-transparency pattern.
///
/// The match is case-insensitive but the captured ids keep the case they have
/// in `url`. Returns empty identifiers when the pattern does not match.
pub fn parse_ids_from_ad_url(url: &str) -> AdIdentifiers {
    match AD_URL_RE.captures(url.trim()) {
        Some(caps) => AdIdentifiers {
            advertiser_id: caps.name("advertiser").map(|m| m.as_str().to_string()),
            creative_id: caps.name("creative").map(|m| m.as_str().to_string()),
        },
        None => AdIdentifiers::default(),
    }
}

/// Positional fallback: the last non-empty `/` segment is the creative id and
/// the third from last (when there are at least three) is the advertiser id.
pub fn fallback_ids_from_path(url: &str) -> AdIdentifiers {
    let parts: Vec<&str> = url.split('/').filter(|p| !p.is_empty()).collect();
    let creative_id = parts.last().map(|s| s.to_string());
    let advertiser_id = if parts.len() >= 3 {
        Some(parts[parts.len() - 3].to_string())
    } else {
        None
    };
    AdIdentifiers {
        advertiser_id,
        creative_id,
    }
}

/// Resolves the ids of an ad URL, using the positional fallback whenever the
/// pattern match fails or yields an empty id.
pub fn resolve_ad_ids(url: &str) -> AdIdentifiers {
    let ids = parse_ids_from_ad_url(url);
    if ids.is_complete() {
        ids
    } else {
        log::debug!("URL does not match the ad pattern, using path segments: {url}");
        fallback_ids_from_path(url)
    }
}
