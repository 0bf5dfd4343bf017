//! Ad record building.

use crate::config::DEFAULT_SPEND_CURRENCY;
use crate::error_handling::ExtractionStats;
use crate::fetch::PageFetcher;
use crate::models::{AdRecord, AdType};
use crate::parse::{extract_open_graph, resolve_ad_ids, OpenGraph};

/// Builds one record per ad URL, in input order.
///
/// URLs are fetched one at a time. A URL whose page cannot be fetched still
/// yields a record carrying the ids parsed from the URL itself.
pub async fn extract_from_ad_urls<F: PageFetcher>(urls: &[String], fetcher: &F) -> Vec<AdRecord> {
    let mut stats = ExtractionStats::new();
    extract_from_ad_urls_with_stats(urls, fetcher, &mut stats).await
}

/// Same as [`extract_from_ad_urls`], also counting fetch outcomes in `stats`.
pub async fn extract_from_ad_urls_with_stats<F: PageFetcher>(
    urls: &[String],
    fetcher: &F,
    stats: &mut ExtractionStats,
) -> Vec<AdRecord> {
    let total = urls.len();
    let mut records = Vec::with_capacity(total);

    for (index, url) in urls.iter().enumerate() {
        log::info!("[{}/{}] Processing ad {}", index + 1, total, url);
        let og = fetch_open_graph(url, fetcher, stats).await;
        records.push(build_ad_record(url, &og));
        stats.record_processed();
    }

    records
}

/// Fetches `url` and extracts its Open Graph tags, degrading to all-absent
/// tags on any failure.
async fn fetch_open_graph<F: PageFetcher>(
    url: &str,
    fetcher: &F,
    stats: &mut ExtractionStats,
) -> OpenGraph {
    match fetcher.fetch(url).await {
        Ok(result) => match result.html {
            Some(html) => {
                stats.record_html();
                extract_open_graph(&html)
            }
            None => {
                log::warn!(
                    "{url}: HTTP {} from {}, no page metadata",
                    result.status,
                    result.final_url
                );
                stats.record_non_success_status();
                OpenGraph::default()
            }
        },
        Err(e) => {
            log::warn!("{url}: page unavailable ({}): {e}", e.kind());
            stats.record_failure(e.kind());
            OpenGraph::default()
        }
    }
}

/// Combines the ids parsed from `url` with the page's Open Graph tags.
pub fn build_ad_record(url: &str, og: &OpenGraph) -> AdRecord {
    let ids = resolve_ad_ids(url);
    let ad_type = if og.has_image() {
        AdType::Image
    } else {
        AdType::Unknown
    };

    AdRecord {
        ad_advertiser_id: ids.advertiser_id.unwrap_or_default(),
        // The advertiser name is only rendered client-side
        ad_advertiser_name: String::new(),
        ad_id: ids.creative_id.unwrap_or_default(),
        ad_type,
        ad_start_date: None,
        ad_end_date: None,
        ad_number_days_running: None,
        ad_visible_countries: Vec::new(),
        ad_image_link: og.image.clone(),
        ad_spend_range: None,
        ad_impressions_range: None,
        ad_spend_currency: DEFAULT_SPEND_CURRENCY.to_string(),
        ad_url: url.to_string(),
        headline: og.title.clone(),
        description: og.description.clone(),
    }
}
