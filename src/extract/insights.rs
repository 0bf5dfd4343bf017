//! Insights aggregation.
//!
//! Ads are grouped by advertiser key (advertiser id, else advertiser name,
//! else `"unknown"`) and by visible country. Groups are listed in order of
//! first occurrence. Spend is never known, so every spend figure is 0.

use std::collections::HashMap;

use crate::config::UNKNOWN_ADVERTISER_KEY;
use crate::models::{AdRecord, AdvertiserInsight, InsightsReport, InsightsSource, RegionInsight};
use crate::parse::extract_search_terms;

/// Builds the insights report for a run.
///
/// Ad records take priority: search URLs are only looked at when there are
/// no ad records.
pub fn build_insights(ads: &[AdRecord], search_urls: &[String]) -> InsightsReport {
    if ads.is_empty() {
        let search_terms = extract_search_terms(search_urls);
        log::debug!(
            "Derived {} search term(s) from {} search URL(s)",
            search_terms.len(),
            search_urls.len()
        );
        return InsightsReport {
            insights_total_ads: 0,
            insights_total_ads_spend: 0,
            insights_advertisers: Vec::new(),
            insights_regions: Vec::new(),
            source: InsightsSource::Search,
            search_terms,
        };
    }

    InsightsReport {
        insights_total_ads: ads.len() as u64,
        insights_total_ads_spend: 0,
        insights_advertisers: aggregate_advertisers(ads),
        insights_regions: aggregate_regions(ads),
        source: InsightsSource::Ads,
        search_terms: Vec::new(),
    }
}

fn advertiser_key(ad: &AdRecord) -> &str {
    if !ad.ad_advertiser_id.is_empty() {
        &ad.ad_advertiser_id
    } else if !ad.ad_advertiser_name.is_empty() {
        &ad.ad_advertiser_name
    } else {
        UNKNOWN_ADVERTISER_KEY
    }
}

fn aggregate_advertisers(ads: &[AdRecord]) -> Vec<AdvertiserInsight> {
    let mut groups: Vec<AdvertiserInsight> = Vec::new();
    let mut index_by_key: HashMap<&str, usize> = HashMap::new();

    for ad in ads {
        let index = *index_by_key.entry(advertiser_key(ad)).or_insert_with(|| {
            groups.push(AdvertiserInsight {
                advertiser_id: ad.ad_advertiser_id.clone(),
                advertiser_name: ad.ad_advertiser_name.clone(),
                ads_count: 0,
                estimated_spend: 0,
            });
            groups.len() - 1
        });
        groups[index].ads_count += 1;
    }

    groups
}

/// Counts (record, country) pairs per country. Records without countries
/// contribute nothing.
fn aggregate_regions(ads: &[AdRecord]) -> Vec<RegionInsight> {
    let mut regions: Vec<RegionInsight> = Vec::new();
    let mut index_by_country: HashMap<&str, usize> = HashMap::new();

    for country in ads.iter().flat_map(|ad| ad.ad_visible_countries.iter()) {
        let index = *index_by_country
            .entry(country.as_str())
            .or_insert_with(|| {
                regions.push(RegionInsight {
                    country: country.clone(),
                    ads_count: 0,
                    estimated_spend: 0,
                });
                regions.len() - 1
            });
        regions[index].ads_count += 1;
    }

    regions
}
