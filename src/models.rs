//! Output record types.
//!
//! Field names are part of the output format and are serialized exactly as
//! declared. Optional values serialize as `null`; no field is ever skipped.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Kind of creative, inferred from the page's Open Graph tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdType {
    /// The page declared an `og:image`
    Image,
    /// No image found on the page
    Unknown,
}

/// One normalized advertisement.
///
/// Dates, spend and impressions cannot be read without rendering the page,
/// so they are always `None` and stay in the record as explicit nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdRecord {
    /// Advertiser id (`AR...`), empty when unknown
    pub ad_advertiser_id: String,
    /// Advertiser display name, usually empty
    pub ad_advertiser_name: String,
    /// Creative id (`CR...`), empty when unknown
    pub ad_id: String,
    /// Creative kind
    pub ad_type: AdType,
    /// First day shown
    pub ad_start_date: Option<String>,
    /// Last day shown
    pub ad_end_date: Option<String>,
    /// Days between start and end
    pub ad_number_days_running: Option<u32>,
    /// Countries where the ad is shown
    pub ad_visible_countries: Vec<String>,
    /// Value of `og:image`
    pub ad_image_link: Option<String>,
    /// Spend bucket
    pub ad_spend_range: Option<String>,
    /// Impressions bucket
    pub ad_impressions_range: Option<String>,
    /// Currency of spend figures
    pub ad_spend_currency: String,
    /// Ad URL as given in the input
    pub ad_url: String,
    /// Value of `og:title`
    pub headline: Option<String>,
    /// Value of `og:description`
    pub description: Option<String>,
}

/// Where an insights report was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InsightsSource {
    /// Built from ad records
    Ads,
    /// Built from search URLs because there were no ads
    Search,
}

/// Ads grouped under one advertiser key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertiserInsight {
    /// Advertiser id of the first record in the group
    pub advertiser_id: String,
    /// Advertiser name of the first record in the group
    pub advertiser_name: String,
    /// Number of ads in the group
    pub ads_count: u64,
    /// Always 0
    pub estimated_spend: u64,
}

/// Ads visible in one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInsight {
    /// Country code as listed on the ad
    pub country: String,
    /// Number of ads in the group
    pub ads_count: u64,
    /// Always 0
    pub estimated_spend: u64,
}

/// Aggregate statistics for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightsReport {
    /// Number of ad records
    pub insights_total_ads: u64,
    /// Number of ad records
    pub insights_total_ads_spend: u64,
    /// Advertiser groups in order of first occurrence
    pub insights_advertisers: Vec<AdvertiserInsight>,
    /// Countries in order of first occurrence
    pub insights_regions: Vec<RegionInsight>,
    /// Input the report was built from
    pub source: InsightsSource,
    /// De-duplicated search terms (search reports only)
    pub search_terms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_record() -> AdRecord {
        AdRecord {
            ad_advertiser_id: "AR1".to_string(),
            ad_advertiser_name: String::new(),
            ad_id: "CR1".to_string(),
            ad_type: AdType::Unknown,
            ad_start_date: None,
            ad_end_date: None,
            ad_number_days_running: None,
            ad_visible_countries: vec![],
            ad_image_link: None,
            ad_spend_range: None,
            ad_impressions_range: None,
            ad_spend_currency: "USD".to_string(),
            ad_url: "https://example.com/ad".to_string(),
            headline: None,
            description: None,
        }
    }

    #[test]
    fn test_ad_record_serializes_every_field() {
        let value = serde_json::to_value(sample_record()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "ad_advertiser_id",
            "ad_advertiser_name",
            "ad_id",
            "ad_type",
            "ad_start_date",
            "ad_end_date",
            "ad_number_days_running",
            "ad_visible_countries",
            "ad_image_link",
            "ad_spend_range",
            "ad_impressions_range",
            "ad_spend_currency",
            "ad_url",
            "headline",
            "description",
        ] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj.len(), 15);
        assert_eq!(obj["ad_start_date"], serde_json::Value::Null);
        assert_eq!(obj["ad_type"], json!("unknown"));
    }

    #[test]
    fn test_insights_report_shape() {
        let report = InsightsReport {
            insights_total_ads: 0,
            insights_total_ads_spend: 0,
            insights_advertisers: vec![],
            insights_regions: vec![],
            source: InsightsSource::Search,
            search_terms: vec!["shoes".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "insights_total_ads": 0,
                "insights_total_ads_spend": 0,
                "insights_advertisers": [],
                "insights_regions": [],
                "source": "search",
                "search_terms": ["shoes"]
            })
        );
    }

    #[test]
    fn test_enum_display_matches_serialization() {
        assert_eq!(AdType::Image.to_string(), "image");
        assert_eq!(InsightsSource::Ads.to_string(), "ads");
    }
}
