//! Record building and aggregation.
//!
//! - [`extract_from_ad_urls`] turns ad URLs into [`AdRecord`](crate::AdRecord)s
//! - [`build_insights`] rolls records (or search URLs) up into an
//!   [`InsightsReport`](crate::InsightsReport)

mod ads;
mod insights;

pub use ads::{build_ad_record, extract_from_ad_urls, extract_from_ad_urls_with_stats};
pub use insights::build_insights;
