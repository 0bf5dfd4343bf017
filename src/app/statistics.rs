//! End-of-run summary table.

use colored::*;

use crate::models::InsightsReport;

const SUMMARY_TITLE: &str = "Insights Summary";

/// Renders the insights summary as a two-column table.
pub fn format_insights_summary(insights: &InsightsReport) -> String {
    let rows = [
        ("Total Ads", insights.insights_total_ads.to_string()),
        (
            "Advertisers",
            insights.insights_advertisers.len().to_string(),
        ),
        ("Regions", insights.insights_regions.len().to_string()),
        (
            "Total Spend (est.)",
            insights.insights_total_ads_spend.to_string(),
        ),
    ];

    let metric_width = rows
        .iter()
        .map(|(metric, _)| metric.len())
        .max()
        .unwrap_or(0)
        .max("Metric".len());
    let value_width = rows
        .iter()
        .map(|(_, value)| value.len())
        .max()
        .unwrap_or(0)
        .max("Value".len());
    let rule = format!(
        "+{}+{}+",
        "-".repeat(metric_width + 2),
        "-".repeat(value_width + 2)
    );

    let mut out = String::new();
    out.push_str(SUMMARY_TITLE);
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "| {:<mw$} | {:<vw$} |\n",
        "Metric",
        "Value",
        mw = metric_width,
        vw = value_width
    ));
    out.push_str(&rule);
    out.push('\n');
    for (metric, value) in &rows {
        out.push_str(&format!(
            "| {:<mw$} | {:<vw$} |\n",
            metric,
            value,
            mw = metric_width,
            vw = value_width
        ));
    }
    out.push_str(&rule);
    out
}

/// Prints the insights summary table to stdout.
pub fn print_insights_summary(insights: &InsightsReport) {
    let table = format_insights_summary(insights);
    let mut lines = table.lines();
    if let Some(title) = lines.next() {
        println!("{}", title.bold());
    }
    for line in lines {
        println!("{line}");
    }
}
