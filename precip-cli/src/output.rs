//! Rendering of the three lifecycle surfaces: the loading line, the marked
//! error line, and the result section.

use precip_core::ForecastReport;

/// Shown when a submission starts (the submit control's loading label).
pub fn loading_line() -> String {
    "Loading...".to_string()
}

/// Error line, marked so it stands out from regular output.
pub fn error_line(message: &str) -> String {
    format!("⚠️  {message}")
}

/// Render the result section: the average, then one line per monthly
/// average (forced to two decimals), then one line per prediction (value as
/// received), in the order the service sent them.
pub fn render_report(report: &ForecastReport) -> String {
    let mut out = String::new();

    out.push_str("Results\n");
    out.push_str(&format!(
        "Average Daily Precipitation: {} mm\n",
        report.metadata.average_daily_precip_mm
    ));
    if let Some(range) = &report.metadata.user_data_range {
        out.push_str(&format!("Queried range: {range}\n"));
    }

    out.push_str("\nMonthly Averages\n");
    for entry in &report.monthly_averages {
        out.push_str(&format!("  Month {}: {:.2} mm\n", entry.month, entry.data));
    }

    out.push_str("\n6-Month Predictions\n");
    for entry in &report.six_month_predictions {
        out.push_str(&format!(
            "  Month {}: {} mm\n",
            entry.month, entry.predicted_avg_precip_mm
        ));
    }

    out
}
