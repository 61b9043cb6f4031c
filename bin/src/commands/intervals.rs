//! Intervals command implementation.

use closeline_lib::prelude::*;

/// Print the supported intervals and how each is produced.
pub(crate) fn list_intervals() {
    println!(
        "{:<12} {:<10} {:<10} {:<22}",
        "INTERVAL", "FETCH", "RESAMPLE", "LABEL"
    );
    println!("{}", "-".repeat(56));

    for interval in Interval::all() {
        let spec = interval.spec();
        println!(
            "{:<12} {:<10} {:<10} {:<22}",
            interval.label(),
            spec.granularity.as_str(),
            spec.rule.as_str(),
            spec.rule.label_pattern()
        );
    }

    if let Some(days) = FetchGranularity::Hourly.lookback_limit_days() {
        println!("\nNote: Hourly data is limited to the last {days} days.");
    }
}
