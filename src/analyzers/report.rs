//! Assembles the full set of aggregates for one year selection.

use std::collections::BTreeSet;

use tracing::debug;

use crate::analyzers::types::UsageReport;
use crate::analyzers::{categorical, filter, hourly, kpi};
use crate::records::{DailyRecord, HourlyRecord};

const TOP_HOURS: usize = 5;

/// Filters both tables to `years` and runs every aggregator. Pure function
/// of its inputs; identical inputs produce an identical report.
pub fn build(daily: &[DailyRecord], hourly: &[HourlyRecord], years: &BTreeSet<i32>) -> UsageReport {
    let daily_f = filter::by_years(daily, years);
    let hourly_f = filter::by_years(hourly, years);

    debug!(
        daily_rows = daily_f.len(),
        hourly_rows = hourly_f.len(),
        "Tables filtered"
    );

    let overall = hourly::overall_by_hour(&hourly_f);
    let top5_hours = hourly::top_hours(&overall, TOP_HOURS);

    UsageReport {
        schema_version: 1,
        years: years.iter().copied().collect(),
        kpi: kpi::summarize(&daily_f),
        by_hour_and_workingday: hourly::by_hour_and_workingday(&hourly_f),
        overall_by_hour: overall,
        top5_hours,
        weather_means: categorical::weather_means(&daily_f),
        season_means: categorical::season_means(&daily_f),
    }
}
