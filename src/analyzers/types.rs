//! Output artifacts of the aggregation pipeline.
//!
//! These are the only shapes the presentation layer consumes; every field is
//! derived deterministically from the filtered tables, so serializing a
//! report twice over identical input yields identical bytes.

use serde::Serialize;

/// The three headline figures over the filtered daily table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub total_count: u64,
    pub average_daily: f64,
    pub registered_ratio: f64,
}

/// Mean rentals for one hour of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourMean {
    pub hour: u8,
    pub mean: f64,
}

/// Mean rentals for one hour, split by the working-day flag. A group with no
/// rows for this hour is an explicit missing cell, not zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourSplit {
    pub hour: u8,
    pub non_working_mean: Option<f64>,
    pub working_mean: Option<f64>,
}

/// Mean rentals for one categorical group (weather or season label).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub label: String,
    pub mean: f64,
}

/// Complete set of aggregates for one year selection, the full payload
/// handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageReport {
    pub schema_version: u8,
    pub years: Vec<i32>,
    pub kpi: Kpi,
    pub overall_by_hour: Vec<HourMean>,
    pub by_hour_and_workingday: Vec<HourSplit>,
    pub top5_hours: Vec<HourMean>,
    pub weather_means: Vec<GroupMean>,
    pub season_means: Vec<GroupMean>,
}
