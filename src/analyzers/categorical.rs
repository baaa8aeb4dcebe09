//! Mean usage grouped by weather and season labels.

use std::collections::BTreeMap;

use crate::analyzers::types::GroupMean;
use crate::records::DailyRecord;

/// Mean rentals per weather label, descending by mean. Labels with no rows
/// are absent; an unmapped code groups under its "Unknown" label like any
/// other bucket.
pub fn weather_means(rows: &[DailyRecord]) -> Vec<GroupMean> {
    grouped_means(rows, |r| r.weather.label())
}

/// Mean rentals per season label, descending by mean.
pub fn season_means(rows: &[DailyRecord]) -> Vec<GroupMean> {
    grouped_means(rows, |r| r.season.label())
}

fn grouped_means<F>(rows: &[DailyRecord], key: F) -> Vec<GroupMean>
where
    F: Fn(&DailyRecord) -> &'static str,
{
    let mut groups: BTreeMap<&'static str, (u64, u32)> = BTreeMap::new();

    for row in rows {
        let entry = groups.entry(key(row)).or_default();
        entry.0 += u64::from(row.total_count);
        entry.1 += 1;
    }

    // BTreeMap iterates alphabetically and the sort is stable, so equal
    // means keep alphabetical label order.
    let mut means: Vec<GroupMean> = groups
        .into_iter()
        .map(|(label, (sum, count))| GroupMean {
            label: label.to_string(),
            mean: sum as f64 / f64::from(count),
        })
        .collect();

    means.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    means
}
