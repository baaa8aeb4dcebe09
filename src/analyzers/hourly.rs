//! Hour-of-day usage patterns over the filtered hourly table.
//!
//! Hours carrying no rows at all are absent from the results; an hour where
//! only one working-day group has rows keeps both cells, the empty one as an
//! explicit missing value, so consumers can align the two series on the hour
//! index.

use crate::analyzers::types::{HourMean, HourSplit};
use crate::analyzers::utility::group_mean;
use crate::records::HourlyRecord;

const HOURS: usize = 24;

/// Mean rentals per hour across all rows, hour ascending. At most 24 entries.
pub fn overall_by_hour(rows: &[HourlyRecord]) -> Vec<HourMean> {
    let mut sums = [0u64; HOURS];
    let mut counts = [0u32; HOURS];

    for row in rows {
        let h = row.hour as usize;
        sums[h] += u64::from(row.total_count);
        counts[h] += 1;
    }

    (0..HOURS)
        .filter_map(|h| {
            group_mean(sums[h], counts[h]).map(|mean| HourMean { hour: h as u8, mean })
        })
        .collect()
}

/// Mean rentals per hour, split by the working-day flag.
pub fn by_hour_and_workingday(rows: &[HourlyRecord]) -> Vec<HourSplit> {
    // index 0 = non-working day, 1 = working day
    let mut sums = [[0u64; HOURS]; 2];
    let mut counts = [[0u32; HOURS]; 2];

    for row in rows {
        let group = usize::from(row.working_day);
        let h = row.hour as usize;
        sums[group][h] += u64::from(row.total_count);
        counts[group][h] += 1;
    }

    (0..HOURS)
        .filter_map(|h| {
            let non_working = group_mean(sums[0][h], counts[0][h]);
            let working = group_mean(sums[1][h], counts[1][h]);
            if non_working.is_none() && working.is_none() {
                return None;
            }
            Some(HourSplit {
                hour: h as u8,
                non_working_mean: non_working,
                working_mean: working,
            })
        })
        .collect()
}

/// The `n` busiest hours, descending by mean. `overall` arrives hour
/// ascending, so the stable sort breaks ties toward the earlier hour.
pub fn top_hours(overall: &[HourMean], n: usize) -> Vec<HourMean> {
    let mut ranked = overall.to_vec();
    ranked.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    ranked.truncate(n);
    ranked
}
