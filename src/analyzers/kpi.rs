//! Headline figures over the filtered daily table.

use crate::analyzers::types::Kpi;
use crate::analyzers::utility::{mean, ratio};
use crate::records::DailyRecord;

/// Computes total rentals, average daily rentals, and the registered-user
/// ratio. An empty table yields (0, 0.0, 0.0) rather than NaN.
pub fn summarize(rows: &[DailyRecord]) -> Kpi {
    let total: u64 = rows.iter().map(|r| u64::from(r.total_count)).sum();
    let registered: u64 = rows.iter().map(|r| u64::from(r.registered_count)).sum();

    let daily_counts: Vec<f64> = rows.iter().map(|r| f64::from(r.total_count)).collect();

    Kpi {
        total_count: total,
        average_daily: mean(&daily_counts),
        registered_ratio: ratio(registered, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Season, Weather};
    use chrono::NaiveDate;

    fn daily(year: i32, total: u32, registered: u32) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            season: Season::Spring,
            weather: Weather::Clear,
            year: Some(year),
            total_count: total,
            registered_count: registered,
            casual_count: total - registered,
        }
    }

    #[test]
    fn test_empty_table_yields_zeros() {
        let kpi = summarize(&[]);
        assert_eq!(kpi.total_count, 0);
        assert_eq!(kpi.average_daily, 0.0);
        assert_eq!(kpi.registered_ratio, 0.0);
    }

    #[test]
    fn test_two_year_scenario() {
        let rows = vec![daily(2011, 100, 80), daily(2012, 200, 150)];
        let kpi = summarize(&rows);

        assert_eq!(kpi.total_count, 300);
        assert_eq!(kpi.average_daily, 150.0);
        assert!((kpi.registered_ratio - 230.0 / 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_is_total_over_row_count() {
        let rows = vec![daily(2011, 10, 5), daily(2011, 20, 10), daily(2011, 33, 30)];
        let kpi = summarize(&rows);
        assert!((kpi.average_daily - kpi.total_count as f64 / rows.len() as f64).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_bounds() {
        let rows = vec![daily(2011, 50, 50), daily(2011, 10, 0)];
        let kpi = summarize(&rows);
        assert!(kpi.registered_ratio >= 0.0 && kpi.registered_ratio <= 1.0);
    }
}
