//! Session-scoped cache for parsed tables.
//!
//! Keyed on a hash of the raw source bytes, so repeated loads of an
//! unchanged source skip re-parsing. Owned explicitly by the caller, one per
//! analysis session.

use anyhow::Result;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use tracing::debug;

use crate::loader::{parse_daily, parse_hourly};
use crate::records::{DailyRecord, HourlyRecord};

#[derive(Default)]
pub struct DatasetCache {
    daily: Option<(u64, Arc<Vec<DailyRecord>>)>,
    hourly: Option<(u64, Arc<Vec<HourlyRecord>>)>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the parsed daily table for `bytes`, reusing the cached parse
    /// when the bytes are identical to the previous call.
    pub fn daily(&mut self, bytes: &[u8]) -> Result<Arc<Vec<DailyRecord>>> {
        let key = content_key(bytes);
        if let Some((cached_key, table)) = &self.daily {
            if *cached_key == key {
                debug!(key, "Daily table cache hit");
                return Ok(Arc::clone(table));
            }
        }

        let table = Arc::new(parse_daily(bytes)?);
        self.daily = Some((key, Arc::clone(&table)));
        Ok(table)
    }

    /// Returns the parsed hourly table for `bytes`, reusing the cached parse
    /// when the bytes are identical to the previous call.
    pub fn hourly(&mut self, bytes: &[u8]) -> Result<Arc<Vec<HourlyRecord>>> {
        let key = content_key(bytes);
        if let Some((cached_key, table)) = &self.hourly {
            if *cached_key == key {
                debug!(key, "Hourly table cache hit");
                return Ok(Arc::clone(table));
            }
        }

        let table = Arc::new(parse_hourly(bytes)?);
        self.hourly = Some((key, Arc::clone(&table)));
        Ok(table)
    }
}

fn content_key(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAILY_CSV: &str = "\
dteday,season,yr,weathersit,cnt,registered,casual
2011-01-01,1,0,1,100,80,20
";

    const OTHER_DAILY_CSV: &str = "\
dteday,season,yr,weathersit,cnt,registered,casual
2012-07-01,3,1,1,200,150,50
";

    #[test]
    fn test_identical_bytes_hit_cache() {
        let mut cache = DatasetCache::new();
        let first = cache.daily(DAILY_CSV.as_bytes()).unwrap();
        let second = cache.daily(DAILY_CSV.as_bytes()).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changed_bytes_reparse() {
        let mut cache = DatasetCache::new();
        let first = cache.daily(DAILY_CSV.as_bytes()).unwrap();
        let second = cache.daily(OTHER_DAILY_CSV.as_bytes()).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second[0].total_count, 200);
    }

    #[test]
    fn test_daily_and_hourly_cached_independently() {
        let hourly_csv = "dteday,hr,season,yr,weathersit,workingday,cnt\n\
                          2011-01-01,8,1,0,1,1,50\n";
        let mut cache = DatasetCache::new();
        let daily = cache.daily(DAILY_CSV.as_bytes()).unwrap();
        let hourly = cache.hourly(hourly_csv.as_bytes()).unwrap();
        assert_eq!(daily.len(), 1);
        assert_eq!(hourly.len(), 1);
    }
}
