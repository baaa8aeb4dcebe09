//! CSV loader for the daily and hourly bike-share tables.
//!
//! Parses raw bytes into decorated records in a single pass. An unparsable
//! date or an out-of-range hour aborts the whole load with a row-numbered
//! diagnostic; an unmapped category code does not (it decodes to the
//! `Unknown` variant, see [`crate::records`]).

use anyhow::{Context, Result, ensure};
use chrono::NaiveDate;
use flate2::read::GzDecoder;
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

use crate::records::{DailyRecord, HourlyRecord, Season, Weather, year_from_code};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw daily row as it appears in the source CSV. Columns beyond these are
/// ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct RawDailyRow {
    dteday: String,
    season: u8,
    yr: u8,
    weathersit: u8,
    cnt: u32,
    registered: u32,
    casual: u32,
}

/// Raw hourly row as it appears in the source CSV.
#[derive(Debug, Deserialize)]
struct RawHourlyRow {
    dteday: String,
    hr: u8,
    season: u8,
    yr: u8,
    weathersit: u8,
    workingday: u8,
    cnt: u32,
}

/// Parses the daily-granularity CSV into decorated records.
///
/// # Errors
///
/// Returns an error if the bytes are not valid CSV for the expected columns
/// or if any row's date fails to parse.
pub fn parse_daily(bytes: &[u8]) -> Result<Vec<DailyRecord>> {
    let bytes = decompress_if_gzip(bytes)?;
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let mut rows = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let raw: RawDailyRow = result.with_context(|| format!("daily row {}", i + 1))?;
        let date = parse_date(&raw.dteday, i)?;

        rows.push(DailyRecord {
            date,
            season: Season::from_code(raw.season),
            weather: Weather::from_code(raw.weathersit),
            year: year_from_code(raw.yr),
            total_count: raw.cnt,
            registered_count: raw.registered,
            casual_count: raw.casual,
        });
    }

    debug!(rows = rows.len(), "Daily table parsed");
    Ok(rows)
}

/// Parses the hourly-granularity CSV into decorated records.
///
/// # Errors
///
/// Same policy as [`parse_daily`], plus an out-of-range `hr` aborts the load.
pub fn parse_hourly(bytes: &[u8]) -> Result<Vec<HourlyRecord>> {
    let bytes = decompress_if_gzip(bytes)?;
    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let mut rows = Vec::new();

    for (i, result) in reader.deserialize().enumerate() {
        let raw: RawHourlyRow = result.with_context(|| format!("hourly row {}", i + 1))?;
        let date = parse_date(&raw.dteday, i)?;
        ensure!(
            raw.hr <= 23,
            "hourly row {}: hour {} out of range 0-23",
            i + 1,
            raw.hr
        );

        rows.push(HourlyRecord {
            date,
            hour: raw.hr,
            season: Season::from_code(raw.season),
            weather: Weather::from_code(raw.weathersit),
            year: year_from_code(raw.yr),
            working_day: raw.workingday != 0,
            total_count: raw.cnt,
        });
    }

    debug!(rows = rows.len(), "Hourly table parsed");
    Ok(rows)
}

fn parse_date(value: &str, row_index: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .with_context(|| format!("row {}: unparsable date {:?}", row_index + 1, value))
}

/// Inflates gzip-compressed sources, detected by the gzip magic bytes.
/// Uncompressed input passes through untouched.
fn decompress_if_gzip(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.starts_with(&[0x1f, 0x8b]) {
        let mut out = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut out)
            .context("gzip decompression failed")?;
        Ok(out)
    } else {
        Ok(bytes.to_vec())
    }
}
