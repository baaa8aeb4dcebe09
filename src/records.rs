//! Domain records for the two bike-share tables and their categorical
//! derivations.
//!
//! The raw sources code season, weather, and year as small integers. Each
//! code maps through a closed enum with an explicit [`Season::Unknown`] /
//! [`Weather::Unknown`] variant so an out-of-range code lands in a visible
//! bucket instead of crashing the groupers.

use chrono::NaiveDate;
use serde::Serialize;

/// Season category decoded from the raw `season` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    Unknown,
}

impl Season {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Season::Spring,
            2 => Season::Summer,
            3 => Season::Fall,
            4 => Season::Winter,
            _ => Season::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::Unknown => "Unknown",
        }
    }
}

/// Weather situation decoded from the raw `weathersit` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weather {
    Clear,
    Mist,
    LightPrecipitation,
    HeavyPrecipitation,
    Unknown,
}

impl Weather {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Weather::Clear,
            2 => Weather::Mist,
            3 => Weather::LightPrecipitation,
            4 => Weather::HeavyPrecipitation,
            _ => Weather::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Weather::Clear => "Clear/Few clouds",
            Weather::Mist => "Mist/Cloudy",
            Weather::LightPrecipitation => "Light snow/rain",
            Weather::HeavyPrecipitation => "Heavy rain/snow",
            Weather::Unknown => "Unknown",
        }
    }
}

/// Decodes the raw `yr` column (0 = 2011, 1 = 2012). Any other code has no
/// calendar year and never matches a year filter.
pub fn year_from_code(code: u8) -> Option<i32> {
    match code {
        0 => Some(2011),
        1 => Some(2012),
        _ => None,
    }
}

/// One decorated row of the daily-granularity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub weather: Weather,
    pub year: Option<i32>,
    pub total_count: u32,
    pub registered_count: u32,
    pub casual_count: u32,
}

/// One decorated row of the hourly-granularity table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub hour: u8,
    pub season: Season,
    pub weather: Weather,
    pub year: Option<i32>,
    pub working_day: bool,
    pub total_count: u32,
}

/// Seam for the year filter: any record carrying a derived calendar year.
pub trait YearKeyed {
    fn year(&self) -> Option<i32>;
}

impl YearKeyed for DailyRecord {
    fn year(&self) -> Option<i32> {
        self.year
    }
}

impl YearKeyed for HourlyRecord {
    fn year(&self) -> Option<i32> {
        self.year
    }
}
