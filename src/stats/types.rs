//! Result types produced by the statistics functions.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// Result of one statistics function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Outcome<T> {
    Computed(T),
    /// The filtered dataset has no rows.
    NoRecords,
    /// A column the whole report depends on is absent from the source file.
    Unavailable { column: &'static str },
}

impl<T> Outcome<T> {
    pub fn computed(&self) -> Option<&T> {
        match self {
            Outcome::Computed(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_no_records(&self) -> bool {
        matches!(self, Outcome::NoRecords)
    }
}

/// Most common month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemporalStats {
    pub month: String,
    pub month_number: u32,
    pub weekday: String,
    pub hour: u32,
}

/// Most used stations and route. `None` marks a field that is not available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<String>,
}

/// A signed span of whole seconds split into days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Elapsed {
    pub negative: bool,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Elapsed {
    pub fn from_seconds(total: i64) -> Self {
        let abs = total.unsigned_abs();
        Self {
            negative: total < 0,
            days: abs / 86_400,
            hours: abs % 86_400 / 3_600,
            minutes: abs % 3_600 / 60,
            seconds: abs % 60,
        }
    }
}

/// Total and mean trip duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub total: Elapsed,
    /// Rounded to one decimal. `None` when no row carries a duration.
    pub mean_seconds: Option<f64>,
    pub trips_with_duration: usize,
}

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

/// Demographic breakdowns. Each field is `None` when its column is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    pub user_types: Option<Vec<(String, usize)>>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

/// A statistics result and how long it took to compute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    pub result: T,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// The four report slots of one pipeline run, always all present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reports {
    pub temporal: Timed<Outcome<TemporalStats>>,
    pub stations: Timed<Outcome<StationStats>>,
    pub duration: Timed<Outcome<DurationStats>>,
    pub users: Timed<Outcome<UserStats>>,
}
