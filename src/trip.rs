//! Trip records and the datasets that hold them.

use chrono::{NaiveDateTime, Weekday};
use serde::{Serialize, Serializer};

/// One trip as read from the source file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl TripRecord {
    /// A record with only the mandatory start time set.
    pub fn new(start_time: NaiveDateTime) -> Self {
        Self {
            start_time,
            end_time: None,
            trip_duration: None,
            start_station: None,
            end_station: None,
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }
}

/// Which optional columns the source file carries.
///
/// Computed once from the header row. Statistics consult these flags instead
/// of probing rows for a missing column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub has_start_station: bool,
    pub has_end_station: bool,
    pub has_duration: bool,
    pub has_user_type: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Capabilities {
    /// Every optional column present.
    pub fn all() -> Self {
        Self {
            has_start_station: true,
            has_end_station: true,
            has_duration: true,
            has_user_type: true,
            has_gender: true,
            has_birth_year: true,
        }
    }

    pub fn from_headers<'a>(headers: impl IntoIterator<Item = &'a str>) -> Self {
        let mut caps = Self::default();
        for header in headers {
            match header.trim() {
                "Start Station" => caps.has_start_station = true,
                "End Station" => caps.has_end_station = true,
                "Trip Duration" => caps.has_duration = true,
                "User Type" => caps.has_user_type = true,
                "Gender" => caps.has_gender = true,
                "Birth Year" => caps.has_birth_year = true,
                _ => {}
            }
        }
        caps
    }
}

/// Trips straight from the loader, before any field is derived.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    pub capabilities: Capabilities,
    pub records: Vec<TripRecord>,
}

/// A trip with its calendar fields and route derived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    #[serde(flatten)]
    pub record: TripRecord,
    /// Calendar month, 1 = January.
    pub month: u32,
    #[serde(rename = "day_of_week", serialize_with = "serialize_weekday")]
    pub weekday: Weekday,
    pub hour: u32,
    /// `"<start> to <end>"`, absent unless both stations are known.
    pub trip: Option<String>,
}

/// Derived trips in source order. Filtering yields a new `Dataset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub capabilities: Capabilities,
    pub trips: Vec<Trip>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }
}

/// Full English name of a weekday, e.g. "Monday".
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}
