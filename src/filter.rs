//! Month and day-of-week selectors and the row filter they drive.

use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};
use serde::{Serialize, Serializer};

use crate::config::{City, DAY_OPTIONS, MONTH_OPTIONS};
use crate::error::SelectorError;
use crate::trip::{Dataset, Trip};

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Restricts trips to one month. Only January through June can be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthSelector {
    All,
    Only(Month),
}

impl MonthSelector {
    fn matches(self, trip: &Trip) -> bool {
        match self {
            MonthSelector::All => true,
            MonthSelector::Only(m) => trip.month == m.number_from_month(),
        }
    }
}

impl FromStr for MonthSelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match MONTH_OPTIONS.iter().position(|opt| *opt == wanted) {
            Some(0) => Ok(MonthSelector::All),
            Some(idx) => Month::try_from(idx as u8)
                .map(MonthSelector::Only)
                .map_err(|_| SelectorError::InvalidMonth(s.to_string())),
            None => Err(SelectorError::InvalidMonth(s.to_string())),
        }
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelector::All => f.write_str("all"),
            MonthSelector::Only(m) => f.write_str(m.name()),
        }
    }
}

impl Serialize for MonthSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Restricts trips to one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySelector {
    All,
    Only(Weekday),
}

impl DaySelector {
    fn matches(self, trip: &Trip) -> bool {
        match self {
            DaySelector::All => true,
            DaySelector::Only(d) => trip.weekday == d,
        }
    }
}

impl FromStr for DaySelector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        match DAY_OPTIONS.iter().position(|opt| *opt == wanted) {
            Some(0) => Ok(DaySelector::All),
            Some(idx) => Ok(DaySelector::Only(WEEKDAYS[idx - 1])),
            None => Err(SelectorError::InvalidDay(s.to_string())),
        }
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelector::All => f.write_str("all"),
            DaySelector::Only(d) => f.write_str(crate::trip::weekday_name(*d)),
        }
    }
}

impl Serialize for DaySelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The validated city, month and day choice for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthSelector,
    pub day: DaySelector,
}

impl FilterSelection {
    /// Validates all three values, failing on the first one outside its set.
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self, SelectorError> {
        Ok(Self {
            city: city.parse()?,
            month: month.parse()?,
            day: day.parse()?,
        })
    }
}

/// Keeps the trips matching both selectors, in their original order.
pub fn filter(dataset: &Dataset, month: MonthSelector, day: DaySelector) -> Dataset {
    Dataset {
        capabilities: dataset.capabilities,
        trips: dataset
            .iter()
            .filter(|t| month.matches(t) && day.matches(t))
            .cloned()
            .collect(),
    }
}
