//! Fixed option tables and runtime settings.
//!
//! The city, month and day tables are closed sets. Runtime settings come from
//! the environment (after `.env` is loaded by the binary).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SelectorError;

/// Month selector values accepted by the filter. Index 0 disables the filter,
/// every other index is the calendar month number.
pub const MONTH_OPTIONS: [&str; 7] = [
    "all", "january", "february", "march", "april", "may", "june",
];

/// Day selector values accepted by the filter.
pub const DAY_OPTIONS: [&str; 8] = [
    "all",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_LOG_FILE: &str = "logs/bikeshare_stats.log";

/// A city with a bike-share dataset on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// The key users type to pick this city.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// CSV file holding this city's trips, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for City {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.key() == wanted)
            .ok_or_else(|| SelectorError::InvalidCity(s.to_string()))
    }
}

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub log_file_path: PathBuf,
}

impl Settings {
    /// Reads `BIKESHARE_DATA_DIR` and `LOG_FILE_PATH`, falling back to defaults.
    pub fn from_env() -> Self {
        let data_dir =
            std::env::var("BIKESHARE_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let log_file_path =
            std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Self {
            data_dir: PathBuf::from(data_dir),
            log_file_path: PathBuf::from(log_file_path),
        }
    }

    /// Replaces the data directory when one was given explicitly.
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Full path of the CSV file for `city`.
    pub fn city_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_file_path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
