//! CSV loader for per-city trip files.

use std::fs::File;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::{City, Settings};
use crate::trip::{Capabilities, RawDataset, TripRecord};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Cell values treated as missing, besides the empty cell.
const NA_VALUES: [&str; 12] = [
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
];

/// A single row deserialized by header name. Columns a city lacks stay `None`.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    trip_duration: Option<String>,
    #[serde(rename = "Start Station", default)]
    start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

fn present(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.is_empty() && !NA_VALUES.contains(&s.as_str()))
}

/// Parses a numeric cell. Missing markers and non-finite values become `None`.
fn parse_number(cell: Option<String>, column: &str, row: usize) -> Result<Option<f64>> {
    let Some(s) = present(cell) else {
        return Ok(None);
    };
    let value: f64 = s
        .parse()
        .with_context(|| format!("row {row}: invalid {column} '{s}'"))?;
    Ok(value.is_finite().then_some(value))
}

impl RawRow {
    fn into_record(self, row: usize) -> Result<TripRecord> {
        let start_time = parse_timestamp(&self.start_time)
            .with_context(|| format!("row {row}: invalid Start Time '{}'", self.start_time))?;
        let end_time = present(self.end_time)
            .map(|s| {
                parse_timestamp(&s).with_context(|| format!("row {row}: invalid End Time '{s}'"))
            })
            .transpose()?;

        Ok(TripRecord {
            start_time,
            end_time,
            trip_duration: parse_number(self.trip_duration, "Trip Duration", row)?,
            start_station: present(self.start_station),
            end_station: present(self.end_station),
            user_type: present(self.user_type),
            gender: present(self.gender),
            birth_year: parse_number(self.birth_year, "Birth Year", row)?,
        })
    }
}

/// Parses a source timestamp such as `2017-01-01 00:07:57`.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ts);
        }
    }
    anyhow::bail!("unrecognized timestamp format")
}

/// Reads trips from any CSV source with a header row.
///
/// # Errors
///
/// Returns an error if the header is unreadable, a row does not match the
/// expected columns, or a timestamp cannot be parsed. Row numbers in error
/// messages are 1-based and exclude the header.
pub fn read_trips<R: Read>(reader: R) -> Result<RawDataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let capabilities = Capabilities::from_headers(rdr.headers()?.iter());
    debug!(?capabilities, "Detected dataset columns");

    let mut records = Vec::new();
    for (idx, result) in rdr.deserialize().enumerate() {
        let row = idx + 1;
        let raw: RawRow = result.with_context(|| format!("row {row}: malformed record"))?;
        records.push(raw.into_record(row)?);
    }

    Ok(RawDataset {
        capabilities,
        records,
    })
}

/// Loads the trip file for `city` from the configured data directory.
#[tracing::instrument(skip_all, fields(city = %city))]
pub fn load_city(settings: &Settings, city: City) -> Result<RawDataset> {
    let path = settings.city_path(city);
    let file =
        File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
    let dataset =
        read_trips(file).with_context(|| format!("failed to read {}", path.display()))?;

    info!(rows = dataset.records.len(), path = %path.display(), "Dataset loaded");
    Ok(dataset)
}
