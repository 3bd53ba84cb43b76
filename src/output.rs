//! Text and JSON rendering of pipeline results, plus raw-row paging.

use std::fmt;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::filter::{DaySelector, MonthSelector};
use crate::pipeline::PipelineOutput;
use crate::stats::{
    DurationStats, Elapsed, Outcome, Reports, StationStats, TemporalStats, Timed, UserStats,
};
use crate::trip::{Capabilities, Dataset, Trip};

/// Rows shown per page of raw data.
pub const RAW_PAGE_SIZE: usize = 5;

/// Separator printed after each report section.
pub const RULE: &str = "----------------------------------------";
const NO_RECORDS: &str = "There is no record with current filter";

impl fmt::Display for Elapsed {
    /// `H:MM:SS`, prefixed by `N day(s), ` when the span covers whole days.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match self.days {
            0 => {}
            1 => f.write_str("1 day, ")?,
            n => write!(f, "{n} days, ")?,
        }
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Body lines of one titled block of the text report.
pub trait ReportSection {
    const HEADING: &'static str;

    fn write_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

fn not_available(f: &mut fmt::Formatter<'_>, column: &str) -> fmt::Result {
    writeln!(
        f,
        "{column} stats cannot be calculated because {column} does not appear in the dataset"
    )
}

impl ReportSection for TemporalStats {
    const HEADING: &'static str = "Calculating The Most Frequent Times of Travel...";

    fn write_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The most common month is {}", self.month)?;
        writeln!(f, "The most common day is {}", self.weekday)?;
        writeln!(f, "The most common hour is {}", self.hour)
    }
}

impl ReportSection for StationStats {
    const HEADING: &'static str = "Calculating The Most Popular Stations and Trip...";

    fn write_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start_station {
            Some(s) => writeln!(f, "The most commonly used start station is {s}")?,
            None => not_available(f, "Start Station")?,
        }
        match &self.end_station {
            Some(s) => writeln!(f, "The most commonly used end station is {s}")?,
            None => not_available(f, "End Station")?,
        }
        match &self.trip {
            Some(t) => writeln!(
                f,
                "The most frequent combination of start station and end station trip is {t}"
            ),
            None => writeln!(f, "Trip stats cannot be calculated without both station columns"),
        }
    }
}

impl ReportSection for DurationStats {
    const HEADING: &'static str = "Calculating Trip Duration...";

    fn write_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total travel time: {}", self.total)?;
        match self.mean_seconds {
            Some(mean) => writeln!(f, "The average travel time: {mean:.1}."),
            None => writeln!(f, "The average travel time: n/a."),
        }
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[(String, usize)]) -> fmt::Result {
    for (value, count) in counts {
        writeln!(f, "{value}  :  {count}")?;
    }
    Ok(())
}

impl ReportSection for UserStats {
    const HEADING: &'static str = "Calculating User Stats...";

    fn write_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user_types {
            Some(counts) => {
                writeln!(f, "Counts of user types:")?;
                write_counts(f, counts)?;
            }
            None => not_available(f, "User Type")?,
        }
        match &self.genders {
            Some(counts) => {
                writeln!(f, "Counts of gender:")?;
                write_counts(f, counts)?;
            }
            None => not_available(f, "Gender")?,
        }
        match &self.birth_years {
            Some(years) => {
                writeln!(f, "The earliest year of birth is {}", years.earliest)?;
                writeln!(f, "The most recent year of birth is {}", years.most_recent)?;
                writeln!(f, "The most common year of birth is {}", years.most_common)
            }
            None => not_available(f, "Birth Year"),
        }
    }
}

impl<T: ReportSection> fmt::Display for Timed<Outcome<T>> {
    /// Heading, body, elapsed time and closing rule of one section.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n{}\n", T::HEADING)?;
        match &self.result {
            Outcome::Computed(stats) => stats.write_lines(f)?,
            Outcome::NoRecords => writeln!(f, "{NO_RECORDS}")?,
            Outcome::Unavailable { column } => not_available(f, column)?,
        }
        writeln!(f, "\nThis took {} seconds.", self.elapsed.as_secs_f64())?;
        writeln!(f, "{RULE}")
    }
}

impl fmt::Display for Reports {
    /// All four sections in their fixed order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.temporal)?;
        write!(f, "{}", self.stations)?;
        write!(f, "{}", self.duration)?;
        write!(f, "{}", self.users)
    }
}

/// Renders all four reports in their fixed order as plain text.
pub fn render_text(reports: &Reports) -> String {
    reports.to_string()
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    month: MonthSelector,
    day: DaySelector,
    rows: usize,
    capabilities: Capabilities,
    reports: &'a Reports,
}

/// Serializes the selection, row count and reports as pretty-printed JSON.
pub fn render_json(output: &PipelineOutput) -> Result<String> {
    let summary = JsonSummary {
        month: output.month,
        day: output.day,
        rows: output.dataset.len(),
        capabilities: output.dataset.capabilities,
        reports: &output.reports,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

/// Pages of raw rows in dataset order, [`RAW_PAGE_SIZE`] at a time.
pub fn raw_pages(dataset: &Dataset) -> std::slice::Chunks<'_, Trip> {
    dataset.trips.chunks(RAW_PAGE_SIZE)
}

/// Renders rows as one JSON object per line.
pub fn render_rows(rows: &[Trip]) -> Result<String> {
    debug!(rows = rows.len(), "Rendering raw rows");
    let mut out = String::new();
    for row in rows {
        out.push_str(&serde_json::to_string(row)?);
        out.push('\n');
    }
    Ok(out)
}
