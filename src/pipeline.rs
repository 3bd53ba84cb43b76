//! Load, derive, filter and summarize one city's trips.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};

use crate::config::Settings;
use crate::derive::derive_fields;
use crate::filter::{DaySelector, FilterSelection, MonthSelector, filter};
use crate::loader::load_city;
use crate::stats::{
    Reports, Timed, duration_stats, station_stats, temporal_stats, user_stats,
};
use crate::trip::{Dataset, RawDataset};

/// Filtered trips and the four reports computed over them.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub month: MonthSelector,
    pub day: DaySelector,
    pub dataset: Dataset,
    pub reports: Reports,
}

fn timed<T>(stat: &'static str, compute: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let result = compute();
    let elapsed = start.elapsed();
    debug!(stat, elapsed_secs = elapsed.as_secs_f64(), "Statistic computed");
    Timed { result, elapsed }
}

/// Computes all four reports over an already filtered dataset.
pub fn compute_reports(dataset: &Dataset) -> Reports {
    Reports {
        temporal: timed("temporal", || temporal_stats(dataset)),
        stations: timed("stations", || station_stats(dataset)),
        duration: timed("duration", || duration_stats(dataset)),
        users: timed("users", || user_stats(dataset)),
    }
}

/// Runs the pipeline over loaded rows. The source rows are not modified.
#[tracing::instrument(skip_all, fields(rows = raw.records.len(), month = %month, day = %day))]
pub fn run(raw: &RawDataset, month: MonthSelector, day: DaySelector) -> PipelineOutput {
    let derived = derive_fields(raw.clone());
    let dataset = filter(&derived, month, day);
    info!(matched = dataset.len(), "Filter applied");

    let reports = compute_reports(&dataset);

    PipelineOutput {
        month,
        day,
        dataset,
        reports,
    }
}

/// Validates the selectors, loads the city's file and runs the pipeline.
///
/// # Errors
///
/// Returns a [`crate::error::SelectorError`] if any selector is outside its
/// allowed set, before anything is loaded, or a load error if the city file
/// cannot be read.
pub fn run_city(settings: &Settings, city: &str, month: &str, day: &str) -> Result<PipelineOutput> {
    let selection = FilterSelection::parse(city, month, day)?;
    run_selection(settings, &selection)
}

/// Loads and runs for a selection that is already validated.
pub fn run_selection(settings: &Settings, selection: &FilterSelection) -> Result<PipelineOutput> {
    let raw = load_city(settings, selection.city)?;
    Ok(run(&raw, selection.month, selection.day))
}
