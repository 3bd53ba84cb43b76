use chrono::Month;

use crate::stats::types::{Outcome, TemporalStats};
use crate::stats::utility::mode;
use crate::trip::{Dataset, weekday_name};

/// Most common month, day of week and start hour across the dataset.
pub fn temporal_stats(dataset: &Dataset) -> Outcome<TemporalStats> {
    let (Some(month), Some(weekday), Some(hour)) = (
        mode(dataset.iter().map(|t| t.month)),
        mode(dataset.iter().map(|t| t.weekday)),
        mode(dataset.iter().map(|t| t.hour)),
    ) else {
        return Outcome::NoRecords;
    };

    let month_name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string());

    Outcome::Computed(TemporalStats {
        month: month_name,
        month_number: month,
        weekday: weekday_name(weekday).to_string(),
        hour,
    })
}
