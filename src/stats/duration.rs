use crate::stats::types::{DurationStats, Elapsed, Outcome};
use crate::stats::utility::{mean, round1};
use crate::trip::Dataset;

/// Total and mean trip duration in seconds.
///
/// Rows without a duration are skipped. Negative values are summed as-is.
pub fn duration_stats(dataset: &Dataset) -> Outcome<DurationStats> {
    if dataset.is_empty() {
        return Outcome::NoRecords;
    }
    if !dataset.capabilities.has_duration {
        return Outcome::Unavailable {
            column: "Trip Duration",
        };
    }

    let durations: Vec<f64> = dataset
        .iter()
        .filter_map(|t| t.record.trip_duration)
        .collect();
    let total_seconds: f64 = durations.iter().sum();

    Outcome::Computed(DurationStats {
        total_seconds,
        total: Elapsed::from_seconds(total_seconds.trunc() as i64),
        mean_seconds: mean(&durations).map(round1),
        trips_with_duration: durations.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_trip;
    use crate::trip::{Capabilities, TripRecord};
    use chrono::NaiveDate;

    fn dataset(durations: &[Option<f64>], caps: Capabilities) -> Dataset {
        let ts = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Dataset {
            capabilities: caps,
            trips: durations
                .iter()
                .map(|d| {
                    let mut rec = TripRecord::new(ts);
                    rec.trip_duration = *d;
                    derive_trip(rec)
                })
                .collect(),
        }
    }

    #[test]
    fn test_duration_stats_sum_and_mean() {
        let data = dataset(&[Some(600.0), Some(300.0)], Capabilities::all());
        let stats = duration_stats(&data);
        let stats = stats.computed().unwrap();

        assert_eq!(stats.total_seconds, 900.0);
        assert_eq!(stats.total, Elapsed::from_seconds(900));
        assert_eq!((stats.total.minutes, stats.total.seconds), (15, 0));
        assert_eq!(stats.mean_seconds, Some(450.0));
    }

    #[test]
    fn test_duration_stats_unavailable_without_column() {
        let caps = Capabilities {
            has_duration: false,
            ..Capabilities::all()
        };
        let data = dataset(&[None, None], caps);

        assert_eq!(
            duration_stats(&data),
            Outcome::Unavailable {
                column: "Trip Duration"
            }
        );
    }

    #[test]
    fn test_duration_stats_empty_beats_missing_column() {
        let caps = Capabilities {
            has_duration: false,
            ..Capabilities::all()
        };
        assert_eq!(duration_stats(&dataset(&[], caps)), Outcome::NoRecords);
    }

    #[test]
    fn test_duration_stats_truncates_total_and_rounds_mean() {
        let data = dataset(&[Some(100.7), Some(200.7), None], Capabilities::all());
        let stats = duration_stats(&data);
        let stats = stats.computed().unwrap();

        assert_eq!(stats.total.seconds, 1); // 301.4 -> 301 -> 5:01
        assert_eq!(stats.total.minutes, 5);
        assert_eq!(stats.mean_seconds, Some(150.7));
        assert_eq!(stats.trips_with_duration, 2);
    }

    #[test]
    fn test_duration_stats_mean_ties_round_to_even() {
        let data = dataset(
            &[Some(0.0), Some(0.0), Some(0.0), Some(1.0)],
            Capabilities::all(),
        );
        let stats = duration_stats(&data);

        assert_eq!(stats.computed().unwrap().mean_seconds, Some(0.2));
    }

    #[test]
    fn test_duration_stats_negative_values_are_summed() {
        let data = dataset(&[Some(600.0), Some(-700.0)], Capabilities::all());
        let stats = duration_stats(&data);
        let stats = stats.computed().unwrap();

        assert_eq!(stats.total_seconds, -100.0);
        assert!(stats.total.negative);
        assert_eq!((stats.total.minutes, stats.total.seconds), (1, 40));
        assert_eq!(stats.total.to_string(), "-0:01:40");
        assert_eq!(stats.mean_seconds, Some(-50.0));
    }

    #[test]
    fn test_duration_stats_column_present_but_blank() {
        let data = dataset(&[None], Capabilities::all());
        let stats = duration_stats(&data);
        let stats = stats.computed().unwrap();

        assert_eq!(stats.total_seconds, 0.0);
        assert_eq!(stats.mean_seconds, None);
    }
}
