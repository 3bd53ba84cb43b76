use crate::stats::types::{Outcome, StationStats};
use crate::stats::utility::mode;
use crate::trip::Dataset;

/// Most used start station, end station and start/end combination.
///
/// Each field is computed on its own; the three need not describe the same trip.
pub fn station_stats(dataset: &Dataset) -> Outcome<StationStats> {
    if dataset.is_empty() {
        return Outcome::NoRecords;
    }

    let caps = dataset.capabilities;
    let start_station = caps
        .has_start_station
        .then(|| mode(dataset.iter().filter_map(|t| t.record.start_station.as_deref())))
        .flatten();
    let end_station = caps
        .has_end_station
        .then(|| mode(dataset.iter().filter_map(|t| t.record.end_station.as_deref())))
        .flatten();
    let trip = mode(dataset.iter().filter_map(|t| t.trip.as_deref()));

    Outcome::Computed(StationStats {
        start_station: start_station.map(str::to_string),
        end_station: end_station.map(str::to_string),
        trip: trip.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_trip;
    use crate::trip::{Capabilities, TripRecord};
    use chrono::NaiveDate;

    fn dataset(routes: &[(Option<&str>, Option<&str>)], caps: Capabilities) -> Dataset {
        let ts = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Dataset {
            capabilities: caps,
            trips: routes
                .iter()
                .map(|(start, end)| {
                    let mut rec = TripRecord::new(ts);
                    rec.start_station = start.map(str::to_string);
                    rec.end_station = end.map(str::to_string);
                    derive_trip(rec)
                })
                .collect(),
        }
    }

    #[test]
    fn test_station_stats_empty() {
        let data = dataset(&[], Capabilities::all());
        assert_eq!(station_stats(&data), Outcome::NoRecords);
    }

    #[test]
    fn test_station_stats_fields_are_independent() {
        let data = dataset(
            &[
                (Some("A"), Some("X")),
                (Some("A"), Some("Y")),
                (Some("B"), Some("Y")),
                (Some("B"), Some("Y")),
                (Some("A"), Some("Z")),
            ],
            Capabilities::all(),
        );

        let stats = station_stats(&data);
        assert_eq!(
            stats,
            Outcome::Computed(StationStats {
                start_station: Some("A".into()),
                end_station: Some("Y".into()),
                trip: Some("B to Y".into()),
            })
        );
    }

    #[test]
    fn test_station_stats_skips_missing_columns() {
        let caps = Capabilities {
            has_end_station: false,
            ..Capabilities::all()
        };
        let data = dataset(&[(Some("A"), None), (Some("B"), None)], caps);

        let stats = station_stats(&data);
        let stats = stats.computed().unwrap();

        assert_eq!(stats.start_station.as_deref(), Some("A"));
        assert_eq!(stats.end_station, None);
        assert_eq!(stats.trip, None);
    }
}
