//! Calendar and route fields derived from each raw trip.

use chrono::{Datelike, Timelike};

use crate::trip::{Dataset, RawDataset, Trip, TripRecord};

/// Derives month, weekday, hour and trip identity for one record.
pub fn derive_trip(record: TripRecord) -> Trip {
    let ts = record.start_time;
    let trip = match (&record.start_station, &record.end_station) {
        (Some(start), Some(end)) => Some(format!("{start} to {end}")),
        _ => None,
    };

    Trip {
        month: ts.month(),
        weekday: ts.weekday(),
        hour: ts.hour(),
        trip,
        record,
    }
}

/// Derives fields for every record, keeping order and count.
pub fn derive_fields(raw: RawDataset) -> Dataset {
    Dataset {
        capabilities: raw.capabilities,
        trips: raw.records.into_iter().map(derive_trip).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::Capabilities;
    use chrono::{NaiveDate, Weekday};

    fn record(day: u32, hour: u32) -> TripRecord {
        let ts = NaiveDate::from_ymd_opt(2017, 1, day)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap();
        TripRecord::new(ts)
    }

    #[test]
    fn test_derive_calendar_fields() {
        // 2017-01-02 was a Monday
        let trip = derive_trip(record(2, 8));

        assert_eq!(trip.month, 1);
        assert_eq!(trip.weekday, Weekday::Mon);
        assert_eq!(trip.hour, 8);
    }

    #[test]
    fn test_derive_trip_identity() {
        let mut rec = record(2, 8);
        rec.start_station = Some("Canal St".into());
        rec.end_station = Some("Clark St".into());

        let trip = derive_trip(rec);
        assert_eq!(trip.trip.as_deref(), Some("Canal St to Clark St"));
    }

    #[test]
    fn test_derive_trip_identity_needs_both_stations() {
        let mut rec = record(2, 8);
        rec.start_station = Some("Canal St".into());

        assert_eq!(derive_trip(rec).trip, None);
    }

    #[test]
    fn test_derive_fields_keeps_order() {
        let raw = RawDataset {
            capabilities: Capabilities::all(),
            records: vec![record(3, 23), record(1, 0), record(2, 12)],
        };

        let dataset = derive_fields(raw);
        let hours: Vec<u32> = dataset.iter().map(|t| t.hour).collect();

        assert_eq!(hours, vec![23, 0, 12]);
        assert_eq!(dataset.capabilities, Capabilities::all());
    }
}
