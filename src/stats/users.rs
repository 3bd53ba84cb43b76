use crate::stats::types::{BirthYearStats, Outcome, UserStats};
use crate::stats::utility::{mode, value_counts};
use crate::trip::Dataset;

fn owned_counts(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    let years: Vec<i64> = dataset
        .iter()
        .filter_map(|t| t.record.birth_year)
        .map(|y| y.trunc() as i64)
        .collect();

    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common: mode(years.iter().copied())?,
    })
}

/// Counts per user type and gender, and birth year extremes.
///
/// Each breakdown is guarded by its own column; a missing one leaves the
/// others untouched.
pub fn user_stats(dataset: &Dataset) -> Outcome<UserStats> {
    if dataset.is_empty() {
        return Outcome::NoRecords;
    }

    let caps = dataset.capabilities;
    let user_types = caps.has_user_type.then(|| {
        owned_counts(value_counts(
            dataset.iter().filter_map(|t| t.record.user_type.as_deref()),
        ))
    });
    let genders = caps.has_gender.then(|| {
        owned_counts(value_counts(
            dataset.iter().filter_map(|t| t.record.gender.as_deref()),
        ))
    });
    let birth_years = caps
        .has_birth_year
        .then(|| birth_year_stats(dataset))
        .flatten();

    Outcome::Computed(UserStats {
        user_types,
        genders,
        birth_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive_trip;
    use crate::trip::{Capabilities, TripRecord};
    use chrono::NaiveDate;

    fn dataset(rows: &[(&str, Option<&str>, Option<f64>)], caps: Capabilities) -> Dataset {
        let ts = NaiveDate::from_ymd_opt(2017, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Dataset {
            capabilities: caps,
            trips: rows
                .iter()
                .map(|(user_type, gender, year)| {
                    let mut rec = TripRecord::new(ts);
                    rec.user_type = Some(user_type.to_string());
                    rec.gender = gender.map(str::to_string);
                    rec.birth_year = *year;
                    derive_trip(rec)
                })
                .collect(),
        }
    }

    fn sample_rows() -> Vec<(&'static str, Option<&'static str>, Option<f64>)> {
        vec![
            ("Subscriber", Some("Male"), Some(1985.0)),
            ("Customer", Some("Female"), Some(1992.0)),
            ("Subscriber", Some("Female"), Some(1992.0)),
            ("Subscriber", None, None),
            ("Customer", Some("Male"), Some(1961.0)),
            ("Subscriber", Some("Female"), Some(1999.0)),
        ]
    }

    #[test]
    fn test_user_stats_empty() {
        let data = dataset(&[], Capabilities::all());
        assert_eq!(user_stats(&data), Outcome::NoRecords);
    }

    #[test]
    fn test_user_stats_full() {
        let data = dataset(&sample_rows(), Capabilities::all());
        let stats = user_stats(&data);
        let stats = stats.computed().unwrap();

        assert_eq!(
            stats.user_types,
            Some(vec![("Subscriber".into(), 4), ("Customer".into(), 2)])
        );
        assert_eq!(
            stats.genders,
            Some(vec![("Female".into(), 3), ("Male".into(), 2)])
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1961,
                most_recent: 1999,
                most_common: 1992,
            })
        );
    }

    #[test]
    fn test_user_stats_missing_gender_leaves_others() {
        let full = dataset(&sample_rows(), Capabilities::all());
        let no_gender = dataset(
            &sample_rows(),
            Capabilities {
                has_gender: false,
                ..Capabilities::all()
            },
        );

        let full = user_stats(&full);
        let full = full.computed().unwrap();
        let partial = user_stats(&no_gender);
        let partial = partial.computed().unwrap();

        assert_eq!(partial.genders, None);
        assert_eq!(partial.user_types, full.user_types);
        assert_eq!(partial.birth_years, full.birth_years);
    }

    #[test]
    fn test_user_stats_no_demographic_columns() {
        let caps = Capabilities {
            has_gender: false,
            has_birth_year: false,
            ..Capabilities::all()
        };
        let data = dataset(&[("Subscriber", None, None)], caps);
        let stats = user_stats(&data);
        let stats = stats.computed().unwrap();

        assert_eq!(stats.user_types, Some(vec![("Subscriber".into(), 1)]));
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn test_birth_years_blank_in_every_row() {
        let data = dataset(&[("Customer", None, None)], Capabilities::all());
        let stats = user_stats(&data);

        assert_eq!(stats.computed().unwrap().birth_years, None);
    }
}
