//! Descriptive statistics over a filtered trip dataset.
//!
//! Four independent reports: travel times, stations and routes, trip
//! durations, and rider demographics. Each returns [`types::Outcome::NoRecords`]
//! for an empty dataset and checks the dataset's capability flags before
//! touching an optional column.

pub mod duration;
pub mod stations;
pub mod temporal;
pub mod types;
pub mod users;
pub mod utility;

pub use duration::duration_stats;
pub use stations::station_stats;
pub use temporal::temporal_stats;
pub use types::{
    BirthYearStats, DurationStats, Elapsed, Outcome, Reports, StationStats, TemporalStats, Timed,
    UserStats,
};
pub use users::user_stats;
