//! Typed errors for caller input.
//!
//! Load and I/O failures go through `anyhow` with context instead.

use thiserror::Error;

use crate::config::{DAY_OPTIONS, MONTH_OPTIONS};

/// A selector value outside its closed set. The pipeline does not run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("invalid city '{0}', expected one of: chicago, new york city, washington")]
    InvalidCity(String),
    #[error("invalid month '{0}', expected one of: {months}", months = MONTH_OPTIONS.join(", "))]
    InvalidMonth(String),
    #[error("invalid day '{0}', expected one of: {days}", days = DAY_OPTIONS.join(", "))]
    InvalidDay(String),
}
