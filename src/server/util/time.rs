//! Clock helpers for timestamp bookkeeping.
//!
//! All stored timestamps are naive UTC, matching the `timestamp` columns created by the
//! migrations.

use chrono::{NaiveDate, NaiveDateTime, Utc};

/// Current UTC time, used for `created_at` and `updated_at`.
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Current UTC date, the default `start_date` of a new playthrough.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
