//! Vendor date conventions.
//!
//! Facets stores eligibility ranges as `DATETIME` pairs and marks an
//! open-ended termination with a `9999-12-31` sentinel rather than NULL.

use chrono::{NaiveDate, NaiveDateTime};

/// The vendor sentinel used for an open-ended termination date.
#[must_use]
pub fn open_ended_term() -> NaiveDateTime {
    // Static literal, cannot fail.
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MAX)
}

/// Returns true if a termination date is the open-ended sentinel.
#[must_use]
pub fn is_open_ended(term: NaiveDateTime) -> bool {
    term >= open_ended_term()
}

/// Returns true if an effective/termination pair covers the given date.
///
/// Both bounds are inclusive, matching how the vendor queries compare
/// `MEPE_EFF_DT` and `MEPE_TERM_DT`.
#[must_use]
pub fn covers(eff: NaiveDateTime, term: NaiveDateTime, as_of: NaiveDate) -> bool {
    let as_of = match as_of.and_hms_opt(0, 0, 0) {
        Some(dt) => dt,
        None => return false,
    };
    eff <= as_of && term >= as_of
}
