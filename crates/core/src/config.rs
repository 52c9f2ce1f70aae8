//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read environment variables; the binaries
//! read them, parse them with the helpers below and hand the result to [`CoreConfig::new`].

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::constants::ANCHOR_MARGIN_DAYS;
use crate::{RecordError, RecordResult};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;

/// Date format accepted for `ABDM_ANCHOR_DATE`.
pub const ANCHOR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    anchor_date: Option<NaiveDate>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Arguments
    ///
    /// * `anchor_date` - When set, generated dates are computed relative to this date instead of
    ///   the local calendar date, making records fully reproducible across days.
    pub fn new(anchor_date: Option<NaiveDate>) -> Self {
        Self { anchor_date }
    }

    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor_date
    }

    /// Returns the clock generation should use.
    pub fn clock(&self) -> Arc<dyn Clock> {
        match self.anchor_date {
            Some(date) => Arc::new(FixedClock(date)),
            None => Arc::new(SystemClock),
        }
    }
}

/// Check that every date generated around `date` is representable.
///
/// # Errors
///
/// Returns [`RecordError::InvalidInput`] if `date` lies within [`ANCHOR_MARGIN_DAYS`] of either
/// end of the supported calendar.
pub fn validate_anchor_date(date: NaiveDate) -> RecordResult<NaiveDate> {
    let margin = Duration::days(ANCHOR_MARGIN_DAYS);
    let in_range = date.checked_sub_signed(margin).is_some()
        && date.checked_add_signed(margin).is_some();

    if in_range {
        Ok(date)
    } else {
        Err(RecordError::InvalidInput(format!(
            "anchor date {date} is too close to the edge of the supported calendar"
        )))
    }
}

/// Parse the anchor date from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `None` (use the system clock).
///
/// # Errors
///
/// Returns [`RecordError::InvalidInput`] if the value is not a `YYYY-MM-DD` date, or if it
/// fails [`validate_anchor_date`].
pub fn anchor_date_from_env_value(value: Option<String>) -> RecordResult<Option<NaiveDate>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    value
        .map(|v| {
            let date = NaiveDate::parse_from_str(&v, ANCHOR_DATE_FORMAT).map_err(|e| {
                RecordError::InvalidInput(format!(
                    "ABDM_ANCHOR_DATE must be YYYY-MM-DD, got '{v}': {e}"
                ))
            })?;
            validate_anchor_date(date)
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_date_unset_or_blank() {
        assert_eq!(anchor_date_from_env_value(None).unwrap(), None);
        assert_eq!(
            anchor_date_from_env_value(Some("   ".into())).unwrap(),
            None
        );
    }

    #[test]
    fn test_anchor_date_parses_and_pins_clock() {
        let date = anchor_date_from_env_value(Some(" 2025-01-31 ".into()))
            .unwrap()
            .expect("date should be set");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());

        let cfg = CoreConfig::new(Some(date));
        assert_eq!(cfg.anchor_date(), Some(date));
        assert_eq!(cfg.clock().today(), date);
    }

    #[test]
    fn test_anchor_date_rejects_garbage() {
        let err = anchor_date_from_env_value(Some("31/01/2025".into()))
            .expect_err("should reject non-ISO date");
        match err {
            RecordError::InvalidInput(msg) => assert!(msg.contains("31/01/2025")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_anchor_date_rejects_calendar_edges() {
        for date in [NaiveDate::MAX, NaiveDate::MIN] {
            match validate_anchor_date(date) {
                Err(RecordError::InvalidInput(msg)) => assert!(msg.contains("calendar")),
                other => panic!("expected InvalidInput for {date}, got {other:?}"),
            }
        }

        let edge = NaiveDate::MAX.format(ANCHOR_DATE_FORMAT).to_string();
        assert!(matches!(
            anchor_date_from_env_value(Some(edge)),
            Err(RecordError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_anchor_date_accepts_full_margin() {
        let margin = Duration::days(ANCHOR_MARGIN_DAYS);
        let latest = NaiveDate::MAX - margin;
        let earliest = NaiveDate::MIN + margin;

        assert_eq!(validate_anchor_date(latest).unwrap(), latest);
        assert_eq!(validate_anchor_date(earliest).unwrap(), earliest);
        assert!(validate_anchor_date(latest + Duration::days(1)).is_err());
        assert!(validate_anchor_date(earliest - Duration::days(1)).is_err());
    }
}
