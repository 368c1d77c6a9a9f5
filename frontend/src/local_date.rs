//! Bridges the browser clock into calendar dates.
//!
//! Date labels compare against local midnight, never UTC, so "today" must
//! come from the browser's local getters rather than an ISO timestamp.

use chrono::NaiveDate;

/// Current calendar date in the browser's local timezone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Today as the `YYYY-MM-DD` string used by date inputs.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}
