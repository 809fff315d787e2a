//! Wall-clock helpers.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Return the current local wall-clock time.
///
/// Prayer times are civil times; the next-prayer countdown compares them
/// against the local clock, not UTC.
#[must_use]
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Return today's local calendar date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_agree_between_local_now_and_today() {
        assert_eq!(local_now().date(), today());
    }
}
