use chrono::{Days, NaiveDate};

/// Days before `today` covered by the patterned generator.
pub const TRAILING_DAYS: u64 = 365;

/// Every calendar day from `start` through `end`, both inclusive.
///
/// Yields nothing when `start > end`.
#[must_use]
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors((start <= end).then_some(start), move |day| {
        day.succ_opt().filter(|next| *next <= end)
    })
}

/// `today - 365` through `today`.
#[must_use]
pub fn trailing_year(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let start = today
        .checked_sub_days(Days::new(TRAILING_DAYS))
        .unwrap_or(NaiveDate::MIN);
    days_inclusive(start, today)
}
