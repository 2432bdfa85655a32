//! Names, bodies, messages and timestamps for generated commits.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::random::RandomSource;

pub const COMMIT_MESSAGES: [&str; 8] = [
    "Update documentation",
    "Fix minor bug",
    "Refactor code",
    "Add new feature",
    "Improve performance",
    "Update dependencies",
    "Clean up code",
    "Add tests",
];

const WORKDAY_START_SECS: u32 = 9 * 3600;
const WORKDAY_END_SECS: u32 = 19 * 3600 - 1;

/// One file and the commit that records it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSpec {
    pub file_name: String,
    pub contents: String,
    pub message: String,
    pub when: NaiveDateTime,
}

#[must_use]
pub fn marker_file_name(date: NaiveDate, slot: u32) -> String {
    format!("contribution_{}_{slot}.txt", date.format("%Y%m%d"))
}

#[must_use]
pub fn marker_contents(date: NaiveDate, slot: u32, generated_at: DateTime<Local>) -> String {
    format!(
        "Contribution on {date} - Commit {}\nTimestamp: {}\n",
        slot + 1,
        generated_at.format("%Y-%m-%d %H:%M:%S%.6f")
    )
}

#[must_use]
pub fn daily_message(date: NaiveDate) -> String {
    format!("Daily contribution - {date}")
}

#[must_use]
pub fn filler_file_name(date: NaiveDate, slot: u32) -> String {
    format!("contribution_{}_{slot}.rs", date.format("%Y%m%d"))
}

/// A compilable placeholder module naming its day and slot.
///
/// `token` varies the body so rewriting an existing file always leaves something to commit.
#[must_use]
pub fn filler_contents(date: NaiveDate, slot: u32, token: u32) -> String {
    let stamp = date.format("%Y%m%d");
    format!(
        "//! Contribution for {date}, slot {slot}.\n\
         \n\
         pub const DATE: &str = \"{date}\";\n\
         pub const SLOT: u32 = {slot};\n\
         pub const TOKEN: u32 = {token:#010x};\n\
         \n\
         pub fn contribution_{stamp}_{slot}() -> (&'static str, u32) {{\n    \
         (DATE, SLOT)\n\
         }}\n"
    )
}

pub fn pick_message(rng: &mut dyn RandomSource) -> &'static str {
    let last = u32::try_from(COMMIT_MESSAGES.len() - 1).unwrap_or_default();
    let index = usize::try_from(rng.uniform(0, last)).unwrap_or_default();
    COMMIT_MESSAGES.get(index).copied().unwrap_or(COMMIT_MESSAGES[0])
}

/// Uniform time of day in 09:00:00..=18:59:59.
pub fn working_hours_time(rng: &mut dyn RandomSource) -> NaiveTime {
    let secs = rng.uniform(WORKDAY_START_SECS, WORKDAY_END_SECS);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default()
}

#[must_use]
pub fn noon(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default())
}
