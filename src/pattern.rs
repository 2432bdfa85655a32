use chrono::{Datelike, NaiveDate, Weekday};

use crate::random::RandomSource;

/// Relative weights for 0 through 5 commits under [`Pattern::Random`].
pub const RANDOM_WEIGHTS: [u32; 6] = [30, 25, 20, 15, 7, 3];

const WEEKEND_ACTIVE_PROBABILITY: f64 = 0.3;
const STREAK_ACTIVE_PROBABILITY: f64 = 0.7;

/// Named rule producing a per-day commit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Every weekday, occasionally on weekends.
    Consistent,
    /// Skewed towards quiet days.
    Random,
    /// Busy most days, idle the rest.
    Streaks,
    /// Anything else. Never produces commits.
    Unrecognized(String),
}

impl Pattern {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "consistent" => Self::Consistent,
            "random" => Self::Random,
            "streaks" => Self::Streaks,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Consistent => "consistent",
            Self::Random => "random",
            Self::Streaks => "streaks",
            Self::Unrecognized(name) => name,
        }
    }

    pub fn commits_for(&self, date: NaiveDate, rng: &mut dyn RandomSource) -> u32 {
        match self {
            Self::Consistent => {
                if is_weekend(date) {
                    if rng.chance(WEEKEND_ACTIVE_PROBABILITY) {
                        rng.uniform(1, 2)
                    } else {
                        0
                    }
                } else {
                    rng.uniform(1, 3)
                }
            }
            Self::Random => u32::try_from(rng.weighted(&RANDOM_WEIGHTS)).unwrap_or_default(),
            Self::Streaks => {
                if rng.chance(STREAK_ACTIVE_PROBABILITY) {
                    rng.uniform(1, 4)
                } else {
                    0
                }
            }
            Self::Unrecognized(_) => 0,
        }
    }
}

impl From<&str> for Pattern {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::schedule::days_inclusive;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    // 2024-01-06 is a Saturday, 2024-01-08 a Monday.
    const SATURDAY: (i32, u32, u32) = (2024, 1, 6);
    const MONDAY: (i32, u32, u32) = (2024, 1, 8);

    #[cfg(unix)]
    #[test]
    fn consistent_weekday_uses_scripted_draw() {
        let mut rng = crate::testing::Scripted::new(&[3], &[]);
        let (y, m, d) = MONDAY;
        assert_eq!(Pattern::Consistent.commits_for(date(y, m, d), &mut rng), 3);
    }

    #[cfg(unix)]
    #[test]
    fn consistent_weekend_idles_on_losing_coin() {
        let mut rng = crate::testing::Scripted::new(&[2], &[false]);
        let (y, m, d) = SATURDAY;
        assert_eq!(Pattern::Consistent.commits_for(date(y, m, d), &mut rng), 0);

        let mut rng = crate::testing::Scripted::new(&[2], &[true]);
        assert_eq!(Pattern::Consistent.commits_for(date(y, m, d), &mut rng), 2);
    }

    #[cfg(unix)]
    #[test]
    fn random_maps_weight_index_to_count() {
        let mut rng = crate::testing::Scripted::new(&[4], &[]);
        assert_eq!(Pattern::Random.commits_for(date(2024, 1, 1), &mut rng), 4);
    }

    #[cfg(unix)]
    #[test]
    fn streaks_idle_on_losing_coin() {
        let mut rng = crate::testing::Scripted::new(&[4], &[false, true]);
        let d = date(2024, 1, 1);
        assert_eq!(Pattern::Streaks.commits_for(d, &mut rng), 0);
        assert_eq!(Pattern::Streaks.commits_for(d, &mut rng), 4);
    }

    #[test]
    fn consistent_respects_weekday_and_weekend_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for day in days_inclusive(date(2024, 1, 1), date(2024, 12, 31)) {
            let n = Pattern::Consistent.commits_for(day, &mut rng);
            if is_weekend(day) {
                assert!(n <= 2, "{day}: {n}");
            } else {
                assert!((1..=3).contains(&n), "{day}: {n}");
            }
        }
    }

    #[test]
    fn streaks_stay_within_zero_to_four() {
        let mut rng = StdRng::seed_from_u64(5);
        for day in days_inclusive(date(2024, 1, 1), date(2024, 12, 31)) {
            assert!(Pattern::Streaks.commits_for(day, &mut rng) <= 4);
        }
    }

    #[test]
    fn random_distribution_tracks_weights() {
        let mut rng = StdRng::seed_from_u64(1234);
        let samples = 100_000u32;
        let mut counts = [0u32; 6];
        let day = date(2024, 1, 1);
        for _ in 0..samples {
            let n = Pattern::Random.commits_for(day, &mut rng);
            assert!(n <= 5);
            counts[n as usize] += 1;
        }
        let total: u32 = RANDOM_WEIGHTS.iter().sum();
        for (count, weight) in counts.iter().zip(RANDOM_WEIGHTS) {
            let observed = f64::from(*count) / f64::from(samples);
            let expected = f64::from(weight) / f64::from(total);
            assert!(
                (observed - expected).abs() < 0.01,
                "observed {observed:.4} expected {expected:.4}"
            );
        }
    }

    #[test]
    fn unknown_pattern_never_commits() {
        let mut rng = StdRng::seed_from_u64(9);
        let pattern = Pattern::from_name("bursty");
        assert_eq!(pattern, Pattern::Unrecognized("bursty".to_string()));
        for day in days_inclusive(date(2024, 1, 1), date(2024, 3, 1)) {
            assert_eq!(pattern.commits_for(day, &mut rng), 0);
        }
    }

    #[test]
    fn names_round_trip() {
        for name in ["consistent", "random", "streaks"] {
            assert_eq!(Pattern::from_name(name).name(), name);
        }
        assert_eq!(Pattern::from("Consistent").to_string(), "Consistent");
    }
}
