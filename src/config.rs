use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::generate::{BackdatedRequest, PatternRequest};
use crate::pattern::Pattern;

pub const DEFAULT_REPO: &str = "./github-bot";
pub const DEFAULT_COMMITS_PER_DAY: u32 = 2;
pub const DEFAULT_PATTERN: &str = "consistent";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub repo: Option<PathBuf>,
    #[serde(default)]
    pub backdated: BackdatedSection,
    #[serde(default)]
    pub pattern: PatternSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct BackdatedSection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub commits_per_day: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSection {
    #[serde(default, deserialize_with = "pattern_from_name")]
    pub name: Option<Pattern>,
    pub seed: Option<u64>,
}

/// Command-line values for the backdated generator; `None` falls back to the config.
#[derive(Debug, Default, Clone)]
pub struct BackdatedOverrides {
    pub repo: Option<PathBuf>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub commits_per_day: Option<u32>,
}

#[derive(Debug, Default, Clone)]
pub struct PatternOverrides {
    pub repo: Option<PathBuf>,
    pub pattern: Option<String>,
    pub seed: Option<u64>,
}

/// Read and parse a TOML config file.
///
/// # Errors
/// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config_text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&config_text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Merge `overrides` over this config and the built-in defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] when the commit count per day is zero.
    pub fn backdated_request(
        &self,
        overrides: &BackdatedOverrides,
    ) -> Result<BackdatedRequest, ConfigError> {
        let commits_per_day = overrides
            .commits_per_day
            .or(self.backdated.commits_per_day)
            .unwrap_or(DEFAULT_COMMITS_PER_DAY);
        if commits_per_day == 0 {
            return Err(ConfigError::Invalid {
                message: "commits-per-day must be at least 1".to_string(),
            });
        }
        let start = overrides
            .start
            .or(self.backdated.start)
            .or_else(|| NaiveDate::from_ymd_opt(2024, 1, 1));
        let end = overrides
            .end
            .or(self.backdated.end)
            .or_else(|| NaiveDate::from_ymd_opt(2024, 1, 7));
        let (Some(start), Some(end)) = (start, end) else {
            return Err(ConfigError::Invalid {
                message: "backdated range needs both a start and an end date".to_string(),
            });
        };
        Ok(BackdatedRequest {
            repo: self.repo_or_default(overrides.repo.as_ref()),
            start,
            end,
            commits_per_day,
        })
    }

    /// Merge `overrides` over this config; returns the request and the optional RNG seed.
    #[must_use]
    pub fn pattern_request(&self, overrides: &PatternOverrides) -> (PatternRequest, Option<u64>) {
        let pattern = overrides
            .pattern
            .as_deref()
            .map(Pattern::from_name)
            .or_else(|| self.pattern.name.clone())
            .unwrap_or_else(|| Pattern::from_name(DEFAULT_PATTERN));
        let request = PatternRequest {
            repo: self.repo_or_default(overrides.repo.as_ref()),
            pattern,
        };
        (request, overrides.seed.or(self.pattern.seed))
    }

    fn repo_or_default(&self, repo: Option<&PathBuf>) -> PathBuf {
        repo.or(self.repo.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPO))
    }
}

fn pattern_from_name<'de, D>(deserializer: D) -> Result<Option<Pattern>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<toml::Value>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(toml::Value::String(name)) => Ok(Some(Pattern::from_name(&name))),
        Some(other) => Err(serde::de::Error::custom(format!(
            "pattern name must be a string, found {other}"
        ))),
    }
}
