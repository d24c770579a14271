use crate::resolver::DEFAULT_FAVORITE_YEARS;
use crate::{Error, Result};
use std::env;
use std::ops::RangeInclusive;

pub const DEFAULT_LOG_FILTER: &str = "moviegraph=debug";
pub const FAVORITE_YEARS_VAR: &str = "MOVIEGRAPH_FAVORITE_YEARS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_filter: String,
    pub favorite_years: RangeInclusive<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            favorite_years: DEFAULT_FAVORITE_YEARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("RUST_LOG").ok(),
            env::var(FAVORITE_YEARS_VAR).ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, favorite_years: Option<String>) -> Result<Self> {
        let mut config = Config::default();
        if let Some(filter) = log_filter.filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(years) = favorite_years {
            config.favorite_years = parse_years(&years)?;
        }
        Ok(config)
    }
}

/// Accepts `2000..=2015` or `2000-2015`.
pub fn parse_years(s: &str) -> Result<RangeInclusive<i32>> {
    let s = s.trim();
    let (start, end) = if let Some(idx) = s.find("..=") {
        (&s[..idx], &s[idx + 3..])
    } else if let Some((idx, _)) = s.char_indices().skip(1).find(|(_, c)| *c == '-') {
        (&s[..idx], &s[idx + 1..])
    } else {
        return Err(Error::InvalidArgument(format!("bad year range: {}", s)));
    };
    let parse = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|err| Error::InvalidArgument(format!("bad year {:?}: {}", part, err)))
    };
    let (start, end) = (parse(start)?, parse(end)?);
    if start > end {
        return Err(Error::InvalidArgument(format!(
            "empty year range: {}..={}",
            start, end
        )));
    }
    Ok(start..=end)
}
