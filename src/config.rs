//! Runtime configuration
//!
//! Read from `FOOD_DIARY_*` environment variables.

use chrono::{FixedOffset, Offset, Utc};
use thiserror::Error;

pub const DEFAULT_OFFSET_VAR: &str = "FOOD_DIARY_DEFAULT_OFFSET";
pub const ERROR_PREVIEW_VAR: &str = "FOOD_DIARY_ERROR_PREVIEW";

const DEFAULT_ERROR_PREVIEW: usize = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be an offset like +00:00, -05:00 or Z, got '{value}'")]
    InvalidOffset { var: &'static str, value: String },

    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidLimit { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiaryConfig {
    /// Offset applied to timestamps that carry none
    pub default_offset: FixedOffset,
    /// How many row errors the import tool reports back
    pub error_preview_limit: usize,
}

impl Default for DiaryConfig {
    fn default() -> Self {
        Self {
            default_offset: utc(),
            error_preview_limit: DEFAULT_ERROR_PREVIEW,
        }
    }
}

impl DiaryConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(DEFAULT_OFFSET_VAR) {
            config.default_offset =
                parse_offset(&value).ok_or_else(|| ConfigError::InvalidOffset {
                    var: DEFAULT_OFFSET_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(ERROR_PREVIEW_VAR) {
            config.error_preview_limit =
                value.trim().parse().map_err(|_| ConfigError::InvalidLimit {
                    var: ERROR_PREVIEW_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Parse "Z", "+05:30", "-0800" or "+02" into a fixed offset
pub fn parse_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return Some(utc());
    }

    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().ok()?, 0),
        4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
        _ => return None,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("Z"), FixedOffset::east_opt(0));
        assert_eq!(parse_offset("+05:30"), FixedOffset::east_opt(5 * 3600 + 1800));
        assert_eq!(parse_offset("-0800"), FixedOffset::west_opt(8 * 3600));
        assert_eq!(parse_offset("+02"), FixedOffset::east_opt(7200));
        assert_eq!(parse_offset("05:00"), None);
        assert_eq!(parse_offset("+25:00"), None);
        assert_eq!(parse_offset("+5:00"), None);
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = DiaryConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, DiaryConfig::default());
        assert_eq!(config.error_preview_limit, 10);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let vars: HashMap<&str, &str> =
            [(DEFAULT_OFFSET_VAR, "-05:00"), (ERROR_PREVIEW_VAR, "3")].into();
        let config = DiaryConfig::from_lookup(|v| vars.get(v).map(|s| s.to_string())).unwrap();
        assert_eq!(config.default_offset, FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(config.error_preview_limit, 3);
    }

    #[test]
    fn test_from_lookup_rejects_bad_values() {
        let err = DiaryConfig::from_lookup(|v| {
            (v == DEFAULT_OFFSET_VAR).then(|| "eastern".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOffset { .. }));

        let err = DiaryConfig::from_lookup(|v| (v == ERROR_PREVIEW_VAR).then(|| "-1".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimit { .. }));
    }
}
