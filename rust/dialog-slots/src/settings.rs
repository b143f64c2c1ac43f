//! Resolver settings and their environment overrides.
//!
//! | Variable                          | Setting                        | Default |
//! |-----------------------------------|--------------------------------|---------|
//! | `FUZZY_MATCH_THRESHOLD`           | `fuzzy.threshold`              | 0.6     |
//! | `FUZZY_MATCH_LOCATION`            | `fuzzy.location`               | 0       |
//! | `FUZZY_MATCH_DISTANCE`            | `fuzzy.distance`               | 100     |
//! | `FUZZY_MATCH_DISTANCE_FROM_BEST`  | `fuzzy.distance_from_best`     | 0.5     |
//! | `FUZZY_MATCH_MAX_ITEMS`           | `fuzzy.max_items`              | 10      |
//! | `ENTITY_PARSING_DISABLED`         | `parsing_disabled`             | false   |
//!
//! `ENTITY_PARSING_DISABLED` is on for `true`, `TRUE`, `YES`, `Y` or `y`.
//! Any other value leaves it off.

use std::str::FromStr;

use dialog_nlp::FuzzyOptions;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

pub const FUZZY_MATCH_THRESHOLD: &str = "FUZZY_MATCH_THRESHOLD";
pub const FUZZY_MATCH_LOCATION: &str = "FUZZY_MATCH_LOCATION";
pub const FUZZY_MATCH_DISTANCE: &str = "FUZZY_MATCH_DISTANCE";
pub const FUZZY_MATCH_DISTANCE_FROM_BEST: &str = "FUZZY_MATCH_DISTANCE_FROM_BEST";
pub const FUZZY_MATCH_MAX_ITEMS: &str = "FUZZY_MATCH_MAX_ITEMS";
pub const ENTITY_PARSING_DISABLED: &str = "ENTITY_PARSING_DISABLED";

const TRUTHY: [&str; 5] = ["true", "TRUE", "YES", "Y", "y"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    pub fuzzy: FuzzyOptions,
    /// Skip extraction and ask for every required slot directly.
    pub parsing_disabled: bool,
}

impl ResolverSettings {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let fuzzy = &mut settings.fuzzy;

        override_with(&lookup, FUZZY_MATCH_THRESHOLD, &mut fuzzy.threshold)?;
        override_with(&lookup, FUZZY_MATCH_LOCATION, &mut fuzzy.location)?;
        override_with(&lookup, FUZZY_MATCH_DISTANCE, &mut fuzzy.distance)?;
        override_with(&lookup, FUZZY_MATCH_DISTANCE_FROM_BEST, &mut fuzzy.distance_from_best)?;
        override_with(&lookup, FUZZY_MATCH_MAX_ITEMS, &mut fuzzy.max_items)?;

        if let Some(value) = lookup(ENTITY_PARSING_DISABLED) {
            settings.parsing_disabled = TRUTHY.contains(&value.trim());
        }

        Ok(settings)
    }
}

fn override_with<F, T>(lookup: &F, key: &str, slot: &mut T) -> Result<(), ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };

    *slot = raw
        .trim()
        .parse()
        .map_err(|_| ConfigurationError::InvalidSetting {
            key: key.to_string(),
            value: raw.clone(),
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use testresult::TestResult;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn it_defaults_without_overrides() -> TestResult {
        let settings = ResolverSettings::from_lookup(lookup(&[]))?;
        assert_eq!(settings, ResolverSettings::default());
        assert_eq!(settings.fuzzy.threshold, 0.6);
        assert_eq!(settings.fuzzy.max_items, 10);
        assert!(!settings.parsing_disabled);
        Ok(())
    }

    #[test]
    fn it_applies_overrides() -> TestResult {
        let settings = ResolverSettings::from_lookup(lookup(&[
            (FUZZY_MATCH_THRESHOLD, "0.3"),
            (FUZZY_MATCH_MAX_ITEMS, " 4 "),
            (ENTITY_PARSING_DISABLED, "Y"),
        ]))?;
        assert_eq!(settings.fuzzy.threshold, 0.3);
        assert_eq!(settings.fuzzy.max_items, 4);
        assert_eq!(settings.fuzzy.distance, 100);
        assert!(settings.parsing_disabled);
        Ok(())
    }

    #[test]
    fn it_only_accepts_listed_truthy_spellings() -> TestResult {
        for value in ["yes", "1", "on", "True"] {
            let settings = ResolverSettings::from_lookup(lookup(&[(ENTITY_PARSING_DISABLED, value)]))?;
            assert!(!settings.parsing_disabled, "{value}");
        }
        Ok(())
    }

    #[test]
    fn it_rejects_unparseable_numbers() {
        let error = ResolverSettings::from_lookup(lookup(&[(FUZZY_MATCH_DISTANCE, "far")])).unwrap_err();
        assert_eq!(
            error,
            ConfigurationError::InvalidSetting {
                key: FUZZY_MATCH_DISTANCE.to_string(),
                value: "far".to_string(),
            }
        );
    }

    #[test]
    fn it_deserializes_partial_settings() -> TestResult {
        let settings: ResolverSettings =
            serde_json::from_str(r#"{ "fuzzy": { "threshold": 0.4 } }"#)?;
        assert_eq!(settings.fuzzy.threshold, 0.4);
        assert_eq!(settings.fuzzy.distance_from_best, 0.5);
        Ok(())
    }
}
