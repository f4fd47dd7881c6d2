//! Page configuration read from the environment, with defaults for every key.

use crate::error::CoreError;
use crate::models::DEFAULT_CHOICES;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TICK_MS: u64 = 1000;
pub const DEFAULT_EVENT_LOG: &str = "chipin-events.json";

#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// Options of the list-selection dropdown.
    pub choices: Vec<String>,
    /// Period of the elapsed timer's tick.
    pub tick_interval: Duration,
    /// Where the replay tool saves processed events.
    pub event_log_path: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            choices: DEFAULT_CHOICES.iter().map(|c| c.to_string()).collect(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            event_log_path: PathBuf::from(DEFAULT_EVENT_LOG),
        }
    }
}

impl PageConfig {
    /// `CHIPIN_CHOICES` (comma separated), `CHIPIN_TICK_MS`, `CHIPIN_EVENT_LOG`.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let choices = match lookup("CHIPIN_CHOICES") {
            Some(raw) => {
                let parsed: Vec<String> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect();
                if parsed.is_empty() {
                    return Err(CoreError::Config {
                        key: "CHIPIN_CHOICES",
                        value: raw,
                    });
                }
                parsed
            }
            None => defaults.choices,
        };

        let tick_interval = match lookup("CHIPIN_TICK_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(CoreError::Config {
                        key: "CHIPIN_TICK_MS",
                        value: raw,
                    })
                }
            },
            None => defaults.tick_interval,
        };

        let event_log_path = lookup("CHIPIN_EVENT_LOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.event_log_path);

        Ok(Self {
            choices,
            tick_interval,
            event_log_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = PageConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.choices, vec!["Audi", "Volkswagen", "Ford", "Skoda"]);
    }

    #[test]
    fn choices_are_trimmed_and_blank_entries_dropped() {
        let config = PageConfig::from_lookup(lookup(&[("CHIPIN_CHOICES", " Tea, ,Coffee ")])).unwrap();
        assert_eq!(config.choices, vec!["Tea", "Coffee"]);
    }

    #[test]
    fn malformed_values_are_reported_with_their_key() {
        let err = PageConfig::from_lookup(lookup(&[("CHIPIN_TICK_MS", "soon")])).unwrap_err();
        assert!(matches!(err, CoreError::Config { key: "CHIPIN_TICK_MS", .. }));

        let err = PageConfig::from_lookup(lookup(&[("CHIPIN_TICK_MS", "0")])).unwrap_err();
        assert!(matches!(err, CoreError::Config { key: "CHIPIN_TICK_MS", .. }));

        let err = PageConfig::from_lookup(lookup(&[("CHIPIN_CHOICES", " , ")])).unwrap_err();
        assert!(matches!(err, CoreError::Config { key: "CHIPIN_CHOICES", .. }));
    }
}
