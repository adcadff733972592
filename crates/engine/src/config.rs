//! Engine configuration from environment variables.
//!
//! - `MEMORY_PAIRS`: Number of pairs to deal (default: 8, clamped to 1..=32)
//! - `MEMORY_FLIP_DELAY_MS`: Auto-unflip delay in milliseconds (default: 2500)
//! - `MEMORY_SEED`: Seed for the first deal (default: random)
//!
//! Values that fail to parse fall back to the default.

use std::env;
use std::time::Duration;

use crate::core::{clamp_pair_count, Session};
use crate::types::{DEFAULT_FLIP_DELAY_MS, DEFAULT_PAIR_COUNT};

pub const ENV_PAIRS: &str = "MEMORY_PAIRS";
pub const ENV_FLIP_DELAY_MS: &str = "MEMORY_FLIP_DELAY_MS";
pub const ENV_SEED: &str = "MEMORY_SEED";

/// Settings for a new game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub pair_count: u16,
    pub flip_delay_ms: u32,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            flip_delay_ms: DEFAULT_FLIP_DELAY_MS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment-shaped).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let pair_count = lookup(ENV_PAIRS)
            .and_then(|s| s.trim().parse::<u16>().ok())
            .map(clamp_pair_count)
            .unwrap_or(defaults.pair_count);

        let flip_delay_ms = lookup(ENV_FLIP_DELAY_MS)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.flip_delay_ms);

        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());

        Self {
            pair_count,
            flip_delay_ms,
            seed,
        }
    }

    pub fn flip_delay(&self) -> Duration {
        Duration::from_millis(self.flip_delay_ms as u64)
    }

    /// Deal an idle session with these settings.
    pub fn new_session(&self) -> Session {
        let session = match self.seed {
            Some(seed) => Session::with_seed(self.pair_count, seed),
            None => Session::new(self.pair_count),
        };
        session.with_flip_delay(self.flip_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(EngineConfig::from_lookup(|_| None), EngineConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_PAIRS, "6"),
            (ENV_FLIP_DELAY_MS, " 1200 "),
            (ENV_SEED, "77"),
        ]));
        assert_eq!(
            config,
            EngineConfig {
                pair_count: 6,
                flip_delay_ms: 1200,
                seed: Some(77),
            }
        );
    }

    #[test]
    fn bad_values_fall_back() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            (ENV_PAIRS, "lots"),
            (ENV_FLIP_DELAY_MS, "-5"),
            (ENV_SEED, ""),
        ]));
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn pair_count_is_clamped() {
        let config = EngineConfig::from_lookup(lookup_from(&[(ENV_PAIRS, "0")]));
        assert_eq!(config.pair_count, 1);
        let config = EngineConfig::from_lookup(lookup_from(&[(ENV_PAIRS, "500")]));
        assert_eq!(config.pair_count, 32);
    }

    #[test]
    fn new_session_applies_settings() {
        let config = EngineConfig {
            pair_count: 4,
            flip_delay_ms: 900,
            seed: Some(3),
        };
        let a = config.new_session();
        let b = config.new_session();
        assert_eq!(a.pair_count(), 4);
        assert_eq!(a.flip_delay(), Duration::from_millis(900));
        assert_eq!(a.deck(), b.deck());
    }
}
