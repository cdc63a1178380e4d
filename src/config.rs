//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::SETTLE_DELAY_MS;

pub const DEFAULT_HIGHSCORE_PATH: &str = ".tui-blocks-highscore.json";

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub settle_ms: u32,
    pub highscore_path: PathBuf,
    /// Built-in theme name (`neon` or `simple`).
    pub theme: String,
    /// Optional JSON theme file; replaces the built-in when it loads.
    pub theme_path: Option<PathBuf>,
    /// Optional JSONL gameplay event log.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            settle_ms: SETTLE_DELAY_MS,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            theme: "neon".to_string(),
            theme_path: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables. Unparseable values fall back to
    /// defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let seed = non_empty("BLOCKS_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let settle_ms = non_empty("BLOCKS_SETTLE_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.settle_ms);

        let highscore_path = non_empty("BLOCKS_HIGHSCORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.highscore_path);

        let theme = non_empty("BLOCKS_THEME")
            .map(|s| s.to_lowercase())
            .unwrap_or(defaults.theme);

        Self {
            seed,
            settle_ms,
            highscore_path,
            theme,
            theme_path: non_empty("BLOCKS_THEME_PATH").map(PathBuf::from),
            log_path: non_empty("BLOCKS_LOG_PATH").map(PathBuf::from),
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
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
    fn test_defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(config.settle_ms, 400);
        assert_eq!(config.highscore_path, PathBuf::from(DEFAULT_HIGHSCORE_PATH));
        assert_eq!(config.theme, "neon");
        assert!(config.theme_path.is_none());
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_values_are_read() {
        let config = GameConfig::from_lookup(lookup(&[
            ("BLOCKS_SEED", "42"),
            ("BLOCKS_SETTLE_MS", "0"),
            ("BLOCKS_HIGHSCORE_PATH", "/tmp/hs.json"),
            ("BLOCKS_THEME", " Simple "),
            ("BLOCKS_LOG_PATH", "events.jsonl"),
        ]));
        assert_eq!(config.seed, 42);
        assert_eq!(config.settle_ms, 0);
        assert_eq!(config.highscore_path, PathBuf::from("/tmp/hs.json"));
        assert_eq!(config.theme, "simple");
        assert_eq!(config.log_path, Some(PathBuf::from("events.jsonl")));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = GameConfig::from_lookup(lookup(&[
            ("BLOCKS_SETTLE_MS", "soon"),
            ("BLOCKS_LOG_PATH", "   "),
        ]));
        assert_eq!(config.settle_ms, 400);
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_from_env_does_not_panic() {
        let _config = GameConfig::from_env();
    }
}
