//! Shared configuration types for CLI commands

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// Environment variable naming the score file
pub const SCORES_ENV: &str = "TTT_SCORES";

/// Score file used when neither a flag nor the environment names one
pub const DEFAULT_SCORES_FILE: &str = "ttt-scores.json";

/// Resolve the score file: explicit flag, then `$TTT_SCORES`, then the
/// default in the working directory.
pub fn resolve_scores_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(SCORES_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCORES_FILE))
}

/// Settings for an interactive game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Where the score record is kept
    pub scores_path: PathBuf,

    /// Pause before the computer answers, in milliseconds
    pub think_ms: u64,

    /// Number cells 1-9 instead of 0-8
    pub one_based: bool,

    /// Write the score record after every game
    pub persist: bool,
}

impl PlayConfig {
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_ms)
    }

    /// Label shown for cell `index`
    pub fn cell_label(&self, index: usize) -> usize {
        if self.one_based { index + 1 } else { index }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            scores_path: PathBuf::from(DEFAULT_SCORES_FILE),
            think_ms: 250,
            one_based: false,
            persist: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins() {
        let path = resolve_scores_path(Some(PathBuf::from("/tmp/explicit.json")));
        assert_eq!(path, PathBuf::from("/tmp/explicit.json"));
    }

    #[test]
    fn one_based_labels() {
        let config = PlayConfig {
            one_based: true,
            ..PlayConfig::default()
        };
        assert_eq!(config.cell_label(0), 1);
        assert_eq!(PlayConfig::default().cell_label(0), 0);
        assert_eq!(PlayConfig::default().think_delay(), Duration::from_millis(250));
    }
}
