//! Build mode selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable read when no other signal is configured.
pub const DEFAULT_MODE_VAR: &str = "NODE_ENV";

/// The two build contexts. Exactly one overlay is merged per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Production,
    Development,
}

impl Mode {
    /// Map a raw signal to a mode. Only the exact string `"development"`
    /// selects [`Mode::Development`]; everything else, including no signal,
    /// is production.
    ///
    /// # Example
    ///
    /// ```
    /// use pagekit_config::Mode;
    ///
    /// assert_eq!(Mode::from_signal(Some("development")), Mode::Development);
    /// assert_eq!(Mode::from_signal(Some("staging")), Mode::Production);
    /// assert_eq!(Mode::from_signal(None), Mode::Production);
    /// ```
    pub fn from_signal(signal: Option<&str>) -> Self {
        match signal {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    /// Read `var` now. The value is not cached between calls.
    pub fn from_env_var(var: &str) -> Self {
        let signal = std::env::var(var).ok();
        let mode = Self::from_signal(signal.as_deref());
        tracing::debug!(var, signal = ?signal, %mode, "selected build mode");
        mode
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    /// Strict parse for explicit overrides; unlike [`Mode::from_signal`],
    /// unknown names are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(Self::Production),
            "development" => Ok(Self::Development),
            other => Err(format!(
                "unknown mode '{other}' (expected 'production' or 'development')"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_signal_selects_development() {
        assert_eq!(Mode::from_signal(Some("development")), Mode::Development);
    }

    #[test]
    fn other_signals_select_production() {
        for signal in ["production", "test", "", "Development", " development"] {
            assert_eq!(Mode::from_signal(Some(signal)), Mode::Production, "{signal:?}");
        }
        assert_eq!(Mode::from_signal(None), Mode::Production);
    }

    #[test]
    fn unset_variable_is_production() {
        assert_eq!(
            Mode::from_env_var("PAGEKIT_TEST_MODE_VAR_THAT_IS_NEVER_SET"),
            Mode::Production
        );
    }

    #[test]
    fn parse_and_display_agree() {
        for mode in [Mode::Production, Mode::Development] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
        assert!("staging".parse::<Mode>().is_err());
    }
}
