//! Board configuration.
//!
//! Hosts describe the board once, at construction:
//! - `rows` x `columns` cards (even, at least 4)
//! - `time_limit` in whole seconds
//! - `anchor`: an opaque render target identifier, passed through untouched
//! - `timing`: tick period and flip-resolution delays
//!
//! The engine validates the config before building a session and never
//! mutates it afterwards.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Timer periods and flip-resolution delays, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Period of the countdown tick.
    pub tick_ms: u64,

    /// Delay between matching the last pair and declaring the win.
    pub match_delay_ms: u64,

    /// Delay before a mismatched pair flips back.
    pub mismatch_delay_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
        }
    }
}

/// Complete board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of rows (at least 2).
    pub rows: u32,

    /// Number of columns (at least 2).
    pub columns: u32,

    /// Countdown length in seconds (at least 1).
    pub time_limit: u32,

    /// Render target identifier. Opaque to the engine.
    #[serde(default)]
    pub anchor: String,

    /// Timer periods and delays.
    #[serde(default)]
    pub timing: Timing,
}

impl GridConfig {
    /// Create a configuration with default timing and no anchor.
    ///
    /// Not validated until `validate()` (or engine construction).
    pub fn new(rows: u32, columns: u32, time_limit: u32) -> Self {
        Self {
            rows,
            columns,
            time_limit,
            anchor: String::new(),
            timing: Timing::default(),
        }
    }

    /// Parse a JSON config object.
    ///
    /// Presentation keys the engine does not model (`theme`, `width`,
    /// `height`) are accepted and ignored.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the render target identifier.
    #[must_use]
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Override timer periods and delays.
    #[must_use]
    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Number of distinct pair-values.
    #[must_use]
    pub fn pair_count(&self) -> u16 {
        (self.card_count() / 2) as u16
    }

    /// Check dimensions, time limit and timing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 {
            return Err(ConfigError::TooFewRows(self.rows));
        }
        if self.columns < 2 {
            return Err(ConfigError::TooFewColumns(self.columns));
        }

        let cards = u64::from(self.rows) * u64::from(self.columns);
        if cards % 2 != 0 {
            return Err(ConfigError::OddCardCount {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if cards / 2 > u64::from(u16::MAX) {
            return Err(ConfigError::TooManyPairs(cards / 2));
        }

        if self.time_limit == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.timing.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_config_builder() {
        let config = GridConfig::new(3, 4, 66)
            .with_anchor("board-wrapper")
            .with_timing(Timing {
                tick_ms: 10,
                ..Timing::default()
            });

        assert_eq!(config.anchor, "board-wrapper");
        assert_eq!(config.card_count(), 12);
        assert_eq!(config.pair_count(), 6);
        assert_eq!(config.timing.tick_ms, 10);
        assert_eq!(config.timing.match_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_timing() {
        let timing = Timing::default();
        assert_eq!(timing.tick_ms, 1000);
        assert_eq!(timing.match_delay_ms, 500);
        assert_eq!(timing.mismatch_delay_ms, 1000);
    }

    #[test]
    fn test_rejects_odd_board() {
        assert_eq!(
            GridConfig::new(3, 3, 60).validate(),
            Err(ConfigError::OddCardCount { rows: 3, columns: 3 })
        );
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(GridConfig::new(1, 4, 60).validate(), Err(ConfigError::TooFewRows(1)));
        assert_eq!(GridConfig::new(2, 0, 60).validate(), Err(ConfigError::TooFewColumns(0)));
        assert!(GridConfig::new(2, 2, 60).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_time() {
        assert_eq!(GridConfig::new(2, 2, 0).validate(), Err(ConfigError::ZeroTimeLimit));

        let config = GridConfig::new(2, 2, 5).with_timing(Timing {
            tick_ms: 0,
            ..Timing::default()
        });
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickPeriod));
    }

    #[test]
    fn test_rejects_too_many_pairs() {
        let config = GridConfig::new(1024, 1024, 60);
        assert_eq!(config.validate(), Err(ConfigError::TooManyPairs(524_288)));
    }

    #[test]
    fn test_from_json_ignores_presentation_keys() {
        let json = r#"{
            "anchor": "board-wrapper",
            "width": "400px",
            "height": "400px",
            "rows": 2,
            "columns": 4,
            "time_limit": 66,
            "theme": { "font": "Arial", "cardBGColor": "red" }
        }"#;

        let config = GridConfig::from_json(json).unwrap();
        assert_eq!(config.rows, 2);
        assert_eq!(config.columns, 4);
        assert_eq!(config.time_limit, 66);
        assert_eq!(config.anchor, "board-wrapper");
        assert_eq!(config.timing, Timing::default());
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"{ "rows": 3, "columns": 3, "time_limit": 66 }"#;
        assert_eq!(
            GridConfig::from_json(json),
            Err(ConfigError::OddCardCount { rows: 3, columns: 3 })
        );

        assert!(matches!(GridConfig::from_json("{"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = GridConfig::new(4, 4, 90).with_anchor("root");
        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
