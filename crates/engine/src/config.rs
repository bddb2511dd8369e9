//! Engine configuration, read from the environment.

use std::time::Duration;

use crate::types::{
    DEFAULT_HEIGHT, DEFAULT_RESTART_DELAY_MS, DEFAULT_TICK_MS, DEFAULT_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    /// Interval between gravity ticks
    pub tick_interval: Duration,
    /// Countdown between game over and the next game
    pub restart_delay: Duration,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            restart_delay: Duration::from_millis(DEFAULT_RESTART_DELAY_MS),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// - `TETRIS_WIDTH`, `TETRIS_HEIGHT`: field size in cells
    /// - `TETRIS_TICK_MS`: gravity interval
    /// - `TETRIS_RESTART_DELAY_MS`: game-over countdown
    /// - `TETRIS_SEED`: fixed RNG seed
    ///
    /// Missing or unparseable values fall back to the defaults. Field size is
    /// not validated here; `Engine::new` rejects fields below the minimum.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |key: &str| lookup(key).and_then(|s| s.trim().parse::<u64>().ok());
        let defaults = Self::default();

        Self {
            width: parse("TETRIS_WIDTH")
                .map(|v| v as usize)
                .unwrap_or(defaults.width),
            height: parse("TETRIS_HEIGHT")
                .map(|v| v as usize)
                .unwrap_or(defaults.height),
            tick_interval: parse("TETRIS_TICK_MS")
                .filter(|&ms| ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.tick_interval),
            restart_delay: parse("TETRIS_RESTART_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.restart_delay),
            seed: parse("TETRIS_SEED"),
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_restart_delay(mut self, restart_delay: Duration) -> Self {
        self.restart_delay = restart_delay;
        self
    }
}
