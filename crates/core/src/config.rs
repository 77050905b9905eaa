//! Engine configuration
//!
//! Defaults come from the constants in the types crate. Hosts can override the
//! tuning knobs through environment variables:
//!
//! - `MATCHQUBE_SEED`: RNG seed (default: 1)
//! - `MATCHQUBE_SPAWN_RATE_MS`: spawn delay at game start (default: 1000)
//! - `MATCHQUBE_SPAWN_FLOOR_MS`: fastest spawn delay (default: 350)
//! - `MATCHQUBE_SPAWN_STEP_MS`: spawn delay reduction per spawn (default: 10)
//! - `MATCHQUBE_HEURISTIC_PERCENT`: chance a spawn tries to complete a line (default: 50)
//!
//! Unparsable values fall back to the default.

use std::env;

use serde::{Deserialize, Serialize};

use crate::types::{
    BOOSTER_COOLDOWN_MS, BOOSTER_SETTLE_MS, HEURISTIC_PERCENT, INITIAL_COLOR_COUNT,
    INITIAL_SPAWN_RATE_MS, MAX_COLOR_COUNT, SPAWN_RATE_FLOOR_MS, SPAWN_RATE_STEP_MS,
};

/// Tuning for one [`Session`](crate::session::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub seed: u32,
    pub initial_spawn_rate_ms: u32,
    pub spawn_rate_floor_ms: u32,
    pub spawn_rate_step_ms: u32,
    /// 0..=100
    pub heuristic_percent: u32,
    pub initial_color_count: u8,
    pub booster_settle_ms: u64,
    pub booster_cooldown_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            initial_spawn_rate_ms: INITIAL_SPAWN_RATE_MS,
            spawn_rate_floor_ms: SPAWN_RATE_FLOOR_MS,
            spawn_rate_step_ms: SPAWN_RATE_STEP_MS,
            heuristic_percent: HEURISTIC_PERCENT,
            initial_color_count: INITIAL_COLOR_COUNT,
            booster_settle_ms: BOOSTER_SETTLE_MS,
            booster_cooldown_ms: BOOSTER_COOLDOWN_MS,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `MATCHQUBE_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: env_or("MATCHQUBE_SEED", defaults.seed),
            initial_spawn_rate_ms: env_or("MATCHQUBE_SPAWN_RATE_MS", defaults.initial_spawn_rate_ms),
            spawn_rate_floor_ms: env_or("MATCHQUBE_SPAWN_FLOOR_MS", defaults.spawn_rate_floor_ms),
            spawn_rate_step_ms: env_or("MATCHQUBE_SPAWN_STEP_MS", defaults.spawn_rate_step_ms),
            heuristic_percent: env_or("MATCHQUBE_HEURISTIC_PERCENT", defaults.heuristic_percent),
            ..defaults
        }
        .sanitized()
    }

    /// Clamp values into their meaningful ranges
    pub fn sanitized(mut self) -> Self {
        self.heuristic_percent = self.heuristic_percent.min(100);
        self.initial_spawn_rate_ms = self.initial_spawn_rate_ms.max(1);
        self.spawn_rate_floor_ms = self.spawn_rate_floor_ms.clamp(1, self.initial_spawn_rate_ms);
        self.initial_color_count = self.initial_color_count.clamp(1, MAX_COLOR_COUNT);
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_heuristic_percent(mut self, percent: u32) -> Self {
        self.heuristic_percent = percent.min(100);
        self
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let c = EngineConfig::default();
        assert_eq!(c.initial_spawn_rate_ms, 1000);
        assert_eq!(c.spawn_rate_floor_ms, 350);
        assert_eq!(c.heuristic_percent, 50);
        assert_eq!(c.initial_color_count, 2);
    }

    #[test]
    fn sanitized_clamps() {
        let c = EngineConfig {
            heuristic_percent: 250,
            spawn_rate_floor_ms: 5_000,
            initial_color_count: 40,
            ..EngineConfig::default()
        }
        .sanitized();
        assert_eq!(c.heuristic_percent, 100);
        assert_eq!(c.spawn_rate_floor_ms, c.initial_spawn_rate_ms);
        assert_eq!(c.initial_color_count, MAX_COLOR_COUNT);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let c: EngineConfig = serde_json::from_str(r#"{"seed": 9}"#).unwrap();
        assert_eq!(c.seed, 9);
        assert_eq!(c.initial_spawn_rate_ms, INITIAL_SPAWN_RATE_MS);
    }
}
