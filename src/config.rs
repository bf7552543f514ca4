// Tuning constants for a round and the leaderboard endpoint.
// Both fall back to compiled-in defaults; a JSON override in local storage
// (`wj_config`) lets the numbers be tweaked without a rebuild.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use crate::storage;

pub const MAX_GRID_SIDE: u32 = 10;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub game_duration_secs: u32,
    pub rows: u32,
    pub cols: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub padding_x: f64,
    pub padding_y: f64,
    pub hole_radius: f64,
    pub jerry_radius: f64,
    /// Hit area relative to the drawn body; > 1 makes taps forgiving.
    pub hit_radius_multiplier: f64,
    pub initial_pop_interval_ms: f64,
    pub min_pop_interval_ms: f64,
    /// Multiplier applied to the pop interval after every pop.
    pub difficulty_increase_rate: f64,
    pub jerry_show_time_ms: f64,
    /// Seconds Jerry takes to rise fully out of the hole.
    pub pop_in_secs: f64,
    /// Animation progress below which Jerry cannot be hit yet.
    pub min_hittable_animation: f64,
    pub hit_effect_duration_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_duration_secs: 90,
            rows: 3,
            cols: 4,
            canvas_width: 800,
            canvas_height: 600,
            padding_x: 100.0,
            padding_y: 80.0,
            hole_radius: 50.0,
            jerry_radius: 35.0,
            hit_radius_multiplier: 1.8,
            initial_pop_interval_ms: 1200.0,
            min_pop_interval_ms: 400.0,
            difficulty_increase_rate: 0.98,
            jerry_show_time_ms: 800.0,
            pop_in_secs: 0.3,
            min_hittable_animation: 0.5,
            hit_effect_duration_ms: 500.0,
        }
    }
}

impl GameConfig {
    pub fn hit_radius(&self) -> f64 {
        self.jerry_radius * self.hit_radius_multiplier
    }

    pub fn hole_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.game_duration_secs == 0 {
            bail!("game_duration_secs must be at least 1");
        }
        if self.rows < 2 || self.cols < 2 {
            bail!("rows and cols must both be at least 2 (got {}x{})", self.rows, self.cols);
        }
        if self.rows > MAX_GRID_SIDE || self.cols > MAX_GRID_SIDE {
            bail!(
                "rows and cols must be at most {MAX_GRID_SIDE} (got {}x{})",
                self.rows,
                self.cols
            );
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            bail!("canvas size must be non-zero");
        }
        for (name, v) in [("padding_x", self.padding_x), ("padding_y", self.padding_y)] {
            if !(v.is_finite() && v >= 0.0) {
                bail!("{name} must be a non-negative number (got {v})");
            }
        }
        if 2.0 * self.padding_x >= self.canvas_width as f64
            || 2.0 * self.padding_y >= self.canvas_height as f64
        {
            bail!("padding leaves no room for holes");
        }
        for (name, v) in [
            ("hole_radius", self.hole_radius),
            ("jerry_radius", self.jerry_radius),
            ("hit_radius_multiplier", self.hit_radius_multiplier),
            ("initial_pop_interval_ms", self.initial_pop_interval_ms),
            ("min_pop_interval_ms", self.min_pop_interval_ms),
            ("jerry_show_time_ms", self.jerry_show_time_ms),
            ("pop_in_secs", self.pop_in_secs),
            ("hit_effect_duration_ms", self.hit_effect_duration_ms),
        ] {
            if !(v.is_finite() && v > 0.0) {
                bail!("{name} must be a positive number (got {v})");
            }
        }
        if !(self.difficulty_increase_rate > 0.0 && self.difficulty_increase_rate <= 1.0) {
            bail!(
                "difficulty_increase_rate must be in (0, 1] (got {})",
                self.difficulty_increase_rate
            );
        }
        if self.min_pop_interval_ms > self.initial_pop_interval_ms {
            bail!("min_pop_interval_ms exceeds initial_pop_interval_ms");
        }
        if !(0.0..=1.0).contains(&self.min_hittable_animation) {
            bail!("min_hittable_animation must be within 0..=1");
        }
        Ok(())
    }

    /// Parse and validate a JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: GameConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load() -> Self {
        let Some(raw) = storage::get_item(storage::KEY_CONFIG) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::info!("Using game config override from local storage");
                cfg
            }
            Err(e) => {
                log::warn!("Ignoring invalid config override: {e:#}");
                Self::default()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardConfig {
    /// Realtime Database root, e.g. `https://<project>-default-rtdb.firebaseio.com`.
    /// The database rules must declare `".indexOn": "score"` under `path`, or the
    /// ordered top-N query is refused with HTTP 400.
    pub database_url: Option<String>,
    pub path: String,
    pub fetch_limit: usize,
    pub keep_top: usize,
    pub cache_top: usize,
    pub display_top: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            database_url: option_env!("WHACK_LEADERBOARD_URL").map(str::to_string),
            path: "leaderboard".to_string(),
            fetch_limit: 100,
            keep_top: 100,
            cache_top: 10,
            display_top: 5,
        }
    }
}

impl LeaderboardConfig {
    pub fn load() -> Self {
        let mut cfg = Self::default();
        if let Some(url) = storage::get_item(storage::KEY_LEADERBOARD_URL) {
            let url = url.trim();
            if !url.is_empty() {
                cfg.database_url = Some(url.to_string());
            }
        }
        if cfg.database_url.is_none() {
            log::warn!("No leaderboard database configured; scores stay local");
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = GameConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.hole_count(), 12);
        assert!((cfg.hit_radius() - 63.0).abs() < 1e-9);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = GameConfig::from_json(r#"{"game_duration_secs": 30, "rows": 2}"#).unwrap();
        assert_eq!(cfg.game_duration_secs, 30);
        assert_eq!(cfg.rows, 2);
        assert_eq!(cfg.cols, 4);
        assert_eq!(cfg.initial_pop_interval_ms, 1200.0);
    }

    #[test]
    fn rejects_growing_interval() {
        let err = GameConfig::from_json(r#"{"difficulty_increase_rate": 1.5}"#).unwrap_err();
        assert!(err.to_string().contains("difficulty_increase_rate"));
    }

    #[test]
    fn rejects_floor_above_start() {
        let cfg = GameConfig {
            min_pop_interval_ms: 2000.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_single_row_grid() {
        let cfg = GameConfig {
            rows: 1,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_huge_grid() {
        let err = GameConfig::from_json(r#"{"rows": 70000, "cols": 70000}"#).unwrap_err();
        assert!(err.to_string().contains("at most"));
        let cfg = GameConfig {
            rows: MAX_GRID_SIDE,
            cols: MAX_GRID_SIDE,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.hole_count(), 100);
    }

    #[test]
    fn rejects_negative_padding() {
        let err = GameConfig::from_json(r#"{"padding_x": -5000}"#).unwrap_err();
        assert!(err.to_string().contains("padding_x"));
        let cfg = GameConfig {
            padding_y: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(GameConfig::from_json("{not json").is_err());
    }

    #[test]
    fn leaderboard_defaults() {
        let cfg = LeaderboardConfig::default();
        assert_eq!(cfg.path, "leaderboard");
        assert_eq!(cfg.keep_top, 100);
        assert_eq!(cfg.display_top, 5);
    }
}
