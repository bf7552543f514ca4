// Core game model: the hole grid, a single play session and its rules.
// Nothing here touches the DOM; timestamps and randomness come from the caller.

use rand::Rng;

use crate::config::GameConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Hole {
    pub index: usize,
    /// Centre in canvas pixels.
    pub x: f64,
    pub y: f64,
    pub has_jerry: bool,
    /// Timestamp (ms) at which the current Jerry popped out.
    pub appear_at_ms: f64,
    /// Seconds-based rise progress, clamped to 0..=1.
    pub animation: f64,
}

impl Hole {
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self {
            index,
            x,
            y,
            has_jerry: false,
            appear_at_ms: 0.0,
            animation: 0.0,
        }
    }

    pub fn show(&mut self, now_ms: f64) {
        self.has_jerry = true;
        self.appear_at_ms = now_ms;
        self.animation = 0.0;
    }

    pub fn hide(&mut self) {
        self.has_jerry = false;
        self.animation = 0.0;
    }

    /// Advance the rise animation; returns true if Jerry ducked back down.
    pub fn update(&mut self, dt_secs: f64, now_ms: f64, cfg: &GameConfig) -> bool {
        if !self.has_jerry {
            return false;
        }
        self.animation = (self.animation + dt_secs.max(0.0)).min(1.0);
        if now_ms - self.appear_at_ms > cfg.jerry_show_time_ms {
            self.hide();
            return true;
        }
        false
    }

    fn distance_to(&self, px: f64, py: f64) -> f64 {
        ((px - self.x).powi(2) + (py - self.y).powi(2)).sqrt()
    }

    /// Point lies over the hole itself.
    pub fn contains(&self, px: f64, py: f64, cfg: &GameConfig) -> bool {
        self.distance_to(px, py) < cfg.hole_radius
    }

    /// Jerry is up far enough and the point is inside the enlarged hit area.
    pub fn hit_test(&self, px: f64, py: f64, cfg: &GameConfig) -> bool {
        if !self.has_jerry || self.animation < cfg.min_hittable_animation {
            return false;
        }
        self.distance_to(px, py) < cfg.hit_radius()
    }

    /// Visual rise fraction used by the renderer.
    pub fn pop_progress(&self, cfg: &GameConfig) -> f64 {
        (self.animation / cfg.pop_in_secs).min(1.0)
    }
}

/// Row-major grid of holes spread evenly inside the padded canvas area.
pub fn layout_holes(cfg: &GameConfig) -> Vec<Hole> {
    let w = cfg.canvas_width as f64;
    let h = cfg.canvas_height as f64;
    let spacing_x = (w - 2.0 * cfg.padding_x) / (cfg.cols.max(2) - 1) as f64;
    let spacing_y = (h - 2.0 * cfg.padding_y) / (cfg.rows.max(2) - 1) as f64;
    let mut holes = Vec::with_capacity(cfg.hole_count());
    for row in 0..cfg.rows {
        for col in 0..cfg.cols {
            let x = cfg.padding_x + col as f64 * spacing_x;
            let y = cfg.padding_y + row as f64 * spacing_y;
            holes.push(Hole::new(holes.len(), x, y));
        }
    }
    holes
}

#[derive(Clone, Debug, PartialEq)]
pub struct HitEffect {
    pub x: f64,
    pub y: f64,
    pub click_x: f64,
    pub click_y: f64,
    pub started_ms: f64,
    pub duration_ms: f64,
}

impl HitEffect {
    /// Fraction of the effect elapsed, or `None` once it is over.
    pub fn progress(&self, now_ms: f64) -> Option<f64> {
        let elapsed = now_ms - self.started_ms;
        if elapsed > self.duration_ms {
            return None;
        }
        Some((elapsed / self.duration_ms).clamp(0.0, 1.0))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Playing,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhackOutcome {
    Hit { hole: usize },
    Miss { hole: usize },
    Nothing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running { time_remaining: u32 },
    Finished(GameSummary),
    Inactive,
}

pub fn is_new_high_score(score: u32, prior: u32) -> bool {
    score > 0 && score > prior
}

/// Next pop interval after one more spawn.
pub fn next_pop_interval(current_ms: f64, cfg: &GameConfig) -> f64 {
    (current_ms * cfg.difficulty_increase_rate).max(cfg.min_pop_interval_ms)
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub config: GameConfig,
    pub holes: Vec<Hole>,
    pub score: u32,
    pub time_remaining: u32,
    pub phase: Phase,
    pub pop_interval_ms: f64,
    pub effects: Vec<HitEffect>,
    last_frame_ms: Option<f64>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let holes = layout_holes(&config);
        Self {
            score: 0,
            time_remaining: config.game_duration_secs,
            phase: Phase::Idle,
            pop_interval_ms: config.initial_pop_interval_ms,
            effects: Vec::new(),
            last_frame_ms: None,
            holes,
            config,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Whether the playfield still changes from frame to frame: a running round,
    /// or hit bursts left to fade out after it.
    pub fn needs_frames(&self) -> bool {
        self.is_playing() || !self.effects.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.holes.iter().filter(|h| h.has_jerry).count()
    }

    pub fn start(&mut self, now_ms: f64) {
        self.score = 0;
        self.time_remaining = self.config.game_duration_secs;
        self.phase = Phase::Playing;
        self.pop_interval_ms = self.config.initial_pop_interval_ms;
        self.effects.clear();
        for hole in &mut self.holes {
            hole.hide();
        }
        self.last_frame_ms = Some(now_ms);
    }

    /// Show Jerry in a random free hole and ramp up difficulty.
    /// Returns the delay before the next pop, or `None` when the round is not running.
    pub fn pop<R: Rng>(&mut self, rng: &mut R, now_ms: f64) -> Option<f64> {
        if !self.is_playing() {
            return None;
        }
        let free: Vec<usize> = self
            .holes
            .iter()
            .filter(|h| !h.has_jerry)
            .map(|h| h.index)
            .collect();
        if !free.is_empty() {
            let pick = free[rng.gen_range(0..free.len())];
            self.holes[pick].show(now_ms);
        }
        self.pop_interval_ms = next_pop_interval(self.pop_interval_ms, &self.config);
        Some(self.pop_interval_ms)
    }

    /// Per-frame update: animations, auto-hide and effect expiry.
    /// Returns how many Jerries ducked away unhit this frame.
    pub fn frame(&mut self, now_ms: f64) -> usize {
        let dt = match self.last_frame_ms {
            Some(last) => (now_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        let mut escaped = 0;
        for hole in &mut self.holes {
            if hole.update(dt, now_ms, &self.config) {
                escaped += 1;
            }
        }
        self.effects.retain(|e| e.progress(now_ms).is_some());
        escaped
    }

    pub fn whack(&mut self, px: f64, py: f64, now_ms: f64) -> WhackOutcome {
        if !self.is_playing() {
            return WhackOutcome::Nothing;
        }
        if let Some(idx) = self.holes.iter().position(|h| h.hit_test(px, py, &self.config)) {
            self.score = self.score.saturating_add(1);
            let hole = &mut self.holes[idx];
            hole.hide();
            self.effects.push(HitEffect {
                x: hole.x,
                y: hole.y,
                click_x: px,
                click_y: py,
                started_ms: now_ms,
                duration_ms: self.config.hit_effect_duration_ms,
            });
            return WhackOutcome::Hit { hole: idx };
        }
        match self
            .holes
            .iter()
            .find(|h| h.contains(px, py, &self.config) && !h.has_jerry)
        {
            Some(h) => WhackOutcome::Miss { hole: h.index },
            None => WhackOutcome::Nothing,
        }
    }

    /// One second of countdown. Ends the round at zero.
    pub fn tick_second(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Inactive;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            return TickOutcome::Finished(self.finish());
        }
        TickOutcome::Running {
            time_remaining: self.time_remaining,
        }
    }

    /// Stop the round and clear the board.
    pub fn finish(&mut self) -> GameSummary {
        self.phase = Phase::Over;
        for hole in &mut self.holes {
            hole.hide();
        }
        GameSummary { score: self.score }
    }
}
