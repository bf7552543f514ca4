use rand::SeedableRng;
use rand::rngs::StdRng;
use whack_a_jerry::config::GameConfig;
use whack_a_jerry::model::{GameSession, Phase, TickOutcome, WhackOutcome};

const FRAME_MS: f64 = 16.0;

/// Drive a whole round on a simulated clock. `whack` decides whether to hit a
/// target that is currently hittable.
fn play_round(seed: u64, whack: bool) -> (GameSession, u32, usize, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut s = GameSession::new(GameConfig::default());
    s.start(0.0);
    let mut t = 0.0;
    let mut next_pop = 0.0;
    let mut next_tick = 1000.0;
    let mut hits = 0;
    let mut escaped = 0;
    loop {
        if t >= next_pop {
            let before = s.active_count();
            match s.pop(&mut rng, t) {
                Some(delay) => {
                    assert!(s.active_count() <= before + 1);
                    next_pop = t + delay;
                }
                None => next_pop = f64::INFINITY,
            }
        }
        escaped += s.frame(t);
        for h in s.holes.iter().filter(|h| h.has_jerry) {
            assert!(t - h.appear_at_ms <= s.config.jerry_show_time_ms);
        }
        if whack {
            let targets: Vec<(f64, f64)> = s
                .holes
                .iter()
                .filter(|h| h.hit_test(h.x, h.y, &s.config))
                .map(|h| (h.x, h.y))
                .collect();
            for (x, y) in targets {
                assert!(matches!(s.whack(x, y, t), WhackOutcome::Hit { .. }));
                hits += 1;
            }
        }
        if t >= next_tick {
            next_tick += 1000.0;
            if let TickOutcome::Finished(summary) = s.tick_second() {
                return (s, summary.score, hits, escaped);
            }
        }
        t += FRAME_MS;
    }
}

#[test]
fn attentive_player_scores_every_hittable_target() {
    let (s, score, hits, _) = play_round(42, true);
    assert!(score > 50, "score {score}");
    assert_eq!(score as usize, hits);
    assert_eq!(s.phase, Phase::Over);
    assert_eq!(s.time_remaining, 0);
}

#[test]
fn difficulty_reaches_the_floor_within_a_round() {
    let (s, _, _, _) = play_round(7, true);
    assert_eq!(s.pop_interval_ms, s.config.min_pop_interval_ms);
}

#[test]
fn idle_player_scores_nothing_and_targets_escape() {
    let (_, score, _, escaped) = play_round(3, false);
    assert_eq!(score, 0);
    assert!(escaped > 100, "escaped {escaped}");
}

#[test]
fn finished_round_rejects_input_and_spawns() {
    let (mut s, score, _, _) = play_round(11, true);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(s.pop(&mut rng, 1e9), None);
    let (x, y) = (s.holes[0].x, s.holes[0].y);
    assert_eq!(s.whack(x, y, 1e9), WhackOutcome::Nothing);
    assert_eq!(s.score, score);
    assert_eq!(s.active_count(), 0);
}

#[test]
fn same_seed_same_round() {
    let a = play_round(99, true);
    let b = play_round(99, true);
    assert_eq!(a.1, b.1);
    assert_eq!(a.3, b.3);
}

#[test]
fn missing_an_empty_hole_does_not_score() {
    let mut s = GameSession::new(GameConfig::default());
    s.start(0.0);
    let (x, y) = (s.holes[7].x + 20.0, s.holes[7].y - 20.0);
    assert_eq!(s.whack(x, y, 10.0), WhackOutcome::Miss { hole: 7 });
    assert_eq!(s.score, 0);
}
