// Canvas painting for the playfield: grass, holes, Jerry and hit bursts.

use std::f64::consts::PI;
use web_sys::CanvasRenderingContext2d;

use crate::config::GameConfig;
use crate::model::{GameSession, HitEffect, Hole};

const GRASS: &str = "#8BC34A";
const HOLE_RIM: &str = "#654321";
const HOLE_INNER: &str = "#3d2817";
const FUR: &str = "#8B8B8B";
const PINK: &str = "#FFB6C1";
const BURST_PARTICLES: usize = 8;

fn circle(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    ctx.arc(x, y, r.max(0.0), 0.0, PI * 2.0).ok();
}

fn fill_circle(ctx: &CanvasRenderingContext2d, color: &str, x: f64, y: f64, r: f64) {
    ctx.set_fill_style_str(color);
    circle(ctx, x, y, r);
    ctx.fill();
}

fn line(ctx: &CanvasRenderingContext2d, x0: f64, y0: f64, x1: f64, y1: f64) {
    ctx.begin_path();
    ctx.move_to(x0, y0);
    ctx.line_to(x1, y1);
    ctx.stroke();
}

pub fn draw_scene(ctx: &CanvasRenderingContext2d, session: &GameSession, now_ms: f64) {
    let cfg = &session.config;
    ctx.set_fill_style_str(GRASS);
    ctx.fill_rect(0.0, 0.0, cfg.canvas_width as f64, cfg.canvas_height as f64);
    for hole in &session.holes {
        draw_hole(ctx, hole, cfg);
    }
    for effect in &session.effects {
        if let Some(p) = effect.progress(now_ms) {
            draw_hit_effect(ctx, effect, p, cfg.jerry_radius);
        }
    }
}

fn draw_hole(ctx: &CanvasRenderingContext2d, hole: &Hole, cfg: &GameConfig) {
    fill_circle(ctx, HOLE_RIM, hole.x, hole.y, cfg.hole_radius);
    fill_circle(ctx, HOLE_INNER, hole.x, hole.y, cfg.hole_radius - 10.0);
    if hole.has_jerry && hole.animation > 0.0 {
        let rise = hole.pop_progress(cfg);
        let y_offset = cfg.jerry_radius * (1.0 - rise);
        draw_jerry(ctx, hole.x, hole.y - y_offset, cfg.jerry_radius);
    }
}

fn draw_jerry(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.save();
    ctx.translate(x, y).ok();

    fill_circle(ctx, FUR, 0.0, 0.0, r);
    // Ears: pink inside, then the fur rim on top.
    for side in [-1.0, 1.0] {
        fill_circle(ctx, PINK, side * r * 0.6, -r * 0.7, r * 0.3);
    }
    for side in [-1.0, 1.0] {
        fill_circle(ctx, FUR, side * r * 0.6, -r * 0.8, r * 0.4);
    }
    for side in [-1.0, 1.0] {
        fill_circle(ctx, "black", side * r * 0.3, -r * 0.2, r * 0.15);
    }
    fill_circle(ctx, "white", -r * 0.25, -r * 0.25, r * 0.08);
    fill_circle(ctx, "white", r * 0.35, -r * 0.25, r * 0.08);
    fill_circle(ctx, PINK, 0.0, r * 0.1, r * 0.12);

    ctx.set_stroke_style_str("black");
    ctx.set_line_width(2.0);
    for side in [-1.0, 1.0] {
        line(ctx, side * r * 0.2, r * 0.1, side * r * 0.8, 0.0);
        line(ctx, side * r * 0.2, r * 0.2, side * r * 0.8, r * 0.3);
    }

    ctx.restore();
}

fn draw_hit_effect(ctx: &CanvasRenderingContext2d, e: &HitEffect, p: f64, jerry_radius: f64) {
    ctx.save();
    let fade = 1.0 - p;

    ctx.set_stroke_style_str(&format!("rgba(255, 215, 0, {fade})"));
    ctx.set_line_width(6.0);
    circle(ctx, e.x, e.y, jerry_radius * (1.0 + p * 2.0));
    ctx.stroke();

    ctx.set_stroke_style_str(&format!("rgba(255, 140, 0, {})", fade * 0.7));
    ctx.set_line_width(4.0);
    circle(ctx, e.x, e.y, jerry_radius * (1.0 + p * 1.5));
    ctx.stroke();

    let spread = jerry_radius * (1.0 + p * 2.0);
    let size = 8.0 * (1.0 - p * 0.5);
    let gold = format!("rgba(255, 215, 0, {fade})");
    for i in 0..BURST_PARTICLES {
        let angle = PI * 2.0 * i as f64 / BURST_PARTICLES as f64;
        fill_circle(
            ctx,
            &gold,
            e.x + angle.cos() * spread,
            e.y + angle.sin() * spread,
            size,
        );
    }

    // "HIT!" rises and fades over the first 70% of the burst.
    if p < 0.7 {
        let tp = p / 0.7;
        let alpha = 1.0 - tp;
        let ty = e.y - jerry_radius - tp * 40.0;
        ctx.set_font("bold 32px Arial");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(&format!("rgba(255, 215, 0, {alpha})"));
        ctx.fill_text("HIT!", e.x, ty).ok();
        ctx.set_stroke_style_str(&format!("rgba(255, 100, 0, {alpha})"));
        ctx.set_line_width(3.0);
        ctx.stroke_text("HIT!", e.x, ty).ok();
    }

    ctx.restore();
}
