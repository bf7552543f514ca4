use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, CanvasRenderingContext2d, Event, HtmlCanvasElement};
use yew::prelude::*;

use super::hud::Hud;
use crate::audio::{Cue, Sfx};
use crate::config::GameConfig;
use crate::model::{GameSession, GameSummary, TickOutcome, WhackOutcome};
use crate::render;
use crate::state::{
    CanvasRect, FrameLoop, HammerCursor, RoundTimers, client_point, client_to_canvas,
};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub config: Rc<GameConfig>,
    /// Each new value starts a fresh round; 0 means nothing has been started yet.
    pub round: u32,
    pub player_name: String,
    pub high_score: u32,
    pub muted: bool,
    pub on_game_over: Callback<GameSummary>,
    #[prop_or_default]
    pub children: Html,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct HudSnapshot {
    score: u32,
    time_remaining: u32,
}

impl HudSnapshot {
    fn of(session: &GameSession) -> Self {
        Self {
            score: session.score,
            time_remaining: session.time_remaining,
        }
    }
}

fn set_body_playing(on: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let list = body.class_list();
        let _ = if on {
            list.add_1("playing")
        } else {
            list.remove_1("playing")
        };
    }
}

fn non_passive() -> AddEventListenerOptions {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    opts
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let hammer_ref = use_node_ref();
    let hammer = HammerCursor {
        node: hammer_ref.clone(),
    };
    let session = {
        let cfg = props.config.clone();
        use_mut_ref(move || GameSession::new((*cfg).clone()))
    };
    let sfx = use_mut_ref(Sfx::default);
    let frame_loop = use_mut_ref(FrameLoop::default);
    let hud = {
        let secs = props.config.game_duration_secs;
        use_state(move || HudSnapshot {
            score: 0,
            time_remaining: secs,
        })
    };

    // Effect: keep the sound toggle in sync
    {
        let sfx = sfx.clone();
        use_effect_with(props.muted, move |muted| {
            sfx.borrow_mut().muted = *muted;
            || ()
        });
    }

    // Main mount effect (canvas, render loop, pointer input)
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let sfx = sfx.clone();
        let hud = hud.clone();
        let hammer = hammer.clone();
        let frame_loop = frame_loop.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let document = window.document().expect("should have a document on window");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");
            {
                let s = session.borrow();
                canvas.set_width(s.config.canvas_width);
                canvas.set_height(s.config.canvas_height);
            }
            let ctx: Option<CanvasRenderingContext2d> = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());

            // RAF loop: paints the idle board once, then only runs while needed
            {
                let frame_loop_inner = frame_loop.clone();
                let window_loop = window.clone();
                let session = session.clone();
                frame_loop.borrow_mut().install(Closure::wrap(Box::new(move || {
                    frame_loop_inner.borrow_mut().frame_started();
                    let now = js_sys::Date::now();
                    let escaped = session.borrow_mut().frame(now);
                    if escaped > 0 {
                        log::debug!("{escaped} Jerry escaped");
                    }
                    if let Some(ctx) = &ctx {
                        render::draw_scene(ctx, &session.borrow(), now);
                    }
                    if session.borrow().needs_frames() {
                        frame_loop_inner.borrow_mut().request(&window_loop);
                    }
                }) as Box<dyn FnMut()>));
            }
            frame_loop.borrow_mut().request(&window);

            // Click / tap on the playfield
            let strike_cb = {
                let canvas = canvas.clone();
                let session = session.clone();
                let sfx = sfx.clone();
                let hud = hud.clone();
                let hammer = hammer.clone();
                Closure::wrap(Box::new(move |e: Event| {
                    if !session.borrow().is_playing() {
                        return;
                    }
                    if e.type_().starts_with("touch") {
                        e.prevent_default();
                    }
                    let Some((cx, cy)) = client_point(&e) else {
                        return;
                    };
                    hammer.move_to(cx, cy);
                    hammer.strike();
                    let rect = CanvasRect::from_dom(&canvas.get_bounding_client_rect());
                    let (x, y) = client_to_canvas(
                        cx,
                        cy,
                        rect,
                        canvas.width() as f64,
                        canvas.height() as f64,
                    );
                    let outcome = session.borrow_mut().whack(x, y, js_sys::Date::now());
                    match outcome {
                        WhackOutcome::Hit { .. } => {
                            sfx.borrow_mut().play(Cue::Hit);
                            hud.set(HudSnapshot::of(&session.borrow()));
                        }
                        WhackOutcome::Miss { .. } => sfx.borrow_mut().play(Cue::Miss),
                        WhackOutcome::Nothing => {}
                    }
                }) as Box<dyn FnMut(_)>)
            };
            canvas
                .add_event_listener_with_callback("click", strike_cb.as_ref().unchecked_ref())
                .ok();
            canvas
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchstart",
                    strike_cb.as_ref().unchecked_ref(),
                    &non_passive(),
                )
                .ok();

            // Hammer follows the pointer anywhere on the page
            let track_cb = {
                let session = session.clone();
                let hammer = hammer.clone();
                Closure::wrap(Box::new(move |e: Event| {
                    if !session.borrow().is_playing() {
                        return;
                    }
                    if let Some((cx, cy)) = client_point(&e) {
                        hammer.move_to(cx, cy);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback("mousemove", track_cb.as_ref().unchecked_ref())
                .ok();
            document
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "touchmove",
                    track_cb.as_ref().unchecked_ref(),
                    &non_passive(),
                )
                .ok();

            // Cleanup
            move || {
                let _ = canvas
                    .remove_event_listener_with_callback("click", strike_cb.as_ref().unchecked_ref());
                let _ = canvas.remove_event_listener_with_callback(
                    "touchstart",
                    strike_cb.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "mousemove",
                    track_cb.as_ref().unchecked_ref(),
                );
                let _ = document.remove_event_listener_with_callback(
                    "touchmove",
                    track_cb.as_ref().unchecked_ref(),
                );
                frame_loop.borrow_mut().stop(&window);
                let _keep_alive = (&strike_cb, &track_cb);
            }
        });
    }

    // Round effect: (re)start timers whenever a new round is requested
    {
        let session = session.clone();
        let sfx = sfx.clone();
        let hud = hud.clone();
        let hammer = hammer.clone();
        let on_game_over = props.on_game_over.clone();
        let frame_loop = frame_loop.clone();

        use_effect_with(props.round, move |round| {
            let round = *round;
            let window = web_sys::window().expect("no global `window` exists");
            let timers = Rc::new(RefCell::new(RoundTimers::default()));
            let pop_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let mut countdown_cb: Option<Closure<dyn FnMut()>> = None;

            if round > 0 {
                session.borrow_mut().start(js_sys::Date::now());
                hud.set(HudSnapshot::of(&session.borrow()));
                frame_loop.borrow_mut().request(&window);
                hammer.set_visible(true);
                set_body_playing(true);
                log::info!("Round {round} started");

                // Pop chain: each pop schedules the next one with the decayed interval
                {
                    let session = session.clone();
                    let timers = timers.clone();
                    let window_pop = window.clone();
                    let pop_cell_inner = pop_cell.clone();
                    *pop_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                        let next = session
                            .borrow_mut()
                            .pop(&mut rand::thread_rng(), js_sys::Date::now());
                        let Some(delay) = next else {
                            return;
                        };
                        if let Some(cb) = pop_cell_inner.borrow().as_ref() {
                            if let Ok(id) = window_pop
                                .set_timeout_with_callback_and_timeout_and_arguments_0(
                                    cb.as_ref().unchecked_ref(),
                                    delay.round() as i32,
                                )
                            {
                                timers.borrow_mut().set_pop(id);
                            }
                        }
                    }) as Box<dyn FnMut()>));
                }
                if let Some(cb) = pop_cell.borrow().as_ref() {
                    if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        cb.as_ref().unchecked_ref(),
                        0,
                    ) {
                        timers.borrow_mut().set_pop(id);
                    }
                }

                // Seconds countdown
                let cb = {
                    let session = session.clone();
                    let hud = hud.clone();
                    let timers = timers.clone();
                    let window_cd = window.clone();
                    let sfx = sfx.clone();
                    let hammer = hammer.clone();
                    let on_game_over = on_game_over.clone();
                    Closure::wrap(Box::new(move || {
                        let outcome = session.borrow_mut().tick_second();
                        match outcome {
                            TickOutcome::Running { .. } => {
                                hud.set(HudSnapshot::of(&session.borrow()));
                            }
                            TickOutcome::Finished(summary) => {
                                timers.borrow_mut().clear(&window_cd);
                                hud.set(HudSnapshot::of(&session.borrow()));
                                hammer.set_visible(false);
                                set_body_playing(false);
                                sfx.borrow_mut().play(Cue::GameOver);
                                log::info!("Round over, final score {}", summary.score);
                                on_game_over.emit(summary);
                            }
                            TickOutcome::Inactive => {}
                        }
                    }) as Box<dyn FnMut()>)
                };
                if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    1000,
                ) {
                    timers.borrow_mut().set_countdown(id);
                }
                countdown_cb = Some(cb);
            }

            move || {
                let mut t = timers.borrow_mut();
                if t.is_armed() {
                    // Torn down mid-round (unmount or a new round): leave the page usable.
                    t.clear(&window);
                    hammer.set_visible(false);
                    set_body_playing(false);
                }
                drop(t);
                pop_cell.borrow_mut().take();
                drop(countdown_cb);
            }
        });
    }

    html! {<div style="display:flex; flex-direction:column; align-items:center; gap:10px; width:100%;">
        <Hud score={hud.score} time_remaining={hud.time_remaining} player_name={props.player_name.clone()} high_score={props.high_score} />
        <div style="position:relative; width:100%; max-width:800px;">
            <canvas ref={canvas_ref} id="gameCanvas" style="display:block; width:100%; height:auto; border-radius:14px; border:4px solid #5d4037; touch-action:none; cursor:crosshair;"></canvas>
            { props.children.clone() }
        </div>
        <div ref={hammer_ref} class="hammer-cursor" style="display:none;">{"🔨"}</div>
    </div>}
}
