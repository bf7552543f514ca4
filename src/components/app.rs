use super::{
    controls_panel::ControlsPanel, game_message::GameMessage, game_view::GameView,
    leaderboard_modal::LeaderboardModal, name_modal::NameModal,
};
use crate::config::{GameConfig, LeaderboardConfig};
use crate::leaderboard::{self, LeaderboardClient, NewEntry};
use crate::model::GameSummary;
use crate::state::{Modal, UiAction, UiState};
use crate::storage;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const SAVE_FAILED: &str =
    "Failed to save score to leaderboard. Please check your internet connection.";

fn alert(msg: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(msg);
    }
}

fn today() -> String {
    js_sys::Date::new_0()
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into()
}

async fn load_leaderboard(
    client: &LeaderboardClient,
    limit: usize,
    ui: &UseReducerHandle<UiState>,
) {
    match client.fetch_top(limit).await {
        Ok(entries) => {
            log::debug!("Leaderboard loaded ({} entries)", entries.len());
            ui.dispatch(UiAction::LeaderboardLoaded(entries));
        }
        Err(e) => {
            log::error!("Error loading leaderboard: {e:#}");
            ui.dispatch(UiAction::LeaderboardFailed(e.to_string()));
        }
    }
}

fn refresh_leaderboard(client: LeaderboardClient, limit: usize, ui: UseReducerHandle<UiState>) {
    ui.dispatch(UiAction::LeaderboardLoading);
    spawn_local(async move {
        load_leaderboard(&client, limit, &ui).await;
    });
}

fn submit_score(
    client: LeaderboardClient,
    entry: NewEntry,
    cfg: LeaderboardConfig,
    ui: UseReducerHandle<UiState>,
) {
    spawn_local(async move {
        match client.push(&entry).await {
            Err(e) => {
                log::error!("Error adding score to leaderboard: {e:#}");
                alert(SAVE_FAILED);
            }
            Ok(id) => {
                log::info!("Score saved successfully ({id})");
                match client.cleanup(cfg.keep_top).await {
                    Ok(0) => {}
                    Ok(n) => log::info!("Trimmed {n} leaderboard entries"),
                    Err(e) => log::warn!("Leaderboard cleanup failed: {e:#}"),
                }
                load_leaderboard(&client, cfg.fetch_limit, &ui).await;
            }
        }
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::load());
    let lb_config = use_memo((), |_| LeaderboardConfig::load());
    let client = {
        let lb_config = lb_config.clone();
        use_memo((), move |_| LeaderboardClient::from_config(&lb_config))
    };
    let ui = {
        let online = client.is_some();
        let lb_config = lb_config.clone();
        use_reducer(move || {
            UiState::new(
                storage::load_high_score(),
                storage::load_muted(),
                online,
                lb_config.cache_top,
                lb_config.display_top,
            )
        })
    };

    // Initial leaderboard load
    {
        let client = client.clone();
        let ui = ui.clone();
        let limit = lb_config.fetch_limit;
        use_effect_with((), move |_| {
            if let Some(c) = (*client).clone() {
                refresh_leaderboard(c, limit, ui);
            }
            || ()
        });
    }
    // Persist high score
    {
        let high = ui.high_score;
        use_effect_with(high, move |high| {
            if *high > 0 {
                storage::save_high_score(*high);
            }
            || ()
        });
    }
    // Persist sound setting
    {
        let muted = ui.muted;
        use_effect_with(muted, move |muted| {
            storage::save_muted(*muted);
            || ()
        });
    }

    let on_start = {
        let ui = ui.clone();
        Callback::from(move |()| ui.dispatch(UiAction::RequestStart))
    };
    let on_submit_name = {
        let ui = ui.clone();
        Callback::from(move |raw: String| {
            if leaderboard::normalize_player_name(&raw).is_none() {
                alert("Please enter your name!");
                return;
            }
            ui.dispatch(UiAction::SubmitName(raw));
        })
    };
    let on_show_leaderboard = {
        let ui = ui.clone();
        let client = client.clone();
        let limit = lb_config.fetch_limit;
        Callback::from(move |()| {
            ui.dispatch(UiAction::ShowLeaderboard);
            if let Some(c) = (*client).clone() {
                refresh_leaderboard(c, limit, ui.clone());
            }
        })
    };
    let on_close_leaderboard = {
        let ui = ui.clone();
        Callback::from(move |()| ui.dispatch(UiAction::HideLeaderboard))
    };
    let on_toggle_mute = {
        let ui = ui.clone();
        Callback::from(move |()| ui.dispatch(UiAction::ToggleMute))
    };
    let on_game_over = {
        let ui = ui.clone();
        let client = client.clone();
        let lb_config = lb_config.clone();
        let name = ui.player_name.clone();
        Callback::from(move |summary: GameSummary| {
            ui.dispatch(UiAction::GameOver(summary));
            if summary.score == 0 || name.is_empty() {
                return;
            }
            let Some(c) = (*client).clone() else {
                return;
            };
            let entry = NewEntry {
                name: name.clone(),
                score: summary.score,
                date: today(),
                timestamp: js_sys::Date::now(),
            };
            submit_score(c, entry, (*lb_config).clone(), ui.clone());
        })
    };

    html! {<div style="min-height:100vh; display:flex; flex-direction:column; align-items:center; gap:14px; padding:14px; box-sizing:border-box;">
        <h1 style="margin:0; color:#5d4037; text-shadow:2px 2px 0 #ffcc80;">{"🐭 Whack-a-Jerry 🔨"}</h1>
        <GameView
            config={config.clone()}
            round={ui.round}
            player_name={ui.player_name.clone()}
            high_score={ui.high_score}
            muted={ui.muted}
            on_game_over={on_game_over}
        >
            <GameMessage message={ui.message.clone()} />
        </GameView>
        <ControlsPanel
            playing={ui.playing}
            game_over={ui.game_over()}
            muted={ui.muted}
            on_start={on_start}
            on_show_leaderboard={on_show_leaderboard}
            on_toggle_mute={on_toggle_mute}
        />
        <NameModal show={ui.modal == Modal::NameEntry} on_submit={on_submit_name} />
        <LeaderboardModal
            show={ui.modal == Modal::Leaderboard}
            entries={ui.leaderboard.clone()}
            status={ui.leaderboard_status.clone()}
            display_top={ui.display_top}
            on_close={on_close_leaderboard}
        />
    </div>}
}
