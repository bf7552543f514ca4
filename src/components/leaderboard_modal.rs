use yew::prelude::*;

use crate::leaderboard::{LeaderboardEntry, medal};
use crate::state::LeaderboardStatus;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardModalProps {
    pub show: bool,
    pub entries: Vec<LeaderboardEntry>,
    pub status: LeaderboardStatus,
    pub display_top: usize,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn LeaderboardModal(props: &LeaderboardModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let backdrop_cb = close_cb.clone();
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let empty = |text: &str| html! { <div class="leaderboard-empty" style="padding:16px; opacity:0.8;">{ text.to_string() }</div> };
    let list = match &props.status {
        LeaderboardStatus::Disabled => empty("Online leaderboard is not configured."),
        LeaderboardStatus::Loading if props.entries.is_empty() => empty("Loading leaderboard..."),
        LeaderboardStatus::Failed(_) if props.entries.is_empty() => {
            empty("Leaderboard unavailable. Check your connection.")
        }
        _ if props.entries.is_empty() => empty("No scores yet. Be the first!"),
        _ => props
            .entries
            .iter()
            .take(props.display_top)
            .enumerate()
            .map(|(i, entry)| {
                let rank = i + 1;
                let class = if rank <= 3 {
                    format!("leaderboard-item top-{rank}")
                } else {
                    "leaderboard-item".to_string()
                };
                html! {
                    <div key={entry.id.clone()} class={class} style="display:grid; grid-template-columns:48px 1fr auto auto; gap:10px; align-items:center; padding:8px 10px; border-bottom:1px solid #d7ccc8;">
                        <div class="leaderboard-rank" style="font-size:20px; text-align:center;">{ medal(rank) }</div>
                        <div class="leaderboard-name" style="font-weight:600; text-align:left;">{ entry.name.clone() }</div>
                        <div class="leaderboard-score" style="font-weight:700; color:#e65100;">{ format!("{} pts", entry.score) }</div>
                        <div class="leaderboard-date" style="font-size:12px; opacity:0.7;">{ entry.date.clone() }</div>
                    </div>
                }
            })
            .collect::<Html>(),
    };

    html! {<div id="leaderboardModal" onclick={backdrop_cb} style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:50;">
        <div onclick={swallow} style="background:#fff8e1; color:#3e2723; border:3px solid #5d4037; border-radius:14px; padding:18px 22px; min-width:320px; max-width:480px; width:90%; display:flex; flex-direction:column; gap:12px;">
            <h2 style="margin:0; text-align:center;">{"🏆 Top Players"}</h2>
            <div id="leaderboardList">{ list }</div>
            <button id="closeLeaderboardBtn" class="btn" onclick={close_cb}>{"Close"}</button>
        </div>
    </div>}
}
