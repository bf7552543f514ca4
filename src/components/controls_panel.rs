use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub playing: bool,
    pub game_over: bool,
    pub muted: bool,
    pub on_start: Callback<()>,
    pub on_show_leaderboard: Callback<()>,
    pub on_toggle_mute: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let start_cb = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let leaderboard_cb = {
        let cb = props.on_show_leaderboard.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let mute_cb = {
        let cb = props.on_toggle_mute.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let start_button = if props.playing {
        html! {}
    } else if props.game_over {
        html! { <button id="restartBtn" class="btn primary" onclick={start_cb}>{"Play Again"}</button> }
    } else {
        html! { <button id="startBtn" class="btn primary" onclick={start_cb}>{"Start Game"}</button> }
    };
    html! {<div style="display:flex; gap:10px; justify-content:center; flex-wrap:wrap;">
        { start_button }
        <button id="leaderboardBtn" class="btn" onclick={leaderboard_cb}>{"🏆 Leaderboard"}</button>
        <button class="btn" onclick={mute_cb} title="Toggle sound">{ if props.muted { "🔇 Sound Off" } else { "🔊 Sound On" } }</button>
    </div>}
}
