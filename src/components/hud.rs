use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HudProps {
    pub score: u32,
    pub time_remaining: u32,
    pub player_name: String,
    pub high_score: u32,
}

#[function_component]
pub fn Hud(props: &HudProps) -> Html {
    let cell_style = "display:flex; flex-direction:column; align-items:center; min-width:90px;"; // label over value
    let label_style = "font-size:12px; text-transform:uppercase; letter-spacing:1px; opacity:0.8;";
    let value_style = "font-size:24px; font-weight:700; font-variant-numeric:tabular-nums;";
    let timer_color = if props.time_remaining <= 10 { "#f85149" } else { "#ffffff" };
    let player = if props.player_name.is_empty() {
        "-".to_string()
    } else {
        props.player_name.clone()
    };
    html! {
        <div style="display:flex; gap:18px; justify-content:center; background:rgba(93,64,55,0.9); color:#fff; border-radius:10px; padding:8px 18px;">
            <div style={cell_style}>
                <span style={label_style}>{"Player"}</span>
                <span id="playerName" style={value_style}>{ player }</span>
            </div>
            <div style={cell_style}>
                <span style={label_style}>{"Score"}</span>
                <span id="score" style={format!("{} color:#FFD700;", value_style)}>{ props.score }</span>
            </div>
            <div style={cell_style}>
                <span style={label_style}>{"Time"}</span>
                <span id="timer" style={format!("{} color:{};", value_style, timer_color)}>{ props.time_remaining }</span>
            </div>
            <div style={cell_style}>
                <span style={label_style}>{"Best"}</span>
                <span id="highScore" style={value_style}>{ props.high_score }</span>
            </div>
        </div>
    }
}
