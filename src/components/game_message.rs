use yew::prelude::*;

use crate::state::Message;

#[derive(Properties, PartialEq, Clone)]
pub struct GameMessageProps {
    pub message: Option<Message>,
}

/// Overlay shown on top of the playfield before the first round and after each one.
#[function_component]
pub fn GameMessage(props: &GameMessageProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };
    let body = match message {
        Message::Welcome => html! {<>
            <div>{"Welcome to Tom & Jerry!"}</div>
            <div style="font-size:1.2rem; margin-top:10px;">{"Click \"Start Game\" to begin"}</div>
        </>},
        Message::GameOver {
            name,
            score,
            rank,
            new_high_score,
        } => html! {<>
            <div>{ format!("Game Over, {}!", name) }</div>
            <div style="font-size:1.5rem; margin-top:10px;">{ format!("Final Score: {}", score) }</div>
            { if let Some(r) = rank {
                html!{ <div style="font-size:1.2rem; color:#FFD700; margin-top:5px;">{ format!("🎉 Rank #{} on Leaderboard! 🎉", r) }</div> }
            } else { html!{} } }
            { if *new_high_score {
                html!{ <div style="font-size:1.1rem; color:#8BC34A; margin-top:5px;">{"New high score!"}</div> }
            } else { html!{} } }
        </>},
    };
    html! {
        <div id="gameMessage" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.75); color:#fff; padding:20px 32px; border-radius:14px; text-align:center; font-size:2rem; font-weight:700; pointer-events:none; min-width:280px;">
            { body }
        </div>
    }
}
