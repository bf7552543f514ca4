use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NameModalProps {
    pub show: bool,
    /// Receives the raw input; validation happens upstream.
    pub on_submit: Callback<String>,
}

#[function_component]
pub fn NameModal(props: &NameModalProps) -> Html {
    let input_ref = use_node_ref();

    // Fresh, focused input each time the modal opens
    {
        let input_ref = input_ref.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let submit = {
        let input_ref = input_ref.clone();
        let cb = props.on_submit.clone();
        move || {
            let value = input_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            cb.emit(value);
        }
    };
    let submit_btn = {
        let submit = submit.clone();
        Callback::from(move |_| submit())
    };
    let keydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    });

    // Background clicks are ignored: a name is required to play.
    html! {<div id="nameModal" style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:50;">
        <div style="background:#fff8e1; color:#3e2723; border:3px solid #5d4037; border-radius:14px; padding:22px 26px; min-width:300px; display:flex; flex-direction:column; gap:12px; text-align:center;">
            <h2 style="margin:0;">{"Enter Your Name"}</h2>
            <input ref={input_ref} id="playerNameInput" type="text" maxlength="24" placeholder="Your name" onkeydown={keydown}
                style="font-size:18px; padding:8px 10px; border-radius:8px; border:2px solid #8d6e63;" />
            <button id="submitNameBtn" class="btn primary" onclick={submit_btn}>{"Start Playing!"}</button>
        </div>
    </div>}
}
