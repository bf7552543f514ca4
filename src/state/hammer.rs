// The 🔨 element that follows the pointer while a round is running.
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;
use yew::NodeRef;

pub const STRIKE_MS: i32 = 200;

#[derive(Clone, Default, PartialEq)]
pub struct HammerCursor {
    pub node: NodeRef,
}

impl HammerCursor {
    fn element(&self) -> Option<HtmlElement> {
        self.node.cast::<HtmlElement>()
    }

    pub fn set_visible(&self, visible: bool) {
        if let Some(el) = self.element() {
            let _ = el
                .style()
                .set_property("display", if visible { "block" } else { "none" });
        }
    }

    pub fn move_to(&self, client_x: f64, client_y: f64) {
        if let Some(el) = self.element() {
            let style = el.style();
            let _ = style.set_property("display", "block");
            let _ = style.set_property("left", &format!("{client_x}px"));
            let _ = style.set_property("top", &format!("{client_y}px"));
        }
    }

    /// Play the swing animation for `STRIKE_MS`.
    pub fn strike(&self) {
        let Some(el) = self.element() else { return };
        let _ = el.class_list().add_1("hitting");
        let Some(window) = web_sys::window() else { return };
        let release = Closure::once_into_js(move || {
            let _ = el.class_list().remove_1("hitting");
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            release.unchecked_ref(),
            STRIKE_MS,
        );
    }
}
