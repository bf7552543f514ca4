// Pointer (mouse / touch) coordinate helpers.
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, TouchEvent};

/// Canvas bounding box in client (CSS) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn from_dom(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Map a client position to canvas pixels, undoing any CSS scaling of the canvas.
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    rect: CanvasRect,
    canvas_w: f64,
    canvas_h: f64,
) -> (f64, f64) {
    let scale_x = if rect.width > 0.0 { canvas_w / rect.width } else { 1.0 };
    let scale_y = if rect.height > 0.0 { canvas_h / rect.height } else { 1.0 };
    (
        (client_x - rect.left) * scale_x,
        (client_y - rect.top) * scale_y,
    )
}

/// Client position of a mouse event or of the first active touch.
pub fn client_point(e: &Event) -> Option<(f64, f64)> {
    // Checked by event type: `instanceof TouchEvent` throws on browsers without touch support.
    if e.type_().starts_with("touch") {
        let te: &TouchEvent = e.unchecked_ref();
        let t0 = te.touches().item(0)?;
        return Some((t0.client_x() as f64, t0.client_y() as f64));
    }
    let me = e.dyn_ref::<MouseEvent>()?;
    Some((me.client_x() as f64, me.client_y() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscaled_canvas_is_offset_only() {
        let rect = CanvasRect {
            left: 10.0,
            top: 20.0,
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(client_to_canvas(110.0, 220.0, rect, 800.0, 600.0), (100.0, 200.0));
    }

    #[test]
    fn css_shrunk_canvas_is_scaled_up() {
        let rect = CanvasRect {
            left: 0.0,
            top: 50.0,
            width: 400.0,
            height: 300.0,
        };
        assert_eq!(client_to_canvas(200.0, 200.0, rect, 800.0, 600.0), (400.0, 300.0));
    }

    #[test]
    fn collapsed_rect_does_not_divide_by_zero() {
        let rect = CanvasRect::default();
        assert_eq!(client_to_canvas(5.0, 6.0, rect, 800.0, 600.0), (5.0, 6.0));
    }
}
