use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::motion::scroll_progress;

/// Owns a window `scroll` listener. The listener lives exactly as long as
/// this value: dropping it unregisters the callback.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Registers `on_scroll` and runs it once so the caller starts from the
    /// current position.
    pub fn attach(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        let _ = callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&wasm_bindgen::JsValue::NULL);
        Some(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Progress (0..1) of the viewport through the element behind `node`,
/// updated on every scroll event while the calling component is mounted.
#[hook]
pub fn use_scroll_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let listener = ScrollListener::attach(move || {
                    let Some(window) = web_sys::window() else { return };
                    let Some(element) = node.cast::<web_sys::Element>() else { return };
                    let rect = element.get_bounding_client_rect();
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    progress.set(scroll_progress(rect.top(), rect.height(), viewport));
                });
                move || drop(listener)
            },
            node,
        );
    }

    *progress
}
