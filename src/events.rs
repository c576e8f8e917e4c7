use crate::keys::{key_action, KeyAction};
use crate::panel::SharedSettings;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Global keydown: `h`/`l` flip the debug toggles, Escape calls `on_stop`.
pub fn wire_global_keydown(settings: SharedSettings, mut on_stop: impl FnMut() + 'static) {
    let Some(window) = web::window() else { return };
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        match key_action(&ev.key()) {
            Some(KeyAction::ToggleHelper) => {
                let mut s = settings.borrow_mut();
                s.show_helper = !s.show_helper;
                log::info!("[keys] showHelper={}", s.show_helper);
            }
            Some(KeyAction::ToggleLabels) => {
                let mut s = settings.borrow_mut();
                s.show_labels = !s.show_labels;
                log::info!("[keys] showLabels={}", s.show_labels);
            }
            Some(KeyAction::Stop) => {
                ev.prevent_default();
                on_stop();
            }
            None => {}
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
