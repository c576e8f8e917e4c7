#![cfg(target_arch = "wasm32")]
use crate::constants::{CONFIG_SCRIPT_ID, START_BUTTON_ID};
use crate::panel::DebugSettings;
use crate::session::WebSession;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use wipeit_core::GameConfig;

mod audio;
mod camera;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod hud;
mod keys;
mod overlay;
mod panel;
mod session;
mod worker;

type SessionSlot = Rc<RefCell<Option<WebSession>>>;

/// Reads the optional `<script type="application/json">` config blob.
fn load_config(document: &web::Document) -> GameConfig {
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    if raw.trim().is_empty() {
        return GameConfig::default();
    }
    match GameConfig::from_json_str(&raw) {
        Ok(cfg) => {
            log::info!("[config] loaded {} levels from page", cfg.levels.len());
            cfg
        }
        Err(e) => {
            log::error!("[config] invalid config, using defaults: {}", e);
            GameConfig::default()
        }
    }
}

fn stop_session(document: &web::Document, slot: &SessionSlot) {
    let session = slot.borrow_mut().take();
    if let Some(s) = session {
        s.stop();
        if overlay::is_hidden(document) {
            overlay::show(document);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("wipeit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = Rc::new(load_config(&document));
    let settings = Rc::new(RefCell::new(DebugSettings::from_config(&config)));
    let slot: SessionSlot = Rc::new(RefCell::new(None));

    overlay::render_start(&document, START_BUTTON_ID);
    overlay::show(&document);
    overlay::update_hud(&document, 0, 0);

    // one camera request in flight at a time
    static STARTING: AtomicBool = AtomicBool::new(false);
    {
        let doc = document.clone();
        let config = config.clone();
        let settings = settings.clone();
        let slot = slot.clone();
        dom::add_click_listener(&document, START_BUTTON_ID, move || {
            if slot.borrow().is_some() || STARTING.swap(true, Ordering::SeqCst) {
                return;
            }
            overlay::hide(&doc);
            let doc = doc.clone();
            let config = config.clone();
            let settings = settings.clone();
            let slot = slot.clone();
            spawn_local(async move {
                match WebSession::start(&doc, &config, settings).await {
                    Ok(s) => *slot.borrow_mut() = Some(s),
                    Err(e) => {
                        log::error!("[game] could not start: {:?}", e);
                        overlay::show(&doc);
                    }
                }
                STARTING.store(false, Ordering::SeqCst);
            });
        });
    }

    let doc = document.clone();
    events::wire_global_keydown(settings, move || stop_session(&doc, &slot));
    Ok(())
}
