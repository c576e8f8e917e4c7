use crate::constants::{BANNER_ID, BANNER_MS, HUD_LEVEL_ID, HUD_SCORE_ID, START_OVERLAY_ID};
use crate::{dom, hud};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn set_hidden(el: &web::Element, hidden: bool) {
    let cl = el.class_list();
    if hidden {
        _ = cl.add_1("hidden");
        // for pages without the stylesheet
        _ = el.set_attribute("style", "display:none");
    } else {
        _ = cl.remove_1("hidden");
        _ = el.set_attribute("style", "");
    }
}

fn element_hidden(el: &web::Element) -> bool {
    el.class_list().contains("hidden")
        || el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false)
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        set_hidden(&el, false);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        set_hidden(&el, true);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(START_OVERLAY_ID)
        .map(|el| element_hidden(&el))
        .unwrap_or(false)
}

/// Fills the start overlay with the title, description and start button.
pub fn render_start(document: &web::Document, button_id: &str) {
    let Some(el) = document.get_element_by_id(START_OVERLAY_ID) else {
        return;
    };
    let paragraphs: String = hud::DESCRIPTION
        .iter()
        .map(|line| format!("<p>{}</p>", line))
        .collect();
    el.set_inner_html(&format!(
        "<h1>{}</h1>{}<button id='{}'>{}</button>",
        hud::TITLE,
        paragraphs,
        button_id,
        hud::START_LABEL
    ));
}

pub fn update_hud(document: &web::Document, score: u32, level: usize) {
    dom::set_text(document, HUD_SCORE_ID, &hud::score_text(score));
    dom::set_text(document, HUD_LEVEL_ID, &hud::level_text(level));
}

/// Shows "level N" for a moment. A newer banner simply overwrites the text;
/// whichever timeout fires last hides it.
pub fn show_banner(document: &web::Document, level: usize) {
    let Some(el) = document.get_element_by_id(BANNER_ID) else {
        return;
    };
    el.set_text_content(Some(&hud::level_banner(level)));
    set_hidden(&el, false);

    let Some(window) = web::window() else { return };
    let hide_el = el.clone();
    let cb = Closure::once_into_js(move || set_hidden(&hide_el, true));
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), BANNER_MS)
    {
        log::warn!("[hud] banner timeout not scheduled: {:?}", e);
    }
}
