use crate::constants::PANEL_ID;
use crate::hud;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wipeit_core::GameConfig;

/// Live values bound to the debug panel controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugSettings {
    pub show_helper: bool,
    pub show_labels: bool,
    pub volume: f32,
}

impl DebugSettings {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            show_helper: config.render.debug_overlay,
            show_labels: config.render.landmark_labels,
            volume: config.music_volume,
        }
    }
}

pub type SharedSettings = Rc<RefCell<DebugSettings>>;

type InputHandler = Closure<dyn FnMut(web::Event)>;

/// Small DOM control panel. Listeners live as long as the panel and are
/// dropped by [`DebugPanel::destroy`].
pub struct DebugPanel {
    root: web::Element,
    inputs: Vec<(web::HtmlInputElement, InputHandler)>,
    checkboxes: [web::HtmlInputElement; 2],
}

fn create_input(document: &web::Document, kind: &str) -> anyhow::Result<web::HtmlInputElement> {
    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    input.set_type(kind);
    Ok(input)
}

fn labelled(
    document: &web::Document,
    root: &web::Element,
    text: &str,
    input: &web::HtmlInputElement,
) -> anyhow::Result<()> {
    let label = document
        .create_element("label")
        .map_err(|e| anyhow!("{:?}", e))?;
    label.set_text_content(Some(text));
    label
        .append_child(input)
        .map_err(|e| anyhow!("{:?}", e))?;
    root.append_child(&label).map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

impl DebugPanel {
    pub fn mount(document: &web::Document, settings: SharedSettings) -> anyhow::Result<Self> {
        let root = match document.get_element_by_id(PANEL_ID) {
            Some(el) => el,
            None => {
                let el = document
                    .create_element("div")
                    .map_err(|e| anyhow!("{:?}", e))?;
                el.set_id(PANEL_ID);
                document
                    .body()
                    .ok_or_else(|| anyhow!("no body"))?
                    .append_child(&el)
                    .map_err(|e| anyhow!("{:?}", e))?;
                el
            }
        };
        root.set_inner_html("");

        let current = *settings.borrow();
        let helper = create_input(document, "checkbox")?;
        helper.set_checked(current.show_helper);
        let labels = create_input(document, "checkbox")?;
        labels.set_checked(current.show_labels);
        let volume = create_input(document, "range")?;
        volume.set_min("0");
        volume.set_max("1");
        volume.set_step("0.01");
        volume.set_value(&current.volume.to_string());

        labelled(document, &root, "showHelper", &helper)?;
        labelled(document, &root, "showLabels", &labels)?;
        labelled(document, &root, "volume", &volume)?;

        let mut inputs = Vec::with_capacity(3);
        let s = settings.clone();
        let el = helper.clone();
        inputs.push((
            helper.clone(),
            Closure::wrap(Box::new(move |_ev: web::Event| {
                s.borrow_mut().show_helper = el.checked();
            }) as Box<dyn FnMut(web::Event)>),
        ));
        let s = settings.clone();
        let el = labels.clone();
        inputs.push((
            labels.clone(),
            Closure::wrap(Box::new(move |_ev: web::Event| {
                s.borrow_mut().show_labels = el.checked();
            }) as Box<dyn FnMut(web::Event)>),
        ));
        let s = settings;
        let el = volume.clone();
        inputs.push((
            volume,
            Closure::wrap(Box::new(move |_ev: web::Event| {
                let mut st = s.borrow_mut();
                st.volume = hud::parse_volume(&el.value(), st.volume);
            }) as Box<dyn FnMut(web::Event)>),
        ));

        for (input, handler) in &inputs {
            input
                .add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())
                .map_err(|e| anyhow!("{:?}", e))?;
        }
        log::info!("[panel] mounted");
        Ok(Self {
            root,
            inputs,
            checkboxes: [helper, labels],
        })
    }

    /// Mirrors settings changed elsewhere (keyboard) back into the controls.
    pub fn sync(&self, settings: &DebugSettings) {
        let [helper, labels] = &self.checkboxes;
        if helper.checked() != settings.show_helper {
            helper.set_checked(settings.show_helper);
        }
        if labels.checked() != settings.show_labels {
            labels.set_checked(settings.show_labels);
        }
    }

    pub fn destroy(self) {
        for (input, handler) in &self.inputs {
            _ = input
                .remove_event_listener_with_callback("input", handler.as_ref().unchecked_ref());
        }
        self.root.set_inner_html("");
        log::info!("[panel] destroyed");
    }
}
