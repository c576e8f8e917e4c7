use crate::audio::{Music, Sfx};
use crate::canvas::CanvasSurface;
use crate::overlay;
use crate::panel::{DebugPanel, SharedSettings};
use crate::worker::WebLandmarkWorker;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use wipeit_core::{Clock, GameEvent, GameLoop, Surface, SystemClock};

// HAVE_CURRENT_DATA
const VIDEO_READY: u16 = 2;

pub struct FrameContext {
    pub game: GameLoop,
    pub clock: SystemClock,
    pub worker: WebLandmarkWorker,
    pub surface: CanvasSurface,
    pub video: web::HtmlVideoElement,
    pub document: web::Document,

    pub settings: SharedSettings,
    pub panel: Option<DebugPanel>,
    pub sfx: Sfx,
    pub music: Music,

    pub events: Vec<GameEvent>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.apply_settings();

        let (vw, vh) = (self.video.video_width(), self.video.video_height());
        if vw > 0 && vh > 0 && self.surface.size() != (vw, vh) {
            self.surface.resize(vw, vh);
        }
        let video_time = if self.video.ready_state() >= VIDEO_READY {
            Some(self.video.current_time())
        } else {
            None
        };

        let mut events = std::mem::take(&mut self.events);
        events.clear();
        let now = self.clock.now();
        self.game.tick(now, video_time, &mut self.worker, &mut self.surface, &mut events);
        for ev in &events {
            self.handle_event(ev);
        }
        self.events = events;
    }

    fn apply_settings(&mut self) {
        let s = *self.settings.borrow();
        let cfg = &mut self.game.renderer.config;
        cfg.debug_overlay = s.show_helper;
        cfg.landmark_labels = s.show_labels;
        self.music.set_volume(s.volume);
        if let Some(panel) = &self.panel {
            panel.sync(&s);
        }
    }

    fn handle_event(&self, ev: &GameEvent) {
        match ev {
            GameEvent::Wiped { .. } => {
                self.sfx.play();
                let session = &self.game.session;
                overlay::update_hud(&self.document, session.score(), session.level());
            }
            GameEvent::LevelUp { to, .. } => {
                overlay::show_banner(&self.document, *to);
                let session = &self.game.session;
                overlay::update_hud(&self.document, session.score(), *to);
            }
            GameEvent::Spawned { .. } | GameEvent::Started | GameEvent::Stopped => {}
        }
    }

    /// Releases everything the frame owns except the camera stream.
    pub fn shutdown(&mut self) {
        let mut events = Vec::new();
        self.game.stop(&mut events);
        self.worker.terminate();
        self.music.pause();
        if let Some(panel) = self.panel.take() {
            panel.destroy();
        }
        self.surface.clear();
    }
}

/// Stops the animation loop on the next frame.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !handle_tick.is_running() {
            // drop the self reference so the closure and frame are freed
            _ = tick_clone.borrow_mut().take();
            return;
        }
        match frame_ctx.try_borrow_mut() {
            Ok(mut ctx) => ctx.frame(),
            Err(_) => log::warn!("[loop] frame still borrowed, skipping"),
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
    handle
}
