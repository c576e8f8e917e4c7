use crate::audio::{Music, Sfx};
use crate::camera;
use crate::canvas::CanvasSurface;
use crate::constants::*;
use crate::dom;
use crate::frame::{self, FrameContext, LoopHandle};
use crate::overlay;
use crate::panel::{DebugPanel, SharedSettings};
use crate::worker::WebLandmarkWorker;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;
use wipeit_core::{
    Clock, DetectionResult, GameConfig, GameLoop, MailboxReceiver, SystemClock, WorkerLink,
};

// 2^53, the integer range of Math.random() scaled
const SEED_SPAN: f64 = 9_007_199_254_740_992.0;

/// One running game: camera stream, detection worker, animation loop, audio
/// and debug panel. Dropped resources are released by [`WebSession::stop`].
pub struct WebSession {
    frame: Rc<RefCell<FrameContext>>,
    loop_handle: LoopHandle,
    stream: web::MediaStream,
}

impl WebSession {
    pub async fn start(
        document: &web::Document,
        config: &GameConfig,
        settings: SharedSettings,
    ) -> anyhow::Result<Self> {
        let video: web::HtmlVideoElement = dom::element_by_id(document, VIDEO_ID)?;
        let canvas: web::HtmlCanvasElement = dom::element_by_id(document, CANVAS_ID)?;

        let stream = camera::open_user_camera(&video).await?;
        let Parts {
            worker,
            inbox,
            surface,
            music,
        } = match build_parts(document, canvas, video.clone(), &settings) {
            Ok(p) => p,
            Err(e) => {
                camera::stop_tracks(&stream);
                return Err(e);
            }
        };

        let seed = config
            .seed
            .unwrap_or_else(|| (js_sys::Math::random() * SEED_SPAN) as u64);
        let clock = SystemClock::new();
        let mut game = GameLoop::new(config, seed, inbox);
        let mut events = Vec::new();
        game.start(clock.now(), &mut events);

        let panel = match DebugPanel::mount(document, settings.clone()) {
            Ok(p) => Some(p),
            Err(e) => {
                log::error!("[panel] mount failed: {:?}", e);
                None
            }
        };
        music.play();
        overlay::update_hud(document, 0, 0);

        let frame = Rc::new(RefCell::new(FrameContext {
            game,
            clock,
            worker,
            surface,
            video,
            document: document.clone(),
            settings,
            panel,
            sfx: Sfx::new(SOUND_WIPE, config.wipe_volume),
            music,
            events,
        }));
        let loop_handle = frame::start_loop(frame.clone());
        log::info!("[game] session started (seed {})", seed);
        Ok(Self {
            frame,
            loop_handle,
            stream,
        })
    }

    pub fn stop(self) {
        self.loop_handle.stop();
        match self.frame.try_borrow_mut() {
            Ok(mut ctx) => ctx.shutdown(),
            Err(_) => log::warn!("[game] frame busy during stop"),
        }
        camera::stop_tracks(&self.stream);
        log::info!("[game] session stopped");
    }
}

struct Parts {
    worker: WebLandmarkWorker,
    inbox: MailboxReceiver<DetectionResult>,
    surface: CanvasSurface,
    music: Music,
}

fn build_parts(
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
    video: web::HtmlVideoElement,
    settings: &SharedSettings,
) -> anyhow::Result<Parts> {
    let surface = CanvasSurface::new(canvas, RAG_IMAGE, DIRT_IMAGE)?;
    let music = Music::new(MUSIC_TRACK, settings.borrow().volume)?;
    let (link, inbox) = WorkerLink::new();
    let worker = WebLandmarkWorker::spawn(document, WORKER_URL, video, link)?;
    Ok(Parts {
        worker,
        inbox,
        surface,
        music,
    })
}
