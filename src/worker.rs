use anyhow::anyhow;
use js_sys::{Array, Object, Reflect, Uint8Array};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;
use wipeit_core::worker::MSG_DETECT;
use wipeit_core::{DetectRequest, LandmarkWorker, WorkerError, WorkerLink};

/// Module worker hosting the hand-landmark model, plus the offscreen canvas
/// used to pull RGBA pixels out of the video element.
pub struct WebLandmarkWorker {
    worker: web::Worker,
    link: WorkerLink,
    video: web::HtmlVideoElement,
    capture: web::HtmlCanvasElement,
    capture_ctx: web::CanvasRenderingContext2d,
    _on_message: Closure<dyn FnMut(web::MessageEvent)>,
}

impl WebLandmarkWorker {
    pub fn spawn(
        document: &web::Document,
        url: &str,
        video: web::HtmlVideoElement,
        link: WorkerLink,
    ) -> anyhow::Result<Self> {
        let opts = web::WorkerOptions::new();
        opts.set_type(web::WorkerType::Module);
        let worker = web::Worker::new_with_options(url, &opts)
            .map_err(|e| anyhow!("worker {}: {:?}", url, e))?;

        let link_rx = link.clone();
        let on_message = Closure::wrap(Box::new(move |ev: web::MessageEvent| {
            let json = match js_sys::JSON::stringify(&ev.data()) {
                Ok(s) => String::from(s),
                Err(e) => {
                    log::debug!("[worker] unserializable message: {:?}", e);
                    return;
                }
            };
            if let Err(e) = link_rx.dispatch_json(&json) {
                log::debug!("[worker] ignored message: {}", e);
            }
        }) as Box<dyn FnMut(web::MessageEvent)>);
        worker.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let capture: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;
        let capture_ctx: web::CanvasRenderingContext2d = capture
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context for capture canvas"))?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;

        log::info!("[worker] spawned {}", url);
        Ok(Self {
            worker,
            link,
            video,
            capture,
            capture_ctx,
            _on_message: on_message,
        })
    }

    pub fn terminate(&self) {
        self.worker.set_onmessage(None);
        self.worker.terminate();
        log::info!("[worker] terminated");
    }

    fn capture_frame(&self, req: &DetectRequest) -> Result<JsValue, WorkerError> {
        if self.capture.width() != req.width || self.capture.height() != req.height {
            self.capture.set_width(req.width);
            self.capture.set_height(req.height);
        }
        let (w, h) = (req.width as f64, req.height as f64);
        self.capture_ctx
            .draw_image_with_html_video_element_and_dw_and_dh(&self.video, 0.0, 0.0, w, h)
            .map_err(|e| WorkerError::Capture(format!("{:?}", e)))?;
        let pixels = self
            .capture_ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| WorkerError::Capture(format!("{:?}", e)))?
            .data();
        Ok(Uint8Array::from(&pixels.0[..]).buffer().into())
    }
}

fn detect_message(req: &DetectRequest, buffer: &JsValue) -> Result<Object, JsValue> {
    let msg = Object::new();
    Reflect::set(&msg, &"type".into(), &MSG_DETECT.into())?;
    Reflect::set(&msg, &"imageData".into(), buffer)?;
    Reflect::set(&msg, &"width".into(), &req.width.into())?;
    Reflect::set(&msg, &"height".into(), &req.height.into())?;
    Reflect::set(&msg, &"timestamp".into(), &req.timestamp.into())?;
    Ok(msg)
}

impl LandmarkWorker for WebLandmarkWorker {
    fn is_ready(&self) -> bool {
        self.link.is_ready()
    }

    fn detect(&mut self, timestamp_ms: f64) -> Result<(), WorkerError> {
        let req = DetectRequest {
            width: self.video.video_width(),
            height: self.video.video_height(),
            timestamp: timestamp_ms,
        };
        if req.width == 0 || req.height == 0 {
            return Err(WorkerError::Capture("video has no frame size yet".into()));
        }
        let buffer = self.capture_frame(&req)?;
        let msg =
            detect_message(&req, &buffer).map_err(|e| WorkerError::Post(format!("{:?}", e)))?;
        self.worker
            .post_message_with_transfer(&msg, &Array::of1(&buffer))
            .map_err(|e| WorkerError::Post(format!("{:?}", e)))
    }
}
