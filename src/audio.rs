use anyhow::anyhow;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn play_element(el: &web::HtmlAudioElement, label: &'static str) {
    match el.play() {
        Ok(p) => spawn_local(async move {
            // autoplay policies reject until the page had a user gesture
            if let Err(e) = JsFuture::from(p).await {
                log::warn!("[audio] {} play rejected: {:?}", label, e);
            }
        }),
        Err(e) => log::error!("[audio] {} play error: {:?}", label, e),
    }
}

/// One-shot sound effect. Each play gets its own element so overlapping
/// wipes don't cut each other off.
pub struct Sfx {
    src: &'static str,
    volume: f32,
}

impl Sfx {
    pub fn new(src: &'static str, volume: f32) -> Self {
        Self {
            src,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn play(&self) {
        match web::HtmlAudioElement::new_with_src(self.src) {
            Ok(el) => {
                el.set_volume(self.volume as f64);
                play_element(&el, "sfx");
            }
            Err(e) => log::error!("[audio] sfx element error: {:?}", e),
        }
    }
}

/// Looping background track.
pub struct Music {
    el: web::HtmlAudioElement,
    volume: f32,
}

impl Music {
    pub fn new(src: &str, volume: f32) -> anyhow::Result<Self> {
        let el = web::HtmlAudioElement::new_with_src(src).map_err(|e| anyhow!("{:?}", e))?;
        el.set_loop(true);
        let volume = volume.clamp(0.0, 1.0);
        el.set_volume(volume as f64);
        Ok(Self { el, volume })
    }

    pub fn play(&self) {
        play_element(&self.el, "music");
    }

    pub fn pause(&self) {
        _ = self.el.pause();
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if (volume - self.volume).abs() > f32::EPSILON {
            self.volume = volume;
            self.el.set_volume(volume as f64);
        }
    }
}
