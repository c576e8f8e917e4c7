use anyhow::anyhow;
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// HAVE_CURRENT_DATA
const READY_STATE_CURRENT_DATA: u16 = 2;

fn user_facing_constraints() -> Result<web::MediaStreamConstraints, JsValue> {
    let video = Object::new();
    Reflect::set(&video, &"facingMode".into(), &"user".into())?;
    let constraints = Object::new();
    Reflect::set(&constraints, &"video".into(), &video)?;
    Ok(constraints.unchecked_into())
}

/// Asks for the front camera, attaches it to `video` and resolves once the
/// first frame is available.
pub async fn open_user_camera(video: &web::HtmlVideoElement) -> anyhow::Result<web::MediaStream> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| anyhow!("mediaDevices unavailable: {:?}", e))?;
    let constraints = user_facing_constraints().map_err(|e| anyhow!("{:?}", e))?;
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| anyhow!("getUserMedia: {:?}", e))?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("camera access denied: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("not a MediaStream: {:?}", e))?;

    video.set_src_object(Some(&stream));
    if video.ready_state() < READY_STATE_CURRENT_DATA {
        let loaded = Promise::new(&mut |resolve, _reject| {
            video.set_onloadeddata(Some(&resolve));
        });
        _ = JsFuture::from(loaded).await;
        video.set_onloadeddata(None);
    }
    if let Ok(p) = video.play() {
        if let Err(e) = JsFuture::from(p).await {
            log::warn!("[camera] video.play rejected: {:?}", e);
        }
    }
    log::info!(
        "[camera] streaming {}x{}",
        video.video_width(),
        video.video_height()
    );
    Ok(stream)
}

pub fn stop_tracks(stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
}
