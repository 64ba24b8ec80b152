#![cfg(feature = "web")]
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};

use crate::shared::camera::CaptureHandle;

impl CaptureHandle for MediaStream {
    fn stop_tracks(&self) {
        for track in self.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Asks the browser for a video-only capture stream.
pub async fn request_video_stream() -> Result<MediaStream, String> {
    let window = web_sys::window().ok_or("no window")?;
    let devices = window.navigator().media_devices().map_err(js_err)?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(js_err)?;
    let stream = JsFuture::from(promise).await.map_err(js_err)?;
    stream.dyn_into::<MediaStream>().map_err(js_err)
}

/// Binds `stream` to the `<video>` element with the given id, if mounted.
pub fn attach(stream: &MediaStream, element_id: &str) -> bool {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        return false;
    };
    match el.dyn_into::<HtmlVideoElement>() {
        Ok(video) => {
            video.set_src_object(Some(stream));
            true
        }
        Err(_) => false,
    }
}
