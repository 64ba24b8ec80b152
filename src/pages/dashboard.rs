use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use futures::StreamExt;

use crate::api::send_chat;
use crate::components::{CameraPanel, ChatPanel, EcgChart, ErrorBanner, StatCard};
use crate::shared::camera::CameraSlot;
use crate::shared::chat::{ChatTranscript, Ticket};
use crate::shared::error::ChatError;
use crate::shared::state::DashboardState;
use crate::shared::status::MetricKind;
use crate::shared::types::ReadingSet;
use crate::sources::{run_cycle, RemoteSource, SourceKind};
use crate::utils::format::clock_now_short;

#[cfg(feature = "web")]
type Stream = web_sys::MediaStream;

/// Stand-in handle where no capture API exists (server render, tests).
#[cfg(not(feature = "web"))]
#[derive(Debug)]
pub struct NoDevice;

#[cfg(not(feature = "web"))]
impl crate::shared::camera::CaptureHandle for NoDevice {
    fn stop_tracks(&self) {}
}

#[cfg(not(feature = "web"))]
type Stream = NoDevice;

/// One queued chat send: the placeholder it resolves and the context it carries.
struct ChatJob {
    ticket: Ticket,
    message: String,
    health: ReadingSet,
}

#[allow(non_snake_case)]
#[component]
pub fn Dashboard(source: SourceKind) -> Element {
    let mut state = use_signal(DashboardState::default);
    let mut transcript = use_signal(|| ChatTranscript::new(clock_now_short()));
    let mut camera = use_signal(CameraSlot::<Stream>::default);

    // Periodic updates; the task is dropped with the component
    #[cfg(feature = "web")]
    {
        use crate::shared::refresh::DashboardConfig;
        use crate::sources::{drive, SyntheticSource};

        use_future(move || async move {
            let cfg = DashboardConfig::default();
            match source {
                SourceKind::Synthetic => drive(SyntheticSource::from_entropy(), cfg, state).await,
                SourceKind::Remote => drive(RemoteSource, cfg, state).await,
            }
        });

        use_effect(move || {
            if let Some(stream) = camera.read().handle() {
                crate::media::attach(stream, crate::components::camera_panel::VIDEO_ELEMENT_ID);
            }
        });
    }

    // Release the capture device when leaving the page
    use_drop(move || {
        if let Ok(mut slot) = camera.try_write() {
            slot.disconnect();
        }
    });

    // Sends are handled one at a time, in submission order
    let chat = use_coroutine(move |mut rx: UnboundedReceiver<ChatJob>| async move {
        while let Some(job) = rx.next().await {
            let reply = send_chat(job.message, job.health).await.map_err(|e| {
                error!("[chat] api error: {e}");
                ChatError::Request(e.to_string())
            });
            transcript.write().resolve(job.ticket, reply, &clock_now_short());
        }
    });

    let on_send = move |text: String| {
        let Some(ticket) = transcript.write().begin(&text, &clock_now_short()) else {
            return;
        };
        chat.send(ChatJob {
            ticket,
            message: text,
            health: state.peek().readings.clone(),
        });
    };

    let on_toggle_camera = move |_: ()| {
        if camera.peek().is_connected() {
            camera.write().disconnect();
            return;
        }
        #[cfg(feature = "web")]
        spawn(async move {
            let request = crate::media::request_video_stream().await;
            camera.write().connect(request);
        });
        #[cfg(not(feature = "web"))]
        camera
            .write()
            .connect::<&str>(Err("camera capture is only available in the browser"));
    };

    // Ignored while the refresh loop (or an earlier retry) is mid-cycle
    let on_retry = move |_: ()| {
        if state.peek().in_flight {
            return;
        }
        spawn(async move {
            run_cycle(&mut RemoteSource, state).await;
        });
    };

    let on_dismiss = move |_: ()| {
        let next = state.peek().dismissed();
        state.set(next);
    };

    let view = state.read();
    let connected = camera.read().is_connected();
    let entries = transcript.read().entries().to_vec();

    rsx! {
        if let Some(err) = view.error.clone() {
            ErrorBanner { message: err, on_retry, on_dismiss }
        }

        // Stats grid
        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-5 gap-4 sm:gap-6 mb-8",
            for kind in MetricKind::ALL {
                StatCard { key: "{kind.title()}", kind, value: view.readings.metric(kind) }
            }
        }

        EcgChart {
            points: view.waveform.clone(),
            loading: view.loading,
            heart_rate: view.readings.heart_rate,
        }

        div { class: "grid grid-cols-1 xl:grid-cols-2 gap-4 sm:gap-6 mt-8 mb-8",
            CameraPanel { connected, emotion: view.emotion.clone(), on_toggle: on_toggle_camera }
            ChatPanel { entries, on_send }
        }

        div { class: "mt-6 text-center text-gray-500 text-sm",
            match &view.last_updated {
                Some(ts) => rsx! { "Last updated: {ts} · {source.label()}" },
                None => rsx! { "Updating..." },
            }
        }
    }
}
