use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod pages;
mod shared;
mod sources;
mod utils;

#[cfg(feature = "web")]
mod media;

#[cfg(feature = "server")]
mod backend;

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        backend::init_tracing();

        // Resolve upstream config and build the HTTP client once at boot
        let base = backend::UPSTREAM.base_url();
        eprintln!("[boot] proxying health, emotion and chat requests to {base}");
    }
    dioxus::launch(app::App);
}
