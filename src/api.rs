use dioxus::prelude::*;

use crate::shared::types::{LiveSampleDto, ReadingSet};

#[server(FetchLiveSample)]
pub async fn fetch_live_sample() -> Result<LiveSampleDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::UPSTREAM;

        match UPSTREAM.fetch_live_sample().await {
            Ok(sample) => Ok(sample),
            Err(e) => {
                eprintln!("fetch_live_sample error: {e:#}");
                Err(ServerFnError::ServerError(e.to_string()))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        Err(ServerFnError::ServerError("server feature disabled".into()))
    }
}

#[server(SendChat)]
pub async fn send_chat(message: String, health_data: ReadingSet) -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::UPSTREAM;

        match UPSTREAM.chat(message, health_data).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                eprintln!("send_chat error: {e:#}");
                Err(ServerFnError::ServerError(e.to_string()))
            }
        }
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (message, health_data);
        Err(ServerFnError::ServerError("server feature disabled".into()))
    }
}
