#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{debug, warn};
use once_cell::sync::Lazy;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error as _;

use crate::backend::config::UpstreamConfig;
use crate::shared::types::{
    ChatReplyDto, ChatRequestDto, EmotionLog, LiveSampleDto, RawHealth, ReadingSet,
};

/// Shared client for the server functions, configured from the environment.
pub static UPSTREAM: Lazy<UpstreamClient> = Lazy::new(|| {
    UpstreamClient::new(&UpstreamConfig::from_env()).expect("upstream client")
});

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(cfg: &UpstreamConfig) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            http,
            base_url: cfg.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let method_s = method.as_str().to_string();
        debug!("[upstream] {} {}", method_s, url);
        let mut req = self
            .http
            .request(method, &url)
            .header("Cache-Control", "no-store");
        if let Some(b) = body {
            req = req.json(&b);
        }
        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("[upstream] request error on {} {}: {}", method_s, url, e);
                if e.is_timeout() {
                    warn!("[upstream] hint: request timed out");
                }
                if e.is_connect() {
                    warn!("[upstream] hint: connection failed, check VITALEYES_API_URL");
                }
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    warn!("[upstream] error chain: {}", chain.join(" -> "));
                }
                return Err(anyhow!("sending {} {}: {}", method_s, url, e));
            }
        };
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let snip = text.chars().take(300).collect::<String>();
            warn!("[upstream] {} {} failed: status={} body={}", method_s, url, status, snip);
            return Err(anyhow!("{} {} failed with status {}", method_s, url, status));
        }
        let bytes = res
            .bytes()
            .await
            .with_context(|| format!("reading body from {} {}", method_s, url))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let snip = String::from_utf8_lossy(&bytes);
            let snip = snip.chars().take(300).collect::<String>();
            anyhow!(
                "decoding JSON from {} {} failed: {}\nBody snippet: {}",
                method_s,
                url,
                e,
                snip
            )
        })
    }

    /// Latest vitals row. The endpoint may answer with a list (newest
    /// first) or with a single object.
    pub async fn fetch_health(&self) -> Result<Option<RawHealth>> {
        let v: Value = self
            .request_json(Method::GET, "/api/health-data", None)
            .await?;
        latest_row(v)
    }

    pub async fn fetch_emotion(&self) -> Result<EmotionLog> {
        self.request_json(Method::GET, "/api/emotions-log", None)
            .await
    }

    /// Issues both GETs concurrently and lets both finish. Either one
    /// failing fails the cycle.
    pub async fn fetch_live_sample(&self) -> Result<LiveSampleDto> {
        let (health, emotion) = tokio::join!(self.fetch_health(), self.fetch_emotion());
        Ok(LiveSampleDto {
            health: health?,
            emotion: emotion?,
        })
    }

    pub async fn chat(&self, message: String, health_data: ReadingSet) -> Result<String> {
        let body = serde_json::to_value(ChatRequestDto {
            message,
            health_data,
        })?;
        let reply: ChatReplyDto = self
            .request_json(Method::POST, "/api/chat", Some(body))
            .await?;
        Ok(reply.reply)
    }
}

/// An empty list or a null row means there is no reading to apply.
fn latest_row(v: Value) -> Result<Option<RawHealth>> {
    let row = match v {
        Value::Array(mut rows) => {
            if rows.is_empty() {
                return Ok(None);
            }
            rows.swap_remove(0)
        }
        other => other,
    };
    if row.is_null() {
        return Ok(None);
    }
    let raw = serde_json::from_value(row).context("decoding health-data row")?;
    Ok(Some(raw))
}
