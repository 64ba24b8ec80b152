//! Data sources behind the dashboard: local synthesis or the remote API.

use dioxus::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::api::fetch_live_sample;
use crate::shared::error::SourceError;
use crate::shared::readings::{merge_readings, waveform_from_raw};
use crate::shared::refresh::{DashboardConfig, RefreshPolicy};
use crate::shared::state::{DashboardState, Sample};
use crate::shared::synth::synthesize;
use crate::shared::types::{LiveSampleDto, ReadingSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Synthetic,
    Remote,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Synthetic => "Simulated",
            SourceKind::Remote => "Live",
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait VitalSource {
    fn policy(&self, cfg: &DashboardConfig) -> RefreshPolicy;

    /// Produces the next sample. `current` is what is on screen now.
    async fn next_sample(&mut self, current: &ReadingSet) -> Result<Sample, SourceError>;
}

pub struct SyntheticSource<R: Rng> {
    rng: R,
}

impl SyntheticSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> SyntheticSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> VitalSource for SyntheticSource<R> {
    fn policy(&self, cfg: &DashboardConfig) -> RefreshPolicy {
        cfg.simulation
    }

    async fn next_sample(&mut self, _current: &ReadingSet) -> Result<Sample, SourceError> {
        let tick = synthesize(&mut self.rng);
        Ok(Sample {
            readings: tick.readings,
            waveform: Some(tick.waveform),
            emotion: tick.emotion,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoteSource;

impl VitalSource for RemoteSource {
    fn policy(&self, cfg: &DashboardConfig) -> RefreshPolicy {
        cfg.polling
    }

    async fn next_sample(&mut self, current: &ReadingSet) -> Result<Sample, SourceError> {
        let dto = fetch_live_sample().await.map_err(source_error)?;
        Ok(sample_from_live(current, dto))
    }
}

fn source_error(e: ServerFnError) -> SourceError {
    match e {
        ServerFnError::ServerError(msg) => SourceError::Upstream(msg),
        other => SourceError::Server(other.to_string()),
    }
}

/// Merges a live poll result into what is currently shown.
pub fn sample_from_live(current: &ReadingSet, dto: LiveSampleDto) -> Sample {
    let (readings, waveform) = match &dto.health {
        Some(raw) => (merge_readings(current, raw), waveform_from_raw(raw)),
        None => (current.clone(), None),
    };
    Sample {
        readings,
        waveform,
        emotion: dto.emotion,
    }
}

/// Runs one cycle against `source` and swaps the resulting state in.
/// Returns `false` without doing anything when another cycle (the refresh
/// loop or an earlier retry) is still pending.
pub async fn run_cycle<S: VitalSource>(
    source: &mut S,
    mut state: Signal<DashboardState>,
) -> bool {
    let Some(started) = state.peek().started() else {
        dioxus::logger::tracing::debug!("[dashboard] cycle already in flight, skipping");
        return false;
    };
    let current = started.readings.clone();
    state.set(started);
    let outcome = source.next_sample(&current).await;
    if let Err(e) = &outcome {
        dioxus::logger::tracing::error!("[dashboard] error fetching health data: {e}");
    }
    let now = crate::utils::format::clock_now();
    let next = state.peek().applied(outcome, &now);
    state.set(next);
    true
}

/// Drives `source` until the owning component unmounts and drops the task.
#[cfg(feature = "web")]
pub async fn drive<S: VitalSource>(
    mut source: S,
    cfg: DashboardConfig,
    state: Signal<DashboardState>,
) {
    use crate::shared::refresh::Cadence;
    use futures::StreamExt;
    use gloo_timers::future::{IntervalStream, TimeoutFuture};

    let policy = source.policy(&cfg);
    dioxus::logger::tracing::info!(
        "[dashboard] source started: {:?} every {} ms",
        policy.cadence,
        policy.period_ms
    );
    match policy.cadence {
        Cadence::FixedRate => {
            let mut ticks = IntervalStream::new(policy.period_ms);
            while ticks.next().await.is_some() {
                run_cycle(&mut source, state).await;
            }
        }
        Cadence::AfterCompletion => loop {
            run_cycle(&mut source, state).await;
            let delay = policy.next_delay_ms(state.peek().consecutive_failures);
            TimeoutFuture::new(delay).await;
        },
    }
}
