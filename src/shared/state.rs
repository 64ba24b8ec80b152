use crate::shared::error::SourceError;
use crate::shared::types::{EmotionLog, ReadingSet, Waveform};

/// What one successful tick or poll cycle produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub readings: ReadingSet,
    /// `None` keeps the waveform already on screen.
    pub waveform: Option<Waveform>,
    pub emotion: EmotionLog,
}

/// Everything the dashboard renders apart from chat and camera.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub readings: ReadingSet,
    pub waveform: Waveform,
    pub emotion: Option<EmotionLog>,
    pub last_updated: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub consecutive_failures: u32,
    /// A cycle has started and not been applied yet.
    pub in_flight: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            readings: ReadingSet::default(),
            waveform: Vec::new(),
            emotion: None,
            last_updated: None,
            loading: true,
            error: None,
            consecutive_failures: 0,
            in_flight: false,
        }
    }
}

impl DashboardState {
    /// Marks a cycle as started. Returns `None` while another cycle is
    /// still in flight, so at most one runs at a time.
    pub fn started(&self) -> Option<Self> {
        if self.in_flight {
            return None;
        }
        Some(Self {
            in_flight: true,
            ..self.clone()
        })
    }

    /// Builds the next state from a cycle outcome. The caller swaps the
    /// whole record in at once.
    pub fn applied(&self, outcome: Result<Sample, SourceError>, now: &str) -> Self {
        match outcome {
            Ok(sample) => Self {
                readings: sample.readings,
                waveform: sample.waveform.unwrap_or_else(|| self.waveform.clone()),
                emotion: Some(sample.emotion),
                last_updated: Some(now.to_string()),
                loading: false,
                error: None,
                consecutive_failures: 0,
                in_flight: false,
            },
            Err(e) => Self {
                loading: false,
                error: Some(e.to_string()),
                consecutive_failures: self.consecutive_failures.saturating_add(1),
                in_flight: false,
                ..self.clone()
            },
        }
    }

    /// Clears the error banner without touching data.
    pub fn dismissed(&self) -> Self {
        Self {
            error: None,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::WavePoint;

    fn sample(hr: i32, waveform: Option<Waveform>) -> Sample {
        Sample {
            readings: ReadingSet {
                heart_rate: hr,
                ..Default::default()
            },
            waveform,
            emotion: EmotionLog {
                emotion: "happy".into(),
                stress_level: "Low".into(),
            },
        }
    }

    #[test]
    fn success_replaces_everything() {
        let w = vec![WavePoint { time: 0, value: 1.0 }];
        let next = DashboardState::default().applied(Ok(sample(80, Some(w.clone()))), "12:00:00");
        assert_eq!(next.readings.heart_rate, 80);
        assert_eq!(next.waveform, w);
        assert_eq!(next.emotion.as_ref().unwrap().emotion, "happy");
        assert_eq!(next.last_updated.as_deref(), Some("12:00:00"));
        assert!(!next.loading);
        assert!(next.error.is_none());
    }

    #[test]
    fn failure_keeps_previous_readings() {
        let good = DashboardState::default().applied(Ok(sample(70, None)), "12:00:00");
        let failed = good.applied(
            Err(SourceError::Upstream("status 500".into())),
            "12:00:02",
        );
        assert_eq!(failed.readings, good.readings);
        assert_eq!(failed.waveform, good.waveform);
        assert_eq!(failed.emotion, good.emotion);
        assert_eq!(failed.last_updated.as_deref(), Some("12:00:00"));
        assert_eq!(failed.error.as_deref(), Some("HTTP error! status 500"));
        assert_eq!(failed.consecutive_failures, 1);

        let again = failed.applied(Err(SourceError::Server("offline".into())), "x");
        assert_eq!(again.consecutive_failures, 2);

        let recovered = again.applied(Ok(sample(75, None)), "12:00:06");
        assert!(recovered.error.is_none());
        assert_eq!(recovered.consecutive_failures, 0);
    }

    #[test]
    fn missing_waveform_keeps_current_chart() {
        let w = vec![WavePoint { time: 0, value: 3.0 }];
        let first = DashboardState::default().applied(Ok(sample(70, Some(w.clone()))), "a");
        let second = first.applied(Ok(sample(71, None)), "b");
        assert_eq!(second.waveform, w);
    }

    #[test]
    fn only_one_cycle_runs_at_a_time() {
        let idle = DashboardState::default();
        let running = idle.started().unwrap();
        assert!(running.in_flight);
        // a retry while the loop's cycle is pending is refused
        assert!(running.started().is_none());

        let failed = running.applied(Err(SourceError::Server("x".into())), "a");
        assert!(!failed.in_flight);
        let retried = failed.started().unwrap();
        let done = retried.applied(Ok(sample(90, None)), "b");
        assert!(!done.in_flight);
        assert_eq!(done.readings.heart_rate, 90);
    }

    #[test]
    fn dismiss_only_clears_error() {
        let failed = DashboardState::default().applied(Err(SourceError::Server("x".into())), "a");
        let dismissed = failed.dismissed();
        assert!(dismissed.error.is_none());
        assert_eq!(dismissed.consecutive_failures, 1);
    }
}
