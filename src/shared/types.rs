use serde::{Deserialize, Serialize};

use crate::shared::status::MetricKind;

/// The five vital metrics plus raw ECG samples for one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingSet {
    #[serde(rename = "heartRate")]
    pub heart_rate: i32,
    #[serde(rename = "spO2")]
    pub spo2: i32,
    #[serde(rename = "bodyTemp")]
    pub body_temp: f64,
    #[serde(rename = "envTemp")]
    pub env_temp: i32,
    pub humidity: i32,
    pub ecg: Vec<f64>,
}

impl Default for ReadingSet {
    fn default() -> Self {
        Self {
            heart_rate: 72,
            spo2: 98,
            body_temp: 36.5,
            env_temp: 22,
            humidity: 45,
            ecg: Vec::new(),
        }
    }
}

impl ReadingSet {
    pub fn metric(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::HeartRate => self.heart_rate as f64,
            MetricKind::SpO2 => self.spo2 as f64,
            MetricKind::BodyTemp => self.body_temp,
            MetricKind::EnvTemp => self.env_temp as f64,
            MetricKind::Humidity => self.humidity as f64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavePoint {
    pub time: usize,
    pub value: f64,
}

pub type Waveform = Vec<WavePoint>;

/// Turns raw samples into chart points indexed from zero.
pub fn waveform_from_samples(samples: &[f64]) -> Waveform {
    samples
        .iter()
        .enumerate()
        .map(|(time, &value)| WavePoint { time, value })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionLog {
    pub emotion: String,
    pub stress_level: String,
}

/// One row of `/api/health-data`. Every field may be missing or null, and
/// any JSON number is accepted (`72` and `72.0` alike).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHealth {
    #[serde(default)]
    pub heartrate: Option<f64>,
    #[serde(default)]
    pub spo2: Option<f64>,
    #[serde(default)]
    pub bodytemp: Option<f64>,
    #[serde(default)]
    pub envtemp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub ecg_data: Option<Vec<f64>>,
}

/// Result of one successful live poll cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSampleDto {
    pub health: Option<RawHealth>,
    pub emotion: EmotionLog,
}

/// Body of `POST /api/chat`.
#[cfg(feature = "server")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequestDto {
    pub message: String,
    #[serde(rename = "healthData")]
    pub health_data: ReadingSet,
}

#[cfg(feature = "server")]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReplyDto {
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reading_set_uses_camel_case_on_the_wire() {
        let v = serde_json::to_value(ReadingSet::default()).unwrap();
        assert_eq!(v["heartRate"], json!(72));
        assert_eq!(v["spO2"], json!(98));
        assert_eq!(v["bodyTemp"], json!(36.5));
        assert_eq!(v["envTemp"], json!(22));
        assert_eq!(v["ecg"], json!([]));
    }

    #[test]
    fn metric_picks_the_matching_field() {
        let r = ReadingSet::default();
        assert_eq!(r.metric(MetricKind::HeartRate), 72.0);
        assert_eq!(r.metric(MetricKind::BodyTemp), 36.5);
        assert_eq!(r.metric(MetricKind::Humidity), 45.0);
    }

    #[test]
    fn raw_health_accepts_nulls_and_missing_fields() {
        let raw: RawHealth =
            serde_json::from_value(json!({ "heartrate": null, "spo2": 97 })).unwrap();
        assert_eq!(raw.heartrate, None);
        assert_eq!(raw.spo2, Some(97.0));
        assert_eq!(raw.ecg_data, None);
    }

    #[test]
    fn raw_health_accepts_float_valued_counts() {
        let raw: RawHealth =
            serde_json::from_value(json!({ "heartrate": 72.0, "humidity": 55.3, "envtemp": 21 }))
                .unwrap();
        assert_eq!(raw.heartrate, Some(72.0));
        assert_eq!(raw.humidity, Some(55.3));
        assert_eq!(raw.envtemp, Some(21.0));
    }

    #[test]
    fn waveform_points_are_indexed_from_zero() {
        let w = waveform_from_samples(&[1.0, 2.5, -3.0]);
        assert_eq!(w.len(), 3);
        assert_eq!(w[2], WavePoint { time: 2, value: -3.0 });
    }
}
