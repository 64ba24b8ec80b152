//! Synthetic vital signs for the simulated dashboard.
//!
//! Parameters are random, the waveform shape is fixed: a sum of sines that
//! roughly mimics the P wave, QRS complex and T wave of an ECG trace.

use std::f64::consts::PI;

use rand::Rng;

use crate::shared::types::{EmotionLog, ReadingSet, WavePoint, Waveform};

pub const WAVEFORM_POINTS: usize = 300;
pub const BASELINE: f64 = 50.0;
pub const NOISE_AMPLITUDE: f64 = 2.5;

const EMOTIONS: [&str; 2] = ["happy", "neutral"];

#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticTick {
    pub readings: ReadingSet,
    pub emotion: EmotionLog,
    pub waveform: Waveform,
}

pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> SyntheticTick {
    let readings = ReadingSet {
        heart_rate: rng.gen_range(65..=90),
        spo2: rng.gen_range(96..=99),
        // whole tenths in [36.4, 37.2)
        body_temp: rng.gen_range(364..372) as f64 / 10.0,
        env_temp: rng.gen_range(20..=25),
        humidity: rng.gen_range(40..=60),
        ecg: Vec::new(),
    };
    let emotion = EmotionLog {
        emotion: EMOTIONS[rng.gen_range(0..EMOTIONS.len())].to_string(),
        // always low in simulation, whatever the emotion
        stress_level: "Low".to_string(),
    };
    let waveform = ecg_waveform(readings.heart_rate, rng);
    SyntheticTick {
        readings,
        emotion,
        waveform,
    }
}

/// Noise-free amplitude of point `i` for the given heart rate.
pub fn ecg_sample(i: usize, heart_rate: i32) -> f64 {
    let base_frequency = heart_rate as f64 / 60.0;
    let t = (i as f64 / WAVEFORM_POINTS as f64) * (2.0 * PI) * base_frequency * 2.0;
    let p_wave = 5.0 * (t * 5.0 - 0.5).sin();
    let window = (-10.0 * ((t % (2.0 * PI)) - 1.0).powi(2)).exp();
    let qrs = 60.0 * t.sin() * window;
    let t_wave = 15.0 * (t * 2.0 + 1.5).sin();
    BASELINE + p_wave + qrs + t_wave
}

pub fn ecg_waveform<R: Rng + ?Sized>(heart_rate: i32, rng: &mut R) -> Waveform {
    (0..WAVEFORM_POINTS)
        .map(|i| {
            let noise = rng.gen_range(-NOISE_AMPLITUDE..NOISE_AMPLITUDE);
            WavePoint {
                time: i,
                value: ecg_sample(i, heart_rate) + noise,
            }
        })
        .collect()
}
