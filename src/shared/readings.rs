use crate::shared::types::{waveform_from_samples, RawHealth, ReadingSet, Waveform};

/// Applies a polled row on top of the previous readings. A missing or null
/// field never overwrites the value already shown.
pub fn merge_readings(prev: &ReadingSet, raw: &RawHealth) -> ReadingSet {
    ReadingSet {
        heart_rate: whole(raw.heartrate, prev.heart_rate),
        spo2: whole(raw.spo2, prev.spo2),
        body_temp: raw.bodytemp.unwrap_or(prev.body_temp),
        env_temp: whole(raw.envtemp, prev.env_temp),
        humidity: whole(raw.humidity, prev.humidity),
        ecg: raw.ecg_data.clone().unwrap_or_else(|| prev.ecg.clone()),
    }
}

// Integer metrics are shown rounded to the nearest unit.
fn whole(incoming: Option<f64>, prev: i32) -> i32 {
    match incoming {
        Some(v) if v.is_finite() => v.round() as i32,
        _ => prev,
    }
}

/// Waveform for a polled row, or `None` when the row carries no ECG samples
/// and the current chart should stay.
pub fn waveform_from_raw(raw: &RawHealth) -> Option<Waveform> {
    raw.ecg_data.as_deref().map(waveform_from_samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prev() -> ReadingSet {
        ReadingSet {
            heart_rate: 70,
            spo2: 97,
            body_temp: 36.8,
            env_temp: 23,
            humidity: 50,
            ecg: vec![1.0, 2.0],
        }
    }

    #[test]
    fn null_heart_rate_keeps_previous_value() {
        let raw = RawHealth {
            heartrate: None,
            spo2: Some(95.0),
            ..Default::default()
        };
        let merged = merge_readings(&prev(), &raw);
        assert_eq!(merged.heart_rate, 70);
        assert_eq!(merged.spo2, 95);
        assert_eq!(merged.ecg, vec![1.0, 2.0]);
    }

    #[test]
    fn empty_row_changes_nothing() {
        assert_eq!(merge_readings(&prev(), &RawHealth::default()), prev());
    }

    #[test]
    fn full_row_replaces_every_field() {
        let raw = RawHealth {
            heartrate: Some(88.0),
            spo2: Some(92.0),
            bodytemp: Some(37.9),
            envtemp: Some(19.0),
            humidity: Some(61.0),
            ecg_data: Some(vec![5.0]),
        };
        let merged = merge_readings(&prev(), &raw);
        assert_eq!(
            merged,
            ReadingSet {
                heart_rate: 88,
                spo2: 92,
                body_temp: 37.9,
                env_temp: 19,
                humidity: 61,
                ecg: vec![5.0],
            }
        );
    }

    #[test]
    fn float_valued_row_is_rounded_into_integer_metrics() {
        let raw = RawHealth {
            heartrate: Some(72.0),
            spo2: Some(96.6),
            envtemp: Some(21.4),
            humidity: Some(55.5),
            ..Default::default()
        };
        let merged = merge_readings(&prev(), &raw);
        assert_eq!(merged.heart_rate, 72);
        assert_eq!(merged.spo2, 97);
        assert_eq!(merged.env_temp, 21);
        assert_eq!(merged.humidity, 56);
    }

    #[test]
    fn non_finite_value_keeps_previous() {
        let raw = RawHealth {
            heartrate: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(merge_readings(&prev(), &raw).heart_rate, 70);
    }

    #[test]
    fn waveform_only_when_samples_present() {
        assert!(waveform_from_raw(&RawHealth::default()).is_none());
        let raw = RawHealth {
            ecg_data: Some(vec![0.5, 0.7]),
            ..Default::default()
        };
        let w = waveform_from_raw(&raw).unwrap();
        assert_eq!(w.len(), 2);
        assert_eq!(w[1].time, 1);
    }
}
