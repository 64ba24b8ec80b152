#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    HeartRate,
    SpO2,
    BodyTemp,
    EnvTemp,
    Humidity,
}

impl MetricKind {
    pub const ALL: [MetricKind; 5] = [
        MetricKind::HeartRate,
        MetricKind::SpO2,
        MetricKind::BodyTemp,
        MetricKind::EnvTemp,
        MetricKind::Humidity,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MetricKind::HeartRate => "Heart Rate",
            MetricKind::SpO2 => "SpO2 Level",
            MetricKind::BodyTemp => "Body Temp",
            MetricKind::EnvTemp => "Env Temp",
            MetricKind::Humidity => "Humidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::HeartRate => "BPM",
            MetricKind::SpO2 | MetricKind::Humidity => "%",
            MetricKind::BodyTemp | MetricKind::EnvTemp => "°C",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MetricKind::HeartRate => "♥",
            MetricKind::SpO2 => "∿",
            MetricKind::BodyTemp | MetricKind::EnvTemp => "🌡",
            MetricKind::Humidity => "💧",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
}

impl Tone {
    pub fn text_class(self) -> &'static str {
        match self {
            Tone::Green => "text-green-400",
            Tone::Yellow => "text-yellow-400",
            Tone::Red => "text-red-400",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub tone: Tone,
    pub label: &'static str,
}

/// Qualitative color and label for a reading. Thresholds are inclusive.
pub fn classify(value: f64, kind: MetricKind) -> Status {
    match kind {
        MetricKind::HeartRate => {
            if (60.0..=100.0).contains(&value) {
                Status { tone: Tone::Green, label: "Stable" }
            } else {
                let label = if value < 60.0 { "Low" } else { "High" };
                Status { tone: Tone::Yellow, label }
            }
        }
        MetricKind::SpO2 => {
            if value >= 95.0 {
                Status { tone: Tone::Green, label: "Up" }
            } else if value >= 90.0 {
                Status { tone: Tone::Yellow, label: "Low" }
            } else {
                Status { tone: Tone::Red, label: "Low" }
            }
        }
        MetricKind::BodyTemp => {
            if (36.1..=37.2).contains(&value) {
                Status { tone: Tone::Green, label: "Stable" }
            } else {
                let label = if value < 36.1 { "Low" } else { "High" };
                Status { tone: Tone::Yellow, label }
            }
        }
        // fixed labels, never computed
        MetricKind::EnvTemp => Status { tone: Tone::Green, label: "Down" },
        MetricKind::Humidity => Status { tone: Tone::Green, label: "Stable" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_rate_in_range_is_stable() {
        for v in 60..=100 {
            let s = classify(v as f64, MetricKind::HeartRate);
            assert_eq!(s, Status { tone: Tone::Green, label: "Stable" }, "v={v}");
        }
    }

    #[test]
    fn heart_rate_out_of_range_is_yellow() {
        assert_eq!(
            classify(59.0, MetricKind::HeartRate),
            Status { tone: Tone::Yellow, label: "Low" }
        );
        assert_eq!(
            classify(101.0, MetricKind::HeartRate),
            Status { tone: Tone::Yellow, label: "High" }
        );
    }

    #[test]
    fn spo2_bands() {
        assert_eq!(classify(95.0, MetricKind::SpO2).tone, Tone::Green);
        assert_eq!(classify(99.0, MetricKind::SpO2).label, "Up");
        assert_eq!(
            classify(94.0, MetricKind::SpO2),
            Status { tone: Tone::Yellow, label: "Low" }
        );
        assert_eq!(classify(90.0, MetricKind::SpO2).tone, Tone::Yellow);
        assert_eq!(
            classify(89.0, MetricKind::SpO2),
            Status { tone: Tone::Red, label: "Low" }
        );
    }

    #[test]
    fn body_temp_bounds_are_inclusive() {
        assert_eq!(classify(36.1, MetricKind::BodyTemp).label, "Stable");
        assert_eq!(classify(37.2, MetricKind::BodyTemp).label, "Stable");
        assert_eq!(
            classify(36.0, MetricKind::BodyTemp),
            Status { tone: Tone::Yellow, label: "Low" }
        );
        assert_eq!(
            classify(37.3, MetricKind::BodyTemp),
            Status { tone: Tone::Yellow, label: "High" }
        );
    }

    #[test]
    fn environment_metrics_have_fixed_labels() {
        for v in [-10.0, 0.0, 22.0, 80.0] {
            assert_eq!(
                classify(v, MetricKind::EnvTemp),
                Status { tone: Tone::Green, label: "Down" }
            );
            assert_eq!(
                classify(v, MetricKind::Humidity),
                Status { tone: Tone::Green, label: "Stable" }
            );
        }
    }

    #[test]
    fn tones_map_to_text_classes() {
        assert_eq!(Tone::Green.text_class(), "text-green-400");
        assert_eq!(Tone::Red.text_class(), "text-red-400");
    }
}
