use crate::shared::status::MetricKind;

#[cfg(all(feature = "web"))]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

#[cfg(all(feature = "web"))]
fn local_parts() -> (i32, i32, i32) {
    let d = js_sys::Date::new_0();
    (
        d.get_hours() as i32,
        d.get_minutes() as i32,
        d.get_seconds() as i32,
    )
}

/// Local wall clock as `HH:MM:SS`, for the "last updated" footer.
#[cfg(all(feature = "web"))]
pub fn clock_now() -> String {
    let (h, m, s) = local_parts();
    format!("{}:{}:{}", pad2(h), pad2(m), pad2(s))
}

/// Local wall clock as `HH:MM`, for chat timestamps.
#[cfg(all(feature = "web"))]
pub fn clock_now_short() -> String {
    let (h, m, _) = local_parts();
    format!("{}:{}", pad2(h), pad2(m))
}

#[cfg(not(all(feature = "web")))]
pub fn clock_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(not(all(feature = "web")))]
pub fn clock_now_short() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}

/// Body temperature keeps one decimal, everything else is a whole number.
pub fn format_metric(value: f64, kind: MetricKind) -> String {
    match kind {
        MetricKind::BodyTemp => format!("{:.1}", value),
        _ => format!("{}", value.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_format_by_kind() {
        assert_eq!(format_metric(36.5, MetricKind::BodyTemp), "36.5");
        assert_eq!(format_metric(37.0, MetricKind::BodyTemp), "37.0");
        assert_eq!(format_metric(72.0, MetricKind::HeartRate), "72");
        assert_eq!(format_metric(45.0, MetricKind::Humidity), "45");
    }

    #[test]
    fn clock_strings_have_expected_shape() {
        let long = clock_now();
        assert_eq!(long.len(), 8);
        assert_eq!(long.matches(':').count(), 2);
        assert_eq!(clock_now_short().len(), 5);
    }
}
