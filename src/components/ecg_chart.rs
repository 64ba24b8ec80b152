use dioxus::prelude::*;

use crate::shared::types::WavePoint;

/// Fixed vertical domain of the trace.
pub const Y_MIN: f64 = -50.0;
pub const Y_MAX: f64 = 150.0;

/// SVG path through the points, x spread over `width`, y mapped from
/// `[Y_MIN, Y_MAX]` onto `[height, 0]`. Out-of-domain values are clamped.
pub fn trace_path(points: &[WavePoint], width: f64, height: f64) -> String {
    let last = points.iter().map(|p| p.time).max().unwrap_or(0).max(1) as f64;
    let mut d = String::with_capacity(points.len() * 16);
    for (i, p) in points.iter().enumerate() {
        let x = p.time as f64 / last * width;
        let v = p.value.clamp(Y_MIN, Y_MAX);
        let y = (Y_MAX - v) / (Y_MAX - Y_MIN) * height;
        let cmd = if i == 0 { 'M' } else { 'L' };
        d.push_str(&format!("{cmd} {x:.2} {y:.2} "));
    }
    d.trim_end().to_string()
}

#[allow(non_snake_case)]
#[component]
pub fn EcgChart(points: Vec<WavePoint>, loading: bool, heart_rate: i32) -> Element {
    let width = 600.0f64;
    let height = 192.0f64;
    let view_box = format!("0 0 {width} {height}");
    let d = trace_path(&points, width, height);

    rsx! {
        div { class: "bg-gray-800 rounded-lg p-4 sm:p-6 border border-gray-700",
            div { class: "flex flex-col sm:flex-row sm:items-center sm:justify-between mb-4 space-y-2 sm:space-y-0",
                h3 { class: "text-gray-400 text-sm font-medium", "ECG Signal" }
                div { class: "flex items-center space-x-2",
                    div { class: "w-2 h-2 bg-blue-400 rounded-full animate-pulse" }
                    span { class: "text-xs text-blue-400", "Live" }
                }
            }
            div { class: "h-32 sm:h-48 mb-4",
                if points.is_empty() {
                    div { class: "flex items-center justify-center h-full",
                        div { class: "text-gray-500 text-sm text-center",
                            if loading { "Loading ECG data..." } else { "No ECG data available" }
                        }
                    }
                } else {
                    svg { class: "block w-full h-full", view_box: "{view_box}", preserve_aspect_ratio: "none",
                        path { d: "{d}", fill: "none", stroke: "#60a5fa", stroke_width: "2", stroke_linejoin: "round" }
                    }
                }
            }
            div { class: "grid grid-cols-3 gap-2 sm:gap-4 text-xs sm:text-sm",
                div { class: "text-center",
                    div { class: "text-gray-400 mb-1", "BPM" }
                    div { class: "text-blue-400 font-semibold", "{heart_rate}" }
                }
                div { class: "text-center",
                    div { class: "text-gray-400 mb-1", "Rhythm" }
                    div { class: "text-green-400 font-semibold", "Normal" }
                }
                div { class: "text-center",
                    div { class: "text-gray-400 mb-1", "Status" }
                    div { class: "text-green-400 font-semibold", "Stable" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_waveform_has_empty_path() {
        assert_eq!(trace_path(&[], 100.0, 100.0), "");
    }

    #[test]
    fn domain_maps_onto_viewbox() {
        let pts = [
            WavePoint { time: 0, value: Y_MAX },
            WavePoint { time: 1, value: 50.0 },
            WavePoint { time: 2, value: Y_MIN },
        ];
        assert_eq!(
            trace_path(&pts, 200.0, 100.0),
            "M 0.00 0.00 L 100.00 50.00 L 200.00 100.00"
        );
    }

    #[test]
    fn out_of_domain_values_are_clamped() {
        let pts = [
            WavePoint { time: 0, value: 500.0 },
            WavePoint { time: 1, value: -500.0 },
        ];
        assert_eq!(trace_path(&pts, 10.0, 10.0), "M 0.00 0.00 L 10.00 10.00");
    }
}
