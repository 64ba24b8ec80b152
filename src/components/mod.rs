pub mod camera_panel;
pub mod chat_panel;
pub mod ecg_chart;
pub mod error_banner;
pub mod stat_card;

pub use camera_panel::CameraPanel;
pub use chat_panel::ChatPanel;
pub use ecg_chart::EcgChart;
pub use error_banner::ErrorBanner;
pub use stat_card::StatCard;
