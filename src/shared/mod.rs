pub mod camera;
pub mod chat;
pub mod error;
pub mod readings;
pub mod refresh;
pub mod state;
pub mod status;
pub mod synth;
pub mod types;
