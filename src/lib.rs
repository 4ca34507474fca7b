pub mod api;
pub mod clock;
pub mod config;
pub mod content;
pub mod dashboard;
pub mod error;
pub mod explainer;
pub mod flashcards;
pub mod focus;
pub mod homepage;
pub mod navigation;
pub mod practice;
pub mod progress;
pub mod scheduler;
pub mod session;
pub mod textgen;
pub mod video;

pub use api::{configure, AppState};
pub use config::Config;
