// src/api/handlers/mod.rs
mod assets;
mod experiment;
mod health;
mod pages;
pub mod ws;

pub use assets::static_file_handler;
pub use experiment::run_experiment;
pub use health::health_check;
pub use pages::{experiment_page, home, result_page};
pub use ws::{ProgressBroker, progress_feed};
