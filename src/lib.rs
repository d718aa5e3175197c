// src/lib.rs
pub mod api;
pub mod banner;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod runner;
pub mod views;
