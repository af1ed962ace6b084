pub mod api;
pub mod config;
pub mod error;
pub mod jobs;
pub mod loader;
pub mod pricing;
