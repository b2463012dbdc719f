pub mod api_client;
pub mod app;
pub mod configuration;
pub mod domain;
pub mod render;
pub mod telemetry;
