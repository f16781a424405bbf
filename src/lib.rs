pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod games;
pub mod health;
pub mod openapi;
pub mod router;
pub mod store;
pub mod telemetry;
