pub mod app_state;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod model;
pub mod predict;
pub mod preprocessing;
pub mod routes;
pub mod shutdown;
pub mod telemetry;
