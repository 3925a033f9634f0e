pub mod api;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod telemetry;
