//! HTTP API: configuration, routing, and request/response mapping for the
//! forecasting service.

pub mod app;
pub mod config;
pub mod middleware;
