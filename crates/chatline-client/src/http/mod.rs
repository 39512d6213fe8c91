//! HTTP client for the remote chat service.
//!
//! Implements the `ChatBackend` trait against the service's REST API:
//! `GET /health` for the startup probe and `POST /api/v1/chat/` for
//! exchanges, plus the informational `GET /` and model listing.

mod api;
mod client;
mod config;


pub use client::HttpBackend;
pub use config::HttpConfig;
