//! HTTP handlers.

pub mod api;
