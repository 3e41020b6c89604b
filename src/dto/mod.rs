//! Wire payloads shared by the search endpoint and its client.

pub mod api;
