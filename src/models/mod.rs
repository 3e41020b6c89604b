//! Configuration models of the server binary.

pub mod config;
