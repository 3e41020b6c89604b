//! Raw request parameters and their validation into typed requests.

pub mod search;
