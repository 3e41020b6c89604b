//! Domain types shared by the search server and its client.

pub mod search;
pub mod sort;
pub mod user;
