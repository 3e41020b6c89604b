//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the search server.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// CSV file the users are read from on every request.
    pub dataset_path: String,
    /// Accepted values of the `AccessToken` header.
    pub access_tokens: Vec<String>,
}
