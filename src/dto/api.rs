use serde::{Deserialize, Serialize};

/// Header carrying the caller's access token.
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Body of every non-200 response of the search endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

impl SearchErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
