use thiserror::Error;

/// Every way [`crate::client::SearchClient::find_users`] can fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("limit must be > 0")]
    LimitBelowZero,

    #[error("offset must be >= 0")]
    OffsetBelowZero,

    /// The request did not complete in time; carries the encoded query.
    #[error("timeout for {0}")]
    Timeout(String),

    /// Transport failure other than a timeout (bad URL, DNS, refused connection).
    #[error("unknown error {0}")]
    Unknown(String),

    #[error("bad AccessToken")]
    BadAccessToken,

    /// The server rejected a request parameter with a known sentinel.
    #[error("request invalid: {param}={value}")]
    BadRequest { param: &'static str, value: String },

    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    #[error("cant unpack error json: {0}")]
    InvalidErrorBody(String),

    #[error("users not found")]
    NotFound,

    #[error("SearchServer fatal error. Body: {body}")]
    ServerFatal { status: u16, body: String },

    #[error("cant unpack result json: {0}")]
    InvalidResponse(String),
}
