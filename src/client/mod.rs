//! Async client for the search endpoint.
//!
//! Maps every outcome of a call, from transport failures to error bodies,
//! onto one [`ClientError`] or a complete [`SearchResponse`].

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::StatusCode;
use url::{Url, form_urlencoded};

use crate::domain::search::{SearchError, SearchRequest, SearchResponse};
use crate::domain::user::User;
use crate::dto::api::{ACCESS_TOKEN_HEADER, SearchErrorResponse};

pub mod errors;

pub use errors::ClientError;

/// Do not wrap `SearchClient` in an [`std::sync::Arc`]:
/// [`reqwest::Client`] already shares its connection pool internally.
#[derive(Clone, Debug)]
pub struct SearchClient {
    url: Url,
    access_token: String,
    http: reqwest::Client,
}

impl SearchClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

    /// Creates a client for the endpoint at `url`, e.g.
    /// `http://127.0.0.1:8080/api/v1/users`. A malformed URL is rejected here
    /// as [`ClientError::Unknown`].
    pub fn new(
        url: impl AsRef<str>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::with_timeout(url, access_token, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        url: impl AsRef<str>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let url = Url::parse(url.as_ref()).map_err(|err| ClientError::Unknown(err.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Unknown(error_chain(&err)))?;

        Ok(Self {
            url,
            access_token: access_token.into(),
            http,
        })
    }

    pub async fn find_users(&self, request: &SearchRequest) -> Result<SearchResponse, ClientError> {
        if request.limit <= 0 {
            return Err(ClientError::LimitBelowZero);
        }
        if request.offset < 0 {
            return Err(ClientError::OffsetBelowZero);
        }

        let query = encode_query(request);
        let transport_error = |err: reqwest::Error| {
            if err.is_timeout() {
                ClientError::Timeout(query.clone())
            } else {
                ClientError::Unknown(error_chain(&err))
            }
        };

        let response = self
            .http
            .get(self.request_url(&query))
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        match status {
            StatusCode::UNAUTHORIZED => Err(ClientError::BadAccessToken),
            StatusCode::BAD_REQUEST => Err(classify_bad_request(&body, request)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound),
            status if status.is_success() => {
                let users: Vec<User> = serde_json::from_str(&body)
                    .map_err(|err| ClientError::InvalidResponse(err.to_string()))?;
                Ok(SearchResponse::new(users, request.limit))
            }
            status => Err(ClientError::ServerFatal {
                status: status.as_u16(),
                body,
            }),
        }
    }

    /// Endpoint URL with the search parameters appended to any query it
    /// already carries.
    fn request_url(&self, query: &str) -> Url {
        let mut url = self.url.clone();
        match self.url.query().filter(|existing| !existing.is_empty()) {
            Some(existing) => url.set_query(Some(format!("{existing}&{query}").as_str())),
            None => url.set_query(Some(query)),
        }
        url
    }
}

/// Encodes the request with keys in alphabetical order.
fn encode_query(request: &SearchRequest) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("limit", &request.limit.to_string())
        .append_pair("offset", &request.offset.to_string())
        .append_pair("order_by", &request.order_by.to_string())
        .append_pair("order_field", &request.order_field)
        .append_pair("query", &request.query)
        .finish()
}

/// Turns a 400 body into an error naming the offending request parameter.
fn classify_bad_request(body: &str, request: &SearchRequest) -> ClientError {
    let response: SearchErrorResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(err) => return ClientError::InvalidErrorBody(err.to_string()),
    };

    let (param, value) = match SearchError::from_message(&response.error) {
        Some(SearchError::BadOrderField) => ("order_field", request.order_field.clone()),
        Some(SearchError::BadOrderBy) => ("order_by", request.order_by.to_string()),
        Some(SearchError::BadLimit | SearchError::LimitBelowZero) => {
            ("limit", request.limit.to_string())
        }
        Some(SearchError::BadOffset | SearchError::OffsetBelowZero) => {
            ("offset", request.offset.to_string())
        }
        None => return ClientError::UnknownBadRequest(response.error),
    };

    ClientError::BadRequest { param, value }
}

fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
