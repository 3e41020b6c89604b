//! Search request and response types plus the sentinel errors both ends of the
//! wire agree on.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::user::User;

/// Validation and ordering failures reported to the caller with HTTP 400.
///
/// The display strings are the sentinel messages sent in the `Error` field of
/// the response body; [`SearchError::from_message`] maps them back.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("limit must be an integer")]
    BadLimit,
    #[error("limit must be > 0")]
    LimitBelowZero,
    #[error("offset must be an integer")]
    BadOffset,
    #[error("offset must be >= 0")]
    OffsetBelowZero,
    #[error("OrderBy invalid")]
    BadOrderBy,
    #[error("OrderField invalid")]
    BadOrderField,
}

impl SearchError {
    const ALL: [SearchError; 6] = [
        SearchError::BadLimit,
        SearchError::LimitBelowZero,
        SearchError::BadOffset,
        SearchError::OffsetBelowZero,
        SearchError::BadOrderBy,
        SearchError::BadOrderField,
    ];

    /// Recognizes a sentinel message received on the wire.
    pub fn from_message(message: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|err| err.to_string() == message)
    }
}

/// Typed search request.
///
/// Built by the server after validation, or directly by client callers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub limit: i64,
    pub offset: i64,
    pub query: String,
    /// One of `Id`, `Age`, `Name` or empty (treated as `Name`).
    pub order_field: String,
    /// `1` ascending, `-1` descending, `0` keeps scan order.
    pub order_by: i64,
}

impl SearchRequest {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn order(mut self, order_field: impl Into<String>, order_by: i64) -> Self {
        self.order_field = order_field.into();
        self.order_by = order_by;
        self
    }

    /// Number of records to skip before the returned page starts.
    pub fn skip(&self) -> usize {
        clamp_to_usize(self.offset)
    }

    /// Maximum number of matching records the filter collects (`limit + offset`).
    pub fn scan_budget(&self) -> usize {
        clamp_to_usize(self.limit).saturating_add(self.skip())
    }
}

/// Negative values count as zero, values past the address space saturate.
fn clamp_to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Page of users as observed by the client.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub users: Vec<User>,
    /// Set when the page is full, meaning more records may follow.
    pub next_page: bool,
}

impl SearchResponse {
    pub fn new(users: Vec<User>, limit: i64) -> Self {
        let next_page = usize::try_from(limit).is_ok_and(|limit| users.len() == limit);
        Self { users, next_page }
    }
}
