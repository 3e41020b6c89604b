use crate::domain::user::{User, UserRecord};
use crate::repository::errors::RepositoryResult;

pub mod dataset;
pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod tokens;

pub use dataset::CsvUserRepository;
pub use memory::InMemoryUserRepository;
pub use tokens::StaticTokenStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchQuery {
    pub search: String,
    /// Stop scanning once this many matches were collected.
    pub limit: Option<usize>,
}

impl UserSearchQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

pub trait UserReader {
    /// Loads every record in storage order.
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
    /// Returns matching records in storage order, at most `query.limit` of them.
    fn search_users(&self, query: &UserSearchQuery) -> RepositoryResult<Vec<User>>;
}

pub trait AccessTokenReader {
    fn is_token_valid(&self, token: &str) -> bool;
}

/// Single pass over `rows` collecting matches until the budget is spent.
///
/// No row is pulled from the source once the budget reaches zero, so rows
/// past that point are never decoded. The first row error aborts the scan.
pub fn scan_matches<I>(rows: I, query: &UserSearchQuery) -> RepositoryResult<Vec<User>>
where
    I: IntoIterator<Item = RepositoryResult<UserRecord>>,
{
    let mut budget = query.limit.unwrap_or(usize::MAX);
    let mut rows = rows.into_iter();
    let mut users = Vec::new();

    while budget > 0 {
        let Some(row) = rows.next() else {
            break;
        };
        let record = row?;
        if record.matches(&query.search) {
            users.push(User::from(record));
            budget -= 1;
        }
    }

    Ok(users)
}
