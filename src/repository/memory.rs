use crate::domain::user::{User, UserRecord};
use crate::repository::errors::RepositoryResult;
use crate::repository::{UserReader, UserSearchQuery, scan_matches};

/// Dataset held in memory, scanned exactly like the CSV file.
#[derive(Clone, Debug, Default)]
pub struct InMemoryUserRepository {
    records: Vec<UserRecord>,
}

impl InMemoryUserRepository {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self { records }
    }
}

impl UserReader for InMemoryUserRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.records.iter().cloned().map(User::from).collect())
    }

    fn search_users(&self, query: &UserSearchQuery) -> RepositoryResult<Vec<User>> {
        scan_matches(self.records.iter().cloned().map(Ok), query)
    }
}
