//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{AccessTokenReader, UserReader, UserSearchQuery};

mock! {
    pub Repository {}

    impl UserReader for Repository {
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
        fn search_users(&self, query: &UserSearchQuery) -> RepositoryResult<Vec<User>>;
    }

    impl AccessTokenReader for Repository {
        fn is_token_valid(&self, token: &str) -> bool;
    }
}
