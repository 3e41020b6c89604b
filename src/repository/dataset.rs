//! CSV-backed dataset of person records.
//!
//! The file is opened and decoded on every call, one row at a time, so a
//! search stops reading as soon as its budget is spent.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::domain::user::{User, UserRecord};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{UserReader, UserSearchQuery, scan_matches};

/// Reads users from a CSV file with the header
/// `id,first_name,last_name,age,about,gender`.
#[derive(Clone, Debug)]
pub struct CsvUserRepository {
    path: PathBuf,
}

impl CsvUserRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> RepositoryResult<csv::Reader<File>> {
        let file = File::open(&self.path).map_err(|source| RepositoryError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(csv::Reader::from_reader(file))
    }
}

impl UserReader for CsvUserRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.search_users(&UserSearchQuery::default())
    }

    fn search_users(&self, query: &UserSearchQuery) -> RepositoryResult<Vec<User>> {
        let mut reader = self.open()?;
        let rows = reader
            .deserialize::<UserRecord>()
            .map(|row| row.map_err(RepositoryError::from));
        scan_matches(rows, query)
    }
}
