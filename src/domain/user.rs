use serde::{Deserialize, Serialize};

/// Person record as exposed on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    #[serde(rename = "ID")]
    pub id: i32,
    /// First and last name joined by a single space.
    pub name: String,
    pub age: i32,
    pub about: String,
    pub gender: String,
}

/// Row as stored in the dataset, before the name parts are joined.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub age: i32,
    pub about: String,
    pub gender: String,
}

impl UserRecord {
    /// Case-sensitive substring match against first name, last name or about.
    ///
    /// The name parts are checked separately, so a query spanning the space
    /// between them does not match.
    pub fn matches(&self, query: &str) -> bool {
        self.first_name.contains(query)
            || self.last_name.contains(query)
            || self.about.contains(query)
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: format!("{} {}", record.first_name, record.last_name),
            age: record.age,
            about: record.about,
            gender: record.gender,
        }
    }
}
