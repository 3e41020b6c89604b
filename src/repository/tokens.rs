use std::collections::HashSet;

use crate::repository::AccessTokenReader;

/// Fixed set of accepted `AccessToken` header values.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenStore {
    tokens: HashSet<String>,
}

impl StaticTokenStore {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }
}

impl AccessTokenReader for StaticTokenStore {
    fn is_token_valid(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}
