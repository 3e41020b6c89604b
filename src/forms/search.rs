use crate::domain::search::{SearchError, SearchRequest};

/// Query string of the search endpoint, exactly as received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchForm {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub query: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
}

impl SearchForm {
    /// Collects the known parameters from decoded query pairs.
    ///
    /// The first value of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "limit" => &mut form.limit,
                "offset" => &mut form.offset,
                "query" => &mut form.query,
                "order_field" => &mut form.order_field,
                "order_by" => &mut form.order_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        form
    }
}

fn parse_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.parse().ok())
}

impl TryFrom<SearchForm> for SearchRequest {
    type Error = SearchError;

    /// Checks `limit`, then `offset`, then that `order_by` is an integer.
    ///
    /// The range of `order_by` and the value of `order_field` are checked by
    /// the sorter.
    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        let limit = parse_int(form.limit.as_deref()).ok_or(SearchError::BadLimit)?;
        if limit < 1 {
            return Err(SearchError::LimitBelowZero);
        }

        let offset = parse_int(form.offset.as_deref()).ok_or(SearchError::BadOffset)?;
        if offset < 0 {
            return Err(SearchError::OffsetBelowZero);
        }

        let order_by = parse_int(form.order_by.as_deref()).ok_or(SearchError::BadOrderBy)?;

        Ok(SearchRequest {
            limit,
            offset,
            query: form.query.unwrap_or_default(),
            order_field: form.order_field.unwrap_or_default(),
            order_by,
        })
    }
}
