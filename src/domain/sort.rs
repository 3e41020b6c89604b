//! Ordering of filtered users.
//!
//! One comparator is selected by a `(field, direction)` tag instead of a type
//! per combination.

use std::cmp::Ordering;

use crate::domain::search::SearchError;
use crate::domain::user::User;

/// Field a page can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Id,
    Age,
    Name,
}

impl SortField {
    /// Parses the `order_field` parameter. The empty string selects `Name`.
    pub fn parse(value: &str) -> Result<Self, SearchError> {
        match value {
            "Id" => Ok(Self::Id),
            "Age" => Ok(Self::Age),
            "Name" | "" => Ok(Self::Name),
            _ => Err(SearchError::BadOrderField),
        }
    }

    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Age => a.age.cmp(&b.age),
            Self::Name => a.name.cmp(&b.name),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Resolved ordering for a search request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserOrder {
    /// Keep the filter's scan order.
    AsIs,
    By(SortField, SortDirection),
}

impl UserOrder {
    /// Resolves `order_field` and `order_by`.
    ///
    /// The field is checked first, so an unknown field wins over an
    /// out-of-range direction.
    pub fn parse(order_field: &str, order_by: i64) -> Result<Self, SearchError> {
        let field = SortField::parse(order_field)?;
        match order_by {
            1 => Ok(Self::By(field, SortDirection::Asc)),
            -1 => Ok(Self::By(field, SortDirection::Desc)),
            0 => Ok(Self::AsIs),
            _ => Err(SearchError::BadOrderBy),
        }
    }

    pub fn apply(self, users: &mut [User]) {
        if let Self::By(field, direction) = self {
            users.sort_unstable_by(|a, b| match direction {
                SortDirection::Asc => field.compare(a, b),
                SortDirection::Desc => field.compare(b, a),
            });
        }
    }
}
