//! The search pipeline: token check, validation, filter, sort, paginate.

use crate::domain::search::SearchRequest;
use crate::domain::sort::UserOrder;
use crate::domain::user::User;
use crate::forms::search::SearchForm;
use crate::pagination::page_from_offset;
use crate::repository::{AccessTokenReader, UserReader, UserSearchQuery};
use crate::services::{ServiceError, ServiceResult};

/// Runs one search request against the dataset.
///
/// Stages run in a fixed order and the first failure wins, so a request that
/// is wrong in several ways always reports the same error.
pub fn search_users<R, T>(
    repo: &R,
    tokens: &T,
    access_token: Option<&str>,
    form: SearchForm,
) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
    T: AccessTokenReader + ?Sized,
{
    match access_token {
        Some(token) if tokens.is_token_valid(token) => {}
        _ => {
            log::warn!("Rejected search request with AccessToken {access_token:?}");
            return Err(ServiceError::Unauthorized);
        }
    }

    let request = SearchRequest::try_from(form).map_err(|err| {
        log::info!("Invalid search parameters: {err}");
        err
    })?;

    find_page(repo, &request)
}

/// Filter, sort and paginate an already validated request.
pub fn find_page<R>(repo: &R, request: &SearchRequest) -> ServiceResult<Vec<User>>
where
    R: UserReader + ?Sized,
{
    let query = UserSearchQuery::new(request.query.as_str()).limit(request.scan_budget());
    let mut users = repo.search_users(&query).map_err(|err| {
        log::error!("Failed to search users: {err}");
        err
    })?;

    let order = UserOrder::parse(&request.order_field, request.order_by).map_err(|err| {
        log::info!(
            "Cannot order by field {:?} direction {}: {err}",
            request.order_field,
            request.order_by
        );
        err
    })?;
    order.apply(&mut users);

    let matched = users.len();
    page_from_offset(users, request.skip()).ok_or_else(|| {
        log::info!("Offset {} is past the {matched} matched users", request.offset);
        ServiceError::NotFound
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::SearchError;
    use crate::domain::user::UserRecord;
    use crate::repository::InMemoryUserRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    const TOKEN: &str = "2a54a886a8bbcc309ae4ffa75241cd6d";

    fn user(id: i32, name: &str, age: i32) -> User {
        User {
            id,
            name: name.to_string(),
            age,
            ..User::default()
        }
    }

    fn form(limit: &str, offset: &str, order_field: &str, order_by: &str) -> SearchForm {
        SearchForm {
            limit: Some(limit.to_string()),
            offset: Some(offset.to_string()),
            query: Some("Nulla".to_string()),
            order_field: Some(order_field.to_string()),
            order_by: Some(order_by.to_string()),
        }
    }

    fn tokens() -> MockRepository {
        let mut tokens = MockRepository::new();
        tokens
            .expect_is_token_valid()
            .returning(|token| token == TOKEN);
        tokens
    }

    fn nulla_matches() -> Vec<User> {
        vec![
            user(0, "Boyd Wolf", 22),
            user(2, "Brooks Aguilar", 25),
            user(19, "Bell Bauer", 26),
            user(21, "Johns Whitney", 26),
        ]
    }

    fn record(id: i32, first_name: &str, last_name: &str, age: i32, about: &str) -> UserRecord {
        UserRecord {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            age,
            about: about.to_string(),
            ..UserRecord::default()
        }
    }

    /// Four "Nulla" rows among rows that do not match, in storage order.
    fn dataset() -> InMemoryUserRepository {
        InMemoryUserRepository::new(vec![
            record(0, "Boyd", "Wolf", 22, "Nulla cillum enim"),
            record(1, "Hilda", "Mayer", 21, "Sit commodo consectetur"),
            record(2, "Brooks", "Aguilar", 25, "Velit Nulla ullamco"),
            record(3, "Everett", "Dillard", 27, "Sint eu id sint"),
            record(19, "Bell", "Bauer", 26, "Nulla voluptate nostrud"),
            record(21, "Johns", "Whitney", 26, "Elit sunt Nulla"),
        ])
    }

    #[test]
    fn rejects_missing_or_unknown_token_before_validation() {
        let mut repo = MockRepository::new();
        repo.expect_search_users().times(0);

        let missing = search_users(&repo, &tokens(), None, SearchForm::default());
        let wrong = search_users(&repo, &tokens(), Some("wrongToken"), SearchForm::default());

        assert!(matches!(missing, Err(ServiceError::Unauthorized)));
        assert!(matches!(wrong, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn validation_failure_skips_dataset() {
        let mut repo = MockRepository::new();
        repo.expect_search_users().times(0);

        let result = search_users(&repo, &tokens(), Some(TOKEN), form("tr", "0", "Id", "1"));

        assert!(matches!(
            result,
            Err(ServiceError::InvalidRequest(SearchError::BadLimit))
        ));
    }

    #[test]
    fn asks_repository_for_limit_plus_offset_matches() {
        let mut repo = MockRepository::new();
        repo.expect_search_users()
            .withf(|query| query.search == "Nulla" && query.limit == Some(5))
            .times(1)
            .returning(|_| Ok(nulla_matches()));

        let page = search_users(&repo, &tokens(), Some(TOKEN), form("4", "1", "Name", "1"))
            .expect("search succeeds");

        let names: Vec<_> = page.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Boyd Wolf", "Brooks Aguilar", "Johns Whitney"]);
    }

    #[test]
    fn dataset_error_wins_over_bad_order_field() {
        let mut repo = MockRepository::new();
        repo.expect_search_users()
            .returning(|_| Err(RepositoryError::Decode("line 3: invalid digit".to_string())));

        let result = search_users(&repo, &tokens(), Some(TOKEN), form("4", "0", "BadField", "1"));

        let err = result.unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn bad_order_field_wins_over_bad_order_by() {
        let mut repo = MockRepository::new();
        repo.expect_search_users().returning(|_| Ok(nulla_matches()));

        let result = search_users(&repo, &tokens(), Some(TOKEN), form("4", "0", "BadField", "10"));

        assert!(matches!(
            result,
            Err(ServiceError::InvalidRequest(SearchError::BadOrderField))
        ));
    }

    #[test]
    fn offset_past_matches_is_not_found() {
        let result = search_users(&dataset(), &tokens(), Some(TOKEN), form("4", "4", "Id", "1"));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn no_matches_is_not_found() {
        let result = find_page(
            &dataset(),
            &SearchRequest::new(50, 0).query("nowhere").order("Id", 1),
        );

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn zero_order_keeps_scan_order() {
        let page = search_users(&dataset(), &tokens(), Some(TOKEN), form("4", "1", "Age", "0"))
            .expect("search succeeds");

        assert_eq!(page.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 19, 21]);
    }

    #[test]
    fn sorts_only_the_scanned_window() {
        // limit 1 + offset 1 stops the scan after Boyd and Brooks.
        let page = search_users(&dataset(), &tokens(), Some(TOKEN), form("1", "1", "Age", "-1"))
            .expect("search succeeds");

        assert_eq!(page.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(), vec!["Boyd Wolf"]);
    }
}
