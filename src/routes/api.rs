use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use url::form_urlencoded;

use crate::dto::api::{ACCESS_TOKEN_HEADER, SearchErrorResponse};
use crate::forms::search::SearchForm;
use crate::repository::{CsvUserRepository, StaticTokenStore};
use crate::services::ServiceError;
use crate::services::search::search_users;

#[get("/v1/users")]
pub async fn api_v1_users(
    req: HttpRequest,
    repo: web::Data<CsvUserRepository>,
    tokens: web::Data<StaticTokenStore>,
) -> impl Responder {
    let access_token = req
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    let form = SearchForm::from_pairs(form_urlencoded::parse(req.query_string().as_bytes()));

    match search_users(repo.get_ref(), tokens.get_ref(), access_token, form) {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &ServiceError) -> HttpResponse {
    let status = match err {
        ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        ServiceError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound => StatusCode::NOT_FOUND,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    HttpResponse::build(status).json(SearchErrorResponse::new(err.to_string()))
}
