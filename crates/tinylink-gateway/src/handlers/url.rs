use crate::error::{AppError, Result};
use crate::model::{CreateUrlRequest, CreateUrlResponse, GetUrlResponse, ShortenForm};
use crate::state::AppState;
use axum::extract::rejection::{FormRejection, JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tracing::info;

/// `POST /shorten` with a `url` field, read from a form-encoded body first
/// and from the query string otherwise.
pub async fn shorten_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<ShortenForm>, QueryRejection>,
    form: std::result::Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<CreateUrlResponse>> {
    let Query(query) = query?;

    let url = match form {
        Ok(Form(body)) if !body.url.is_empty() => body.url,
        Ok(_) => query.url,
        Err(rejection) if query.url.is_empty() => return Err(rejection.into()),
        Err(_) => query.url,
    };

    create(&state, url).map(Json)
}

/// `POST /v1/urls` with a JSON body.
pub async fn create_url_handler(
    State(state): State<AppState>,
    request: std::result::Result<Json<CreateUrlRequest>, JsonRejection>,
) -> Result<Json<CreateUrlResponse>> {
    let Json(request) = request?;
    create(&state, request.original_url).map(Json)
}

/// `GET /v1/urls/{short_code}`: lookup without redirecting.
pub async fn get_url_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<GetUrlResponse>> {
    let url = state.shortener().resolve(&short_code)?;

    Ok(Json(GetUrlResponse {
        short_code,
        original_url: url.into_inner(),
    }))
}

/// `GET /{short_code}`: permanent redirect to the stored URL.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response> {
    let url = state.shortener().resolve(&short_code)?;
    let location = HeaderValue::try_from(url.as_str())
        .map_err(|e| AppError::Internal(format!("unusable redirect target {}: {}", url, e)))?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// `GET /`: there is no code to redirect.
pub async fn missing_code_handler() -> AppError {
    AppError::MissingShortCode
}

fn create(state: &AppState, original_url: String) -> Result<CreateUrlResponse> {
    let code = state.shortener().shorten(&original_url)?;
    info!(code = %code, url = %original_url, "shortened url");

    Ok(CreateUrlResponse {
        short_url: code.to_url(state.base_url()),
        short_code: code.to_string(),
        original_url,
    })
}
