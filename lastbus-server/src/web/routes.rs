//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::{HeaderMap, StatusCode, Uri, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, warn};

use crate::domain::{Language, ScheduleError, ScheduleRecord};
use crate::preferences::{CookiePreference, LanguagePreference};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

const SCHEDULE_NOT_FOUND: &str = "Bus schedule data not found";
const SCHEDULE_LOAD_FAILED: &str = "Failed to load bus schedule data";

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stands", get(list_stands))
        .route("/api/languages", get(list_languages))
        .route("/api/bus-schedules/:stand", get(raw_schedules))
        .route("/bus/:stand", get(schedule_page))
        .route("/language/:code", get(set_language))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Stand picker. `?stand=` jumps straight to a known stand.
async fn index_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<IndexParams>,
) -> Result<Response, AppError> {
    if let Some(stand) = params.stand.as_deref().and_then(|s| state.stands.resolve(s)) {
        return Ok(Redirect::to(&format!("/bus/{stand}")).into_response());
    }

    let lang = preference(&headers, None).language();
    let template = IndexTemplate::new(state.stands.stands(), &state.languages, lang);
    render(&template)
}

/// The stand catalog.
async fn list_stands(State(state): State<AppState>) -> Json<StandListResponse> {
    Json(StandListResponse {
        stands: state.stands.stands().to_vec(),
    })
}

/// The supported languages.
async fn list_languages(State(state): State<AppState>) -> Json<Vec<LanguageResult>> {
    Json(
        state
            .languages
            .packs()
            .iter()
            .map(LanguageResult::from)
            .collect(),
    )
}

/// A stand's dataset, unfiltered.
async fn raw_schedules(
    State(state): State<AppState>,
    UrlPath(stand): UrlPath<String>,
) -> Result<Json<Vec<ScheduleRecord>>, AppError> {
    let code = state.stands.resolve(&stand).ok_or_else(|| AppError::NotFound {
        message: SCHEDULE_NOT_FOUND.to_string(),
    })?;

    let records = state.schedules.load(&code).await?;
    Ok(Json(records.to_vec()))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn preference(headers: &HeaderMap, requested: Option<Language>) -> CookiePreference {
    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok());
    CookiePreference::from_cookie_header(cookie).with_override(requested)
}

/// A stand's departures, filtered and sorted.
///
/// Browsers get the schedule page; other clients get JSON.
async fn schedule_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    UrlPath(stand): UrlPath<String>,
    Query(params): Query<ScheduleParams>,
) -> Result<Response, AppError> {
    let html = accepts_html(&headers);
    let pref = preference(&headers, params.language());

    let Some(entry) = state.stands.get(&stand).cloned() else {
        return not_found_stand(html);
    };
    let code = entry.code().map_err(|e| AppError::Internal {
        message: e.to_string(),
    })?;

    let records = match state.schedules.load(&code).await {
        Ok(records) => records,
        Err(ScheduleError::NotFound { .. }) => return not_found_stand(html),
        Err(e) if html => {
            error!(stand = %code, error = %e, "schedule load failed");
            let template = ErrorTemplate {
                lang: pref.language(),
                title: "Error Loading Schedules".to_string(),
                message: "Failed to load bus schedules. Please try again.".to_string(),
                retry_url: uri.to_string(),
            };
            let page = render(&template)?;
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let view = params.query().run(&records, &state.languages, &pref);

    if html {
        let template = ScheduleTemplate::new(entry, view, &params, &state.languages);
        render(&template)
    } else {
        Ok(Json(ScheduleResponse { stand: entry, view }).into_response())
    }
}

fn not_found_stand(html: bool) -> Result<Response, AppError> {
    if html {
        Ok(Redirect::to("/").into_response())
    } else {
        Err(AppError::NotFound {
            message: SCHEDULE_NOT_FOUND.to_string(),
        })
    }
}

/// Store the language preference and go back where the user came from.
async fn set_language(
    headers: HeaderMap,
    UrlPath(code): UrlPath<String>,
) -> Result<Response, AppError> {
    let lang = Language::parse(&code).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    Ok((
        [(header::SET_COOKIE, CookiePreference::set_cookie(lang))],
        Redirect::to(&return_path(&headers)),
    )
        .into_response())
}

/// Where to send the user back to after a language switch.
///
/// Only pages on this site are followed: a relative `Referer`, or an
/// absolute one whose authority matches `Host`. Anything else goes to `/`.
fn return_path(headers: &HeaderMap) -> String {
    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|r| r.parse::<Uri>().ok());
    let Some(referer) = referer else {
        return "/".to_string();
    };

    if let Some(authority) = referer.authority() {
        let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
        if host != Some(authority.as_str()) {
            return "/".to_string();
        }
    }

    match referer.path_and_query().map(|pq| pq.as_str()) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_string(),
        _ => "/".to_string(),
    }
}

fn render(template: &impl Template) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })?;
    Ok(Html(html).into_response())
}

// ============================================================================
// Error handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ScheduleError> for AppError {
    fn from(e: ScheduleError) -> Self {
        match e {
            ScheduleError::NotFound { .. } => AppError::NotFound {
                message: SCHEDULE_NOT_FOUND.to_string(),
            },
            ScheduleError::Load { .. } => {
                error!(error = %e, "schedule load failed");
                AppError::Internal {
                    message: SCHEDULE_LOAD_FAILED.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
