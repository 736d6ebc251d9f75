use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, StatusErrorDto},
        session::DEFAULT_ROWS_PER_PAGE,
        wordlist::PageResultDto,
    },
    server::{
        controller::util::identity::AuthenticatedIdentity,
        error::{route::RouteError, Error},
        model::app::AppState,
        service::wordlist::WordListService,
    },
};

pub static WORDLIST_TAG: &str = "wordlist";

/// Operation addressed by the path below `/api/wordlist/`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordListRoute {
    /// `readAny/{page}` or `readAny/{page}/{rowsPerPage}`
    ReadAny { page: u64, rows_per_page: u64 },
    /// `readOne/{id}`
    ReadOne { id: u64 },
}

impl WordListRoute {
    /// Parses the path below `/api/wordlist/`
    ///
    /// Numbers must be plain ASCII digits that fit in a `u64`, anything else is `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').collect();

        match segments.as_slice() {
            ["readAny", page] => Some(Self::ReadAny {
                page: parse_number(page)?,
                rows_per_page: DEFAULT_ROWS_PER_PAGE,
            }),
            ["readAny", page, rows_per_page] => Some(Self::ReadAny {
                page: parse_number(page)?,
                rows_per_page: parse_number(rows_per_page)?,
            }),
            ["readOne", id] => Some(Self::ReadOne {
                id: parse_number(id)?,
            }),
            _ => None,
        }
    }
}

fn parse_number(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    segment.parse().ok()
}

/// Reads from the word list
///
/// Routes below `/api/wordlist/`:
/// - `readAny/{page}/{rowsPerPage}`: One page of words ordered by id. `page` is clamped to at
///   least 1, `rowsPerPage` defaults to 5 when omitted or 0.
/// - `readOne/{id}`: Echoes the requested id.
///
/// Authentication is checked before the route is interpreted, so any path without a valid
/// token yields a 401.
///
/// # Responses
/// - 200 (Success): `PageResultDto` for `readAny`, `ReadOneDto` for `readOne`
/// - 401 (Unauthorized): Missing or invalid `Authorization` token
/// - 404 (Not Found): Unknown route
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/api/wordlist/{params}",
    tag = WORDLIST_TAG,
    params(
        ("params" = String, Path, description = "readAny/{page}/{rowsPerPage}, readAny/{page} or readOne/{id}")
    ),
    responses(
        (status = 200, description = "Page of words, or `{id}` for readOne", body = PageResultDto),
        (status = 401, description = "Missing or invalid session token", body = StatusErrorDto),
        (status = 404, description = "Invalid route", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn wordlist(
    _identity: AuthenticatedIdentity,
    State(state): State<AppState>,
    Path(params): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let Some(route) = WordListRoute::parse(&params) else {
        return Err(RouteError::InvalidRoute(params).into());
    };

    let service = WordListService::new(&state.db);

    let response = match route {
        WordListRoute::ReadAny {
            page,
            rows_per_page,
        } => Json(service.read_any(page, rows_per_page).await?).into_response(),
        WordListRoute::ReadOne { id } => Json(service.read_one(id)).into_response(),
    };

    Ok(response)
}

/// Bare `/api/wordlist` has no operation, authenticated callers get a 404
pub async fn wordlist_root(_identity: AuthenticatedIdentity) -> Result<(), Error> {
    Err(RouteError::InvalidRoute(String::new()).into())
}
