use axum::{
	Json, Router,
	extract::{OriginalUri, Path, Query, State, rejection::{JsonRejection, QueryRejection}},
	http::{StatusCode, header},
	response::{IntoResponse, Response},
	routing::get,
};
use serde::Serialize;
use serde_json::Value;

use notes_service::{Error as ServiceError, ListRequest, NoteItem};

use crate::state::AppState;

/// Builds the full application: `/health` plus the notes routes under the configured prefix.
pub fn router(state: AppState) -> Router {
	let prefix = state.api_prefix.clone();
	let notes = notes_router(state);
	let app = Router::new().route("/health", get(health));
	let app = if prefix.is_empty() { app.merge(notes) } else { app.nest(&prefix, notes) };

	app.fallback(fallback)
}

/// The notes resource with paths relative to the mount point.
pub fn notes_router(state: AppState) -> Router {
	Router::new()
		.route("/notes", get(list_notes).post(create_note))
		.route("/notes/{id}", get(get_note).put(update_note).delete(delete_note))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn fallback() -> ApiError {
	ApiError::not_found()
}

async fn list_notes(
	State(state): State<AppState>,
	query: Result<Query<ListRequest>, QueryRejection>,
) -> Result<Json<Vec<NoteItem>>, ApiError> {
	let Query(query) = query?;

	tracing::debug!(search_term = ?query.search_term, "Listing notes.");

	let notes = state.service.list(query).await?;

	Ok(Json(notes))
}

async fn get_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<NoteItem>, ApiError> {
	tracing::debug!(%id, "Fetching note.");

	let note = state.service.get(&id).await?;

	Ok(Json(note))
}

async fn create_note(
	State(state): State<AppState>,
	OriginalUri(uri): OriginalUri,
	payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError> {
	let Json(payload) = payload?;
	let note = state.service.create(&payload).await?;
	let location = format!("{}/{}", uri.path().trim_end_matches('/'), note.id);

	Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(note)).into_response())
}

async fn update_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
	payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<NoteItem>, ApiError> {
	let Json(payload) = payload?;
	let note = state.service.update(&id, &payload).await?;

	Ok(Json(note))
}

async fn delete_note(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
	state.service.delete(&id).await?;

	Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: &'static str,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: &'static str, message: impl Into<String>) -> Self {
		Self { status, error_code, message: message.into() }
	}

	fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", "Not Found")
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::Validation { message } =>
				Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", message),
			ServiceError::NotFound { .. } => Self::not_found(),
			ServiceError::Storage { message } => {
				tracing::error!(%message, "Note store request failed.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", "Internal Server Error")
			},
		}
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", rejection.body_text())
	}
}

impl From<QueryRejection> for ApiError {
	fn from(rejection: QueryRejection) -> Self {
		Self::new(StatusCode::BAD_REQUEST, "INVALID_REQUEST", rejection.body_text())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, message: self.message };

		(self.status, Json(body)).into_response()
	}
}
