//! Lockfile Handlers
//!
//! HTTP handlers for lockfile operations. Reads are public; writes are
//! admission-checked against the trusted range snapshot.

use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::infrastructure::driving_adapters::api_rest::dto::lockfile::{
    DataEnvelope, LockfileResponseDto, PutLockfileDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::admission::AdmissionGuard;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for lockfile endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{repository_id}", get(get_lockfile))
        .route("/{repository_id}", put(put_lockfile))
}

/// GET /lockfiles/:repository_id - Fetch the lockfile for a repository
///
/// # Responses
///
/// * 200 OK - `{"data": <lockfile>}`, or `{"data": null}` when no lockfile
///   has been stored for the identifier (absence is not a fault)
/// * 500 Internal Server Error - Storage fault
#[axum::debug_handler]
async fn get_lockfile(
    State(state): State<AppState>,
    Path(repository_id): Path<String>,
) -> Result<Json<DataEnvelope<Option<LockfileResponseDto>>>, ApiError> {
    let lockfile = state.get_lockfile_use_case.execute(&repository_id).await?;

    Ok(Json(DataEnvelope {
        data: lockfile.map(LockfileResponseDto::from),
    }))
}

/// PUT /lockfiles/:repository_id - Create or replace the lockfile
///
/// # Admission
///
/// The caller address must fall within the current trusted range snapshot.
///
/// # Responses
///
/// * 200 OK - `{"data": <lockfile>}` with the stored document
/// * 400 Bad Request - Validation error; storage is never touched
/// * 403 Forbidden - Caller address outside the trusted ranges
/// * 500 Internal Server Error - Storage fault
#[axum::debug_handler]
async fn put_lockfile(
    _admission: AdmissionGuard, // Require a trusted caller address
    State(state): State<AppState>,
    Path(repository_id): Path<String>,
    Json(dto): Json<PutLockfileDto>,
) -> Result<Json<DataEnvelope<LockfileResponseDto>>, ApiError> {
    // Validate DTO
    dto.validate()?;

    // Execute use case
    let lockfile = state
        .put_lockfile_use_case
        .execute(dto.into_data(repository_id))
        .await?;

    // Return response
    Ok(Json(DataEnvelope {
        data: LockfileResponseDto::from(lockfile),
    }))
}
