//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::domain::{
    Distance, InvalidDistance, InvalidSection, Line, LineId, PathCorruption, Section, SectionError,
    StationId,
};
use crate::store::StoreError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route("/lines/:id", get(get_line).put(update_line).delete(delete_line))
        .route("/lines/:id/sections", post(add_section).delete(remove_section))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create a station.
async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> Result<Response, AppError> {
    if req.name.is_empty() {
        return Err(AppError::BadRequest {
            message: "station name must not be empty".to_string(),
        });
    }

    let station = state.stations.create(req.name).await;
    tracing::debug!(id = station.id.0, name = %station.name, "station created");

    let body = Json(StationResponse::from_station(&station));
    Ok((StatusCode::CREATED, body).into_response())
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.stations.all().await;
    Json(stations.iter().map(StationResponse::from_station).collect())
}

/// Delete a station.
///
/// A station still placed on a live line cannot be deleted; the line's path
/// would reference a dangling id.
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let station = StationId(id);

    for handle in state.lines.all().await {
        let line = handle.read().await;
        if line.path().contains(station) {
            return Err(AppError::BadRequest {
                message: format!("station {station} is still used by line {:?}", line.name()),
            });
        }
    }

    state.stations.remove(station).await?;
    tracing::debug!(id, "station deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line seeded with its initial section.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<CreateLineRequest>,
) -> Result<Response, AppError> {
    if req.name.is_empty() || req.color.is_empty() {
        return Err(AppError::BadRequest {
            message: "line name and color must not be empty".to_string(),
        });
    }

    // Both stations must exist before the line is created.
    let up = state.stations.get(StationId(req.up_station_id)).await?;
    let down = state.stations.get(StationId(req.down_station_id)).await?;
    let section = Section::new(up.id, down.id, Distance::new(req.distance)?)?;

    let handle = state.lines.create(req.name, req.color).await?;
    let mut line = handle.write().await;

    // Bootstrap into an empty path never fails.
    line.add_section(section)?;
    tracing::debug!(id = line.id().0, name = %line.name(), "line created");

    let body = Json(line_response(&state, &line).await?);
    Ok((StatusCode::CREATED, body).into_response())
}

/// List all lines with their stations in travel order.
async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let mut lines = Vec::new();
    for handle in state.lines.all().await {
        let line = handle.read().await;
        lines.push(line_response(&state, &line).await?);
    }
    Ok(Json(lines))
}

/// Get one line with its stations in travel order.
async fn get_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let handle = state.lines.get(LineId(id)).await?;
    let line = handle.read().await;
    Ok(Json(line_response(&state, &line).await?))
}

/// Update line metadata.
async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let handle = state.lines.get(LineId(id)).await?;
    let mut line = handle.write().await;

    line.update(req.name.as_deref(), req.color.as_deref());
    tracing::debug!(id, "line updated");

    Ok(Json(line_response(&state, &line).await?))
}

/// Soft-delete a line.
async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.lines.remove(LineId(id)).await?;
    tracing::debug!(id, "line deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Insert a section into a line.
async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<AddSectionRequest>,
) -> Result<Response, AppError> {
    let up = state.stations.get(StationId(req.up_station_id)).await?;
    let down = state.stations.get(StationId(req.down_station_id)).await?;
    let section = Section::new(up.id, down.id, Distance::new(req.distance)?)?;

    let handle = state.lines.get(LineId(id)).await?;
    let mut line = handle.write().await;

    line.add_section(section).inspect_err(|e| {
        tracing::warn!(line = id, error = %e, "section rejected");
    })?;
    tracing::debug!(line = id, up = up.id.0, down = down.id.0, "section added");

    let body = Json(line_response(&state, &line).await?);
    Ok((StatusCode::CREATED, body).into_response())
}

/// Remove a station from a line.
async fn remove_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<RemoveSectionQuery>,
) -> Result<Json<LineResponse>, AppError> {
    let station = StationId(query.station_id);

    let handle = state.lines.get(LineId(id)).await?;
    let mut line = handle.write().await;

    line.remove_station(station).inspect_err(|e| {
        tracing::warn!(line = id, station = station.0, error = %e, "removal rejected");
    })?;
    tracing::debug!(line = id, station = station.0, "station removed from line");

    Ok(Json(line_response(&state, &line).await?))
}

/// Build a line response, resolving station ids to their metadata.
async fn line_response(state: &AppState, line: &Line) -> Result<LineResponse, AppError> {
    let order = line.ordered_stations()?;

    let mut stations = Vec::with_capacity(order.len());
    for id in order {
        let station = state
            .stations
            .get(id)
            .await
            .map_err(|_| AppError::Internal {
                message: format!("line {} references missing station {id}", line.id()),
            })?;
        stations.push(StationResponse::from_station(&station));
    }

    Ok(LineResponse {
        id: line.id().0,
        name: line.name().to_string(),
        color: line.color().to_string(),
        stations,
        created_date: line.created_at(),
        modified_date: line.updated_at(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SectionError> for AppError {
    fn from(e: SectionError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidDistance> for AppError {
    fn from(e: InvalidDistance) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidSection> for AppError {
    fn from(e: InvalidSection) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateLineName(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            StoreError::StationNotFound(_) | StoreError::LineNotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl From<PathCorruption> for AppError {
    fn from(e: PathCorruption) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, %message, "request failed");
        } else {
            tracing::warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_errors_map_to_bad_request() {
        let err: AppError = SectionError::MinimumSection.into();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn store_lookup_errors_map_to_not_found() {
        let err: AppError = StoreError::LineNotFound(LineId(1)).into();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err: AppError = StoreError::StationNotFound(StationId(1)).into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn duplicate_line_name_maps_to_bad_request() {
        let err: AppError = StoreError::DuplicateLineName("Line 2".to_string()).into();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn corruption_maps_to_internal() {
        let err: AppError = PathCorruption::NoTerminus(3).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
