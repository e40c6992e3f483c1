//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::domain::DomainError;
use crate::stations::ServiceError;
use crate::upstream::TransitSource;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<S: TransitSource + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/api/stations", get(list_stations::<S>))
        .route("/v1/api/stations/fare", get(fare::<S>))
        .route("/v1/api/stations/:id", get(schedule_today::<S>))
        .route("/v1/api/stations/:id/next-train", get(next_train::<S>))
        .route("/v1/api/stations/:id/next-trains", get(next_trains::<S>))
        .route("/v1/api/stations/:id/details", get(station_detail::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List stations, optionally filtered by name.
async fn list_stations<S: TransitSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<StationListQuery>,
) -> ApiResult<Vec<StationResult>> {
    let stations = state.stations.list_stations(query.name.trim()).await?;

    Ok(Json(ApiResponse::success(
        stations.into_iter().map(StationResult::from).collect(),
    )))
}

/// Remaining departures today at a station.
async fn schedule_today<S: TransitSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<Vec<ScheduleEntry>> {
    let now = state.stations.now();
    let schedule = state.stations.schedule_today(&id, &now).await?;

    Ok(Json(ApiResponse::success(ScheduleEntry::from_schedule(
        &schedule,
    ))))
}

/// Fare and travel time between two stations.
async fn fare<S: TransitSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<FareQuery>,
) -> ApiResult<FareResult> {
    let from = required(query.from.as_deref(), "from")?;
    let to = required(query.to.as_deref(), "to")?;

    let quote = state.stations.fare(from, to).await?;
    Ok(Json(ApiResponse::success(quote.into())))
}

/// The next train toward a terminus.
async fn next_train<S: TransitSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Query(query): Query<DestinationQuery>,
) -> ApiResult<NextTrainResult> {
    let destination = required(query.destination.as_deref(), "destination")?;

    let now = state.stations.now();
    let next = state.stations.next_departure(&id, destination, &now).await?;
    Ok(Json(ApiResponse::success(next.into())))
}

/// The next few trains toward a terminus.
async fn next_trains<S: TransitSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Query(query): Query<DestinationQuery>,
) -> ApiResult<NextTrainsResult> {
    let destination = required(query.destination.as_deref(), "destination")?;

    let now = state.stations.now();
    let next = state.stations.next_departures(&id, destination, &now).await?;
    Ok(Json(ApiResponse::success(next.into())))
}

/// Images, connecting transport and facilities of a station.
async fn station_detail<S: TransitSource>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> ApiResult<StationDetailResult> {
    let detail = state.stations.station_detail(&id).await?;
    Ok(Json(ApiResponse::success(detail.into())))
}

/// A query parameter that must be present and non-blank.
fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::BadRequest {
            message: format!("{name} is required"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        let message = e.to_string();
        match e {
            ServiceError::Domain(DomainError::InvalidDestination(_)) => {
                AppError::BadRequest { message }
            }
            ServiceError::Domain(
                DomainError::StationNotFound(_)
                | DomainError::FareNotFound { .. }
                | DomainError::NoUpcomingDeparture,
            ) => AppError::NotFound { message },
            // A bad time token comes from upstream data, not the request.
            ServiceError::Domain(DomainError::InvalidTimeFormat(_)) | ServiceError::Upstream(_) => {
                AppError::BadGateway { message }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %message, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), %message, "request rejected");
        }

        let body = Json(ApiResponse::error(status.as_u16(), message));
        (status, body).into_response()
    }
}
