//! HTTP API for SOS alerts and hospital lookups.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::alert::DispatchError;
use crate::models::{Coordinate, HospitalRecord};
use crate::service::{AlertError, EmergencyService};

/// Application state shared across handlers
pub struct AppState {
    pub service: EmergencyService,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/hospitals", get(hospitals_handler))
        .route("/v1/hospitals/nearest", get(nearest_handler))
        .route("/api/v1/sos/send-alert", post(send_alert_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    hospitals: usize,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        hospitals: state.service.directory().len(),
    })
}

async fn hospitals_handler(State(state): State<Arc<AppState>>) -> Json<Vec<HospitalRecord>> {
    Json(state.service.directory().hospitals().to_vec())
}

#[derive(Deserialize)]
struct NearestQueryParams {
    lat: f64,
    lon: f64,
}

#[derive(Serialize, Deserialize)]
pub struct NearestResponse {
    pub hospital: HospitalRecord,
    pub distance_m: f64,
    pub distance_km: f64,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            success: false,
            message,
        }),
    )
}

/// Nearest hospital without sending anything
async fn nearest_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<NearestQueryParams>, QueryRejection>,
) -> Result<Json<NearestResponse>, ApiError> {
    let Query(params) = params.map_err(|e| api_error(StatusCode::BAD_REQUEST, e.body_text()))?;
    let location = Coordinate::new(params.lat, params.lon);

    let nearest = state
        .service
        .nearest(location)
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Invalid location: {}", e)))?
        .ok_or_else(|| {
            api_error(
                StatusCode::NOT_FOUND,
                "No hospitals in directory".to_string(),
            )
        })?;

    Ok(Json(NearestResponse {
        distance_km: round_km(nearest.distance_m),
        distance_m: nearest.distance_m,
        hospital: nearest.hospital,
    }))
}

#[derive(Deserialize)]
pub struct SendAlertRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SendAlertResponse {
    pub success: bool,
    pub hospital: String,
    pub phone: String,
    pub distance_km: f64,
    pub message_sid: String,
    pub sent_at: DateTime<Utc>,
}

/// Route an SOS to the nearest hospital
async fn send_alert_handler(
    State(state): State<Arc<AppState>>,
    request: Result<Json<SendAlertRequest>, JsonRejection>,
) -> Result<Json<SendAlertResponse>, ApiError> {
    let Json(request) = request.map_err(|e| api_error(StatusCode::BAD_REQUEST, e.body_text()))?;
    let location = Coordinate::new(request.latitude, request.longitude);

    let outcome = state
        .service
        .send_alert(location, request.message.as_deref())
        .await
        .map_err(|e| {
            error!("Emergency alert failed: {}", e);
            api_error(alert_status(&e), e.user_message())
        })?;

    Ok(Json(SendAlertResponse {
        success: true,
        hospital: outcome.hospital.name,
        phone: outcome.hospital.phone,
        distance_km: round_km(outcome.distance_m),
        message_sid: outcome.message_sid,
        sent_at: outcome.sent_at,
    }))
}

fn alert_status(error: &AlertError) -> StatusCode {
    match error {
        AlertError::InvalidCoordinate(_) => StatusCode::BAD_REQUEST,
        AlertError::NoHospital => StatusCode::SERVICE_UNAVAILABLE,
        AlertError::Dispatch(DispatchError::Network(_)) => StatusCode::SERVICE_UNAVAILABLE,
        AlertError::Dispatch(DispatchError::Authentication { .. }) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        AlertError::Dispatch(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Kilometres to two decimals
fn round_km(meters: f64) -> f64 {
    (meters / 10.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_km() {
        assert_eq!(round_km(1174.14), 1.17);
        assert_eq!(round_km(6928.2), 6.93);
        assert_eq!(round_km(0.0), 0.0);
    }

    #[test]
    fn test_alert_status() {
        assert_eq!(
            alert_status(&AlertError::NoHospital),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            alert_status(&AlertError::Dispatch(DispatchError::Authentication {
                message: "Authenticate".to_string()
            })),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            alert_status(&AlertError::Dispatch(DispatchError::Provider {
                status: 400,
                code: Some(21606),
                message: "bad from".to_string()
            })),
            StatusCode::BAD_GATEWAY
        );
    }
}
