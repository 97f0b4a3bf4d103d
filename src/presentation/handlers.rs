// HTTP request handlers
use crate::domain::resolution::ChartResolution;
use crate::presentation::app_state::AppState;
use crate::presentation::views::{chart_to_view, sensor_to_view, SensorView};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChartQuery {
    pub resolution: Option<String>,
    pub hours: Option<i32>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all temperature sensors
pub async fn list_sensors(State(state): State<Arc<AppState>>) -> Response {
    match state.sensor_service.list_sensors().await {
        Ok(sensors) => {
            let views: Vec<SensorView> = sensors.into_iter().map(sensor_to_view).collect();
            Json(views).into_response()
        }
        Err(e) => {
            tracing::error!("Error fetching sensors: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Build the segmented temperature chart for one sensor
pub async fn get_chart(
    Path(id): Path<String>,
    Query(query): Query<ChartQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hours = query.hours.unwrap_or(6);
    if hours <= 0 {
        return (StatusCode::BAD_REQUEST, "hours must be positive").into_response();
    }

    let resolution = match query.resolution.as_deref() {
        None | Some("minute") => ChartResolution::Minute,
        Some("hour") => ChartResolution::Hour,
        Some("day") => ChartResolution::Day,
        Some(other) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("unknown resolution: {}", other),
            )
                .into_response();
        }
    };

    match state.chart_service.get_chart(&id, resolution, hours).await {
        Ok(chart) => Json(chart_to_view(chart)).into_response(),
        Err(e) => {
            tracing::error!("Error building chart for {}: {}", id, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
