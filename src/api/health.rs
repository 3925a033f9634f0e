use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::dashboard::AppState;
use crate::data::Dataset;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    dataset: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ComponentHealth {
    fn healthy(rows: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            rows: Some(rows),
            error: None,
        }
    }

    fn unhealthy(error: String) -> Self {
        Self {
            status: "unhealthy".to_string(),
            rows: None,
            error: Some(error),
        }
    }

    fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Every table loaded with at least one row counts as healthy.
fn check_dataset(dataset: &Dataset) -> ComponentHealth {
    let empty: Vec<&str> = [
        ("investment costs", dataset.investment_costs.is_empty()),
        ("operational costs", dataset.operational_costs.is_empty()),
        ("total emissions", dataset.total_emissions.is_empty()),
    ]
    .into_iter()
    .filter_map(|(name, is_empty)| is_empty.then_some(name))
    .collect();

    if empty.is_empty() {
        ComponentHealth::healthy(
            dataset.investment_costs.len()
                + dataset.operational_costs.len()
                + dataset.total_emissions.len(),
        )
    } else {
        ComponentHealth::unhealthy(format!("empty tables: {}", empty.join(", ")))
    }
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let dataset = check_dataset(&state.dataset);
    let healthy = dataset.is_healthy();

    let response = HealthResponse {
        status: (if healthy { "healthy" } else { "degraded" }).to_string(),
        timestamp: chrono::Utc::now(),
        checks: HealthChecks { dataset },
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

/// GET /health/ready - 200 once there is something to plot
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    if check_dataset(&state.dataset).is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health/live
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
