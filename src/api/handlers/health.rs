//! # Health Check Handler
//!
//! برای بررسی سلامت سرویس

use axum::{
    extract::State,
    Json,
};

use crate::{
    error::Result,
    models::HealthResponse,
    services::AppState,
};

// =====================================
// Health Check
// =====================================
/// بررسی سلامت سرویس
///
/// # مفاهیم:
/// - Health check برای Kubernetes/Docker
/// - مخزن in-memory هست، پس فقط تعداد رکوردها رو گزارش میکنیم
///
/// # Endpoint
/// `GET /health`
///
/// # Response
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "environment": "development",
///   "projects": 2
/// }
/// ```
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>> {
    let projects = state.project_service.count().await;

    Ok(Json(HealthResponse::healthy(
        state.config().environment,
        projects,
    )))
}
