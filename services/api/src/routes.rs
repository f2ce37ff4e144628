use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use hair_profile::analysis::{
    analysis_router, AnalysisRepository, HairAnalysisEngine, HairAnalysisResult,
    HairAnalysisService, ProfileInsights, QuestionnaireAnswers,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Result of an unsaved analysis, with the insight copy for its labels.
#[derive(Debug, Serialize)]
pub(crate) struct PreviewResponse {
    pub(crate) result: HairAnalysisResult,
    pub(crate) insights: ProfileInsights,
}

pub(crate) fn with_analysis_routes<R>(service: Arc<HairAnalysisService<R>>) -> axum::Router
where
    R: AnalysisRepository + 'static,
{
    analysis_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/hair/preview",
            axum::routing::post(preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Runs the pipeline without the completeness check and without storing anything.
pub(crate) async fn preview_endpoint(
    Json(answers): Json<QuestionnaireAnswers>,
) -> Json<PreviewResponse> {
    let result = HairAnalysisEngine::new().analyze(&answers);
    debug!(
        answered = answers.len(),
        hair_type = result.hair_type.label(),
        "hair analysis preview"
    );
    let insights = ProfileInsights::for_result(&result);
    Json(PreviewResponse { result, insights })
}
