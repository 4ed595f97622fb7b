//! Health Check Endpoint
//!
//! 깊은 헬스체크: 프로세스 생존 여부만이 아니라 스토어 연결까지 확인한다.
//! 스토어가 죽어 있어도 200을 반환하되 status를 "degraded"로 내려
//! 로드밸런서/모니터링이 판단할 수 있게 한다.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseStatus,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct DatabaseStatus {
    pub connected: bool,
    pub latency_ms: Option<u64>,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let ping_start = std::time::Instant::now();
    let database = match state.store.ping().await {
        Ok(_) => DatabaseStatus {
            connected: true,
            latency_ms: Some(ping_start.elapsed().as_millis() as u64),
        },
        Err(_) => DatabaseStatus {
            connected: false,
            latency_ms: None,
        },
    };

    Json(HealthResponse {
        status: if database.connected { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
