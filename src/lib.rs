//! Student API Library
//!
//! # Overview
//!
//! 이 라이브러리는 학생/식품/주문 레코드 CRUD API를 제공합니다.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐  ┌──────────┐  ┌─────────┐                 │
//! │  │ Routes  │  │ Validate │  │   DB    │                 │
//! │  └────┬────┘  └────┬─────┘  └────┬────┘                 │
//! │       │            │             │                       │
//! │       └────────────┴─────────────┘                       │
//! │                         │                                │
//! └─────────────────────────┼────────────────────────────────┘
//!                           │
//!                           ▼
//!                  ┌────────────────┐
//!                  │ MariaDB/MySQL  │
//!                  └────────────────┘
//! ```
//!
//! 요청 흐름: 검증 (실패 시 400 단락) → 풀 커넥션으로 단일 파라미터화
//! 쿼리 실행 → 결과/에러를 HTTP 응답으로 매핑.
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입 및 HTTP 상태 매핑
//! - `validate`: 필드 검증 규칙
//! - `routes`: HTTP 엔드포인트 핸들러
//! - `db`: 커넥션 풀, 쿼리 실행, 스토어 trait
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use student_api::{create_router, AppState, Config, Database};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config).await?;
//!     let state = AppState {
//!         store: Arc::new(db),
//!         config: Arc::new(config),
//!     };
//!     let app = create_router(state);
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod validate;

// Re-exports for convenience
pub use config::Config;
pub use db::{Database, Student, StudentStore};
pub use error::ApiError;

/// 애플리케이션 전역 상태
///
/// 스토어는 trait 객체로 주입한다 (프로세스 전역 싱글톤 없음)
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
    pub config: Arc<Config>,
}

/// 라우터 생성
///
/// # Route Structure
///
/// ```text
/// GET    /health                                  - 서버 상태 확인
///
/// GET    /api/students                            - 전체 학생 조회
/// POST   /api/students                            - 학생 추가
/// PUT    /api/students/:class/:section/:rollid    - 학생 전체 갱신
/// PATCH  /api/students/:class/:section/:rollid    - 학생 부분 갱신
/// DELETE /api/students/:class/:section/:rollid    - 학생 삭제
///
/// GET    /api/foods                               - 전체 식품 조회
/// GET    /api/orders                              - 전체 주문 조회
/// ```
pub fn create_router(state: AppState) -> Router {
    // CORS 설정
    // 프로덕션에서는 특정 도메인만 허용, 개발 환경에서는 전체 허용
    let cors = if state.config.is_production() {
        let allowed_origins = std::env::var("ALLOWED_ORIGINS").unwrap_or_default();
        let origins: Vec<_> = allowed_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::PATCH,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        // Health check
        .route("/health", get(routes::health::health_check))
        // Students
        .route(
            "/api/students",
            get(routes::students::list_students).post(routes::students::create_student),
        )
        .route(
            "/api/students/:class/:section/:rollid",
            axum::routing::put(routes::students::update_student)
                .patch(routes::students::patch_student)
                .delete(routes::students::delete_student),
        )
        // Foods / Orders (읽기 전용)
        .route("/api/foods", get(routes::foods::list_foods))
        .route("/api/orders", get(routes::orders::list_orders))
        // 미들웨어
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // 상태 주입
        .with_state(state)
}
