//! Order Endpoints
//!
//! 읽기 전용. orders 테이블 전체 조회만 제공

use axum::{extract::State, Json};

use crate::{db::Order, error::ApiError, AppState};

/// GET /api/orders
pub async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state.store.list_orders().await?;
    Ok(Json(orders))
}
