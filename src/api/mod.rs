pub mod handlers;
pub mod openapi;

pub use handlers::*;

use crate::service::ReceiptProcessor;
use crate::store::ReceiptStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 构建路由
pub fn router<S: ReceiptStore + 'static>(processor: Arc<ReceiptProcessor<S>>) -> Router {
    let receipt_routes = Router::new()
        .route("/receipts/process", post(process_receipt::<S>))
        .route("/receipts/:id/points", get(get_points::<S>))
        .with_state(processor);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .merge(receipt_routes)
}
