use crate::error::ReceiptError;
use crate::models::{PointsResponse, ProcessResponse, ReceiptSubmission};
use crate::service::ReceiptProcessor;
use crate::store::ReceiptStore;
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;

/// 服务状态检查
pub async fn root() -> &'static str {
    "Server is up and running!\n"
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 提交收据：校验并计算积分，返回新标识符
///
/// 请求体先按任意 JSON 接收，非对象的请求体按字段全部缺失处理。
pub async fn process_receipt<S: ReceiptStore + 'static>(
    State(processor): State<Arc<ReceiptProcessor<S>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let submission = match body {
        Ok(Json(value)) => ReceiptSubmission::from_json(value),
        Err(rejection) => {
            tracing::warn!("Rejected unreadable receipt body: {}", rejection.body_text());
            return ReceiptError::InvalidBody(rejection.body_text()).into_response();
        }
    };

    match processor.process(&submission) {
        Ok(id) => (StatusCode::OK, Json(ProcessResponse { id })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// 按标识符查询积分
pub async fn get_points<S: ReceiptStore + 'static>(
    State(processor): State<Arc<ReceiptProcessor<S>>>,
    Path(id): Path<String>,
) -> Response {
    match processor.points(&id) {
        Ok(points) => (StatusCode::OK, Json(PointsResponse { points })).into_response(),
        Err(e) => e.into_response(),
    }
}
