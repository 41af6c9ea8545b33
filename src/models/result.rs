use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Receipt;

/// 存储记录：校验后的收据及其积分
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReceipt {
    pub receipt: Receipt,
    pub points: i64,
    pub processed_at: DateTime<Utc>,
}

/// POST /receipts/process 响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: Uuid,
}

/// GET /receipts/{id}/points 响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}

/// 错误响应体 (400)
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// 查询不到收据时的响应体 (404)
#[derive(Debug, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub error: String,
}
