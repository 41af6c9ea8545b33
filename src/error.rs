use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, NotFoundResponse};

/// 收据处理错误
///
/// 校验类错误按固定顺序检查，第一个失败项决定返回的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// 请求体不是合法 JSON
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    #[error("Retailer name is required and must be a non-empty string")]
    InvalidRetailer,

    #[error("Invalid total value. Must be a numeric string.")]
    InvalidTotal,

    #[error("Items array must be an array")]
    InvalidItems,

    #[error("Each item must have a non-empty description")]
    InvalidItemDescription,

    #[error("Item price must be a valid number")]
    InvalidItemPrice,

    #[error("Invalid date format. Must be YYYY-MM-DD")]
    InvalidDate,

    #[error("Invalid time format. Must be HH:MM")]
    InvalidTime,

    /// 查询时标识符不存在 (不属于校验错误)
    #[error("Receipt not found")]
    NotFound,
}

impl ReceiptError {
    /// 稳定的错误类型名 (用于日志)
    pub fn kind(&self) -> &'static str {
        match self {
            ReceiptError::MissingFields(_) => "MissingFields",
            ReceiptError::InvalidBody(_) => "InvalidBody",
            ReceiptError::InvalidRetailer => "InvalidRetailer",
            ReceiptError::InvalidTotal => "InvalidTotal",
            ReceiptError::InvalidItems => "InvalidItems",
            ReceiptError::InvalidItemDescription => "InvalidItemDescription",
            ReceiptError::InvalidItemPrice => "InvalidItemPrice",
            ReceiptError::InvalidDate => "InvalidDate",
            ReceiptError::InvalidTime => "InvalidTime",
            ReceiptError::NotFound => "NotFound",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ReceiptError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ReceiptError::NotFound => {
                let response = NotFoundResponse {
                    error: self.to_string(),
                };
                (status, Json(response)).into_response()
            }
            _ => {
                let response = ErrorResponse {
                    message: self.to_string(),
                };
                (status, Json(response)).into_response()
            }
        }
    }
}

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
