use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ReceiptError;
use crate::models::{ReceiptSubmission, StoredReceipt};
use crate::service::{calculator, validator};
use crate::store::ReceiptStore;

/// 收据处理服务：必填检查 → 校验 → 计分 → 存储
pub struct ReceiptProcessor<S> {
    store: Arc<S>,
}

impl<S: ReceiptStore> ReceiptProcessor<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// 处理一张收据，返回新生成的标识符
    pub fn process(&self, submission: &ReceiptSubmission) -> Result<Uuid, ReceiptError> {
        let missing = submission.missing_fields();
        if !missing.is_empty() {
            tracing::warn!(fields = ?missing, "Rejected receipt with missing fields");
            return Err(ReceiptError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        let receipt = validator::validate(submission).map_err(|e| {
            tracing::warn!(kind = e.kind(), "Rejected receipt: {}", e);
            e
        })?;

        let points = calculator::calculate(&receipt);
        let id = Uuid::new_v4();
        tracing::info!(%id, retailer = %receipt.retailer, points, "Receipt processed");

        self.store.put(
            id,
            StoredReceipt {
                receipt,
                points,
                processed_at: Utc::now(),
            },
        );

        Ok(id)
    }

    /// 查询积分；标识符未知或格式错误都视为不存在
    pub fn points(&self, id: &str) -> Result<i64, ReceiptError> {
        let record = Uuid::parse_str(id)
            .ok()
            .and_then(|uuid| self.store.get(&uuid));

        match record {
            Some(record) => Ok(record.points),
            None => {
                tracing::debug!(id, "Receipt not found");
                Err(ReceiptError::NotFound)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &Arc<S> {
        &self.store
    }
}
