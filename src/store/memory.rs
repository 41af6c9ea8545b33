use dashmap::DashMap;
use uuid::Uuid;

use super::ReceiptStore;
use crate::models::StoredReceipt;

/// 进程内存储 (DashMap 分片锁，无需外层 Mutex)
#[derive(Debug, Default)]
pub struct MemoryStore {
    receipts: DashMap<Uuid, StoredReceipt>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryStore {
    fn put(&self, id: Uuid, record: StoredReceipt) {
        self.receipts.insert(id, record);
    }

    fn get(&self, id: &Uuid) -> Option<StoredReceipt> {
        self.receipts.get(id).map(|entry| entry.value().clone())
    }

    fn len(&self) -> usize {
        self.receipts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Receipt;
    use bigdecimal::BigDecimal;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use std::sync::Arc;

    fn record(points: i64) -> StoredReceipt {
        StoredReceipt {
            receipt: Receipt {
                retailer: "Target".to_string(),
                purchase_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
                purchase_time: NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
                items: Vec::new(),
                total: BigDecimal::from(points),
            },
            points,
            processed_at: Utc::now(),
        }
    }

    #[test]
    fn test_put_then_get() {
        let store = MemoryStore::new();
        let id = Uuid::new_v4();
        store.put(id, record(42));

        assert_eq!(store.get(&id).map(|r| r.points), Some(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id() {
        let store = MemoryStore::new();
        assert!(store.get(&Uuid::new_v4()).is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_puts() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();

        for i in 0..32 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let id = Uuid::new_v4();
                store.put(id, record(i));
                id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }

        assert_eq!(store.len(), 32);
        for id in ids {
            assert!(store.get(&id).is_some());
        }
    }
}
