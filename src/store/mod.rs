pub mod memory;

pub use memory::MemoryStore;

use crate::models::StoredReceipt;
use uuid::Uuid;

/// 收据存储接口 (标识符 → 记录)
///
/// 实现必须支持并发写入；每次提交写入一次，新标识符不会覆盖已有记录。
pub trait ReceiptStore: Send + Sync {
    fn put(&self, id: Uuid, record: StoredReceipt);

    fn get(&self, id: &Uuid) -> Option<StoredReceipt>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
