pub mod receipt;
pub mod result;

pub use receipt::{LineItem, Receipt, ReceiptSubmission};
pub use result::{ErrorResponse, NotFoundResponse, PointsResponse, ProcessResponse, StoredReceipt};
