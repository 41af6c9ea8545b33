pub mod calculator;
pub mod processor;
pub mod validator;

pub use calculator::{calculate, score};
pub use processor::ReceiptProcessor;
pub use validator::{parse_amount, validate};
