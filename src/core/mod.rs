pub mod checker;
pub mod engine;

pub use crate::domain::model::{Digits, InputNumber, Verdict};
pub use crate::domain::ports::InputSource;
pub use crate::utils::error::Result;
