pub mod amount;
pub mod error;
pub mod pagination;
pub mod traits;

pub use error::{AppError, Result};
pub use pagination::ListQuery;
