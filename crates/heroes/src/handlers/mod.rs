pub mod error;
pub mod health;
pub mod heroes;

pub use error::AppError;
