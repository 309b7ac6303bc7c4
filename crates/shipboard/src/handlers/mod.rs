pub mod days;
pub mod error;
pub mod events;
pub mod health;

pub use error::AppError;
