pub mod error;
pub mod health;
pub mod users;

pub use error::{handle_panic, ApiError};
