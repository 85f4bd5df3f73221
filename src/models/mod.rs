pub mod auth;
pub mod common;
pub mod error_code;

pub use common::response::ApiResponse;
pub use error_code::ErrorCode;
