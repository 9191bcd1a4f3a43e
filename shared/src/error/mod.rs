//! Unified error system for the ordering desk
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified response envelope
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::GuestNameRequired, "Guest name is required")
//!     .with_detail("field", "name");
//! let response: ApiResponse<()> = err.into();
//! assert_eq!(response.code, Some(4021));
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError};
