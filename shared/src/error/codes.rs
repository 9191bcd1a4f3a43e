//! Unified error codes for the ordering desk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors (ledger, guests, modifiers)
//! - 6xxx: Product errors (catalog lookups)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize the same
/// way for every consumer of the desk's JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Order ====================
    /// Quantity is out of the allowed range
    InvalidQuantity = 4010,
    /// Guest not found in the registry
    GuestNotFound = 4020,
    /// Guest name is empty or whitespace
    GuestNameRequired = 4021,
    /// A required modifier was left unselected
    RequiredModifierMissing = 4030,
    /// Modifier does not exist on the menu item
    ModifierNotFound = 4031,
    /// Operation does not match the modifier kind (toggle vs. choice)
    ModifierKindMismatch = 4032,
    /// Option label does not exist on the modifier
    OptionNotFound = 4033,

    // ==================== 6xxx: Product ====================
    /// Menu item not found in the catalog
    ProductNotFound = 6001,
    /// Category not found in the catalog
    CategoryNotFound = 6101,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Order
            4010 => Ok(ErrorCode::InvalidQuantity),
            4020 => Ok(ErrorCode::GuestNotFound),
            4021 => Ok(ErrorCode::GuestNameRequired),
            4030 => Ok(ErrorCode::RequiredModifierMissing),
            4031 => Ok(ErrorCode::ModifierNotFound),
            4032 => Ok(ErrorCode::ModifierKindMismatch),
            4033 => Ok(ErrorCode::OptionNotFound),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6101 => Ok(ErrorCode::CategoryNotFound),

            // System
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}
