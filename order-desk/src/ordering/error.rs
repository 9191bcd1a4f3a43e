use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by ordering operations
///
/// Unknown line ids are not errors: removing or updating a line that is not
/// in the ledger is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Guest name must not be empty")]
    BlankGuestName,

    #[error("Guest not found: {0}")]
    GuestNotFound(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Modifier not found: {0}")]
    ModifierNotFound(String),

    #[error("Modifier {modifier_id} does not support {operation}")]
    ModifierKindMismatch {
        modifier_id: String,
        operation: &'static str,
    },

    #[error("Option {option} not found on modifier {modifier_id}")]
    OptionNotFound { modifier_id: String, option: String },

    #[error("Required modifier not selected: {0}")]
    RequiredModifierMissing(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("{field} is too long ({len} chars, max {max})")]
    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

pub type OrderResult<T> = Result<T, OrderError>;

impl OrderError {
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::BlankGuestName => ErrorCode::GuestNameRequired,
            OrderError::GuestNotFound(_) => ErrorCode::GuestNotFound,
            OrderError::MenuItemNotFound(_) => ErrorCode::ProductNotFound,
            OrderError::CategoryNotFound(_) => ErrorCode::CategoryNotFound,
            OrderError::ModifierNotFound(_) => ErrorCode::ModifierNotFound,
            OrderError::ModifierKindMismatch { .. } => ErrorCode::ModifierKindMismatch,
            OrderError::OptionNotFound { .. } => ErrorCode::OptionNotFound,
            OrderError::RequiredModifierMissing(_) => ErrorCode::RequiredModifierMissing,
            OrderError::InvalidQuantity(_) => ErrorCode::InvalidQuantity,
            OrderError::InvalidAmount(_) => ErrorCode::ValueOutOfRange,
            OrderError::InvalidCatalog(_) => ErrorCode::ConfigError,
            OrderError::TextTooLong { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let code = err.code();
        let message = err.to_string();
        let app = AppError::with_message(code, message);
        match err {
            OrderError::GuestNotFound(id) => app.with_detail("guest_id", id),
            OrderError::MenuItemNotFound(id) => app.with_detail("menu_item_id", id),
            OrderError::CategoryNotFound(name) => app.with_detail("category", name),
            OrderError::ModifierNotFound(id) | OrderError::RequiredModifierMissing(id) => {
                app.with_detail("modifier_id", id)
            }
            OrderError::ModifierKindMismatch { modifier_id, .. } => {
                app.with_detail("modifier_id", modifier_id)
            }
            OrderError::OptionNotFound { modifier_id, option } => app
                .with_detail("modifier_id", modifier_id)
                .with_detail("option", option),
            OrderError::InvalidQuantity(q) => app.with_detail("quantity", q),
            OrderError::TextTooLong { field, .. } => app.with_detail("field", field),
            OrderError::BlankGuestName
            | OrderError::InvalidAmount(_)
            | OrderError::InvalidCatalog(_) => app,
        }
    }
}
