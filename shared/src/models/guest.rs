//! Guest Model

use serde::{Deserialize, Serialize};

/// Named party within a shared booking, owning one cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: String,
    pub name: String,
}
