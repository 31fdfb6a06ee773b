//! Student model and related types
//!
//! Students are immutable after registration: the roster offers no update or
//! delete operations.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Student model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    /// Class/group label, e.g. "6B"
    pub class_group: Option<String>,
}

/// Create student request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub class_group: Option<String>,
}
