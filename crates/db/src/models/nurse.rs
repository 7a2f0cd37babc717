//! Nurse entity model and DTOs.

use serde::{Deserialize, Serialize};
use shiftboard_core::types::DbId;

/// A stored nurse shift assignment.
///
/// Serialized with camelCase keys (`firstName`, `shiftStart`, ...).
/// Shift times are free-form text; no time-of-day format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nurse {
    pub id: DbId,
    pub first_name: String,
    pub role: String,
    pub shift_start: String,
    pub shift_end: String,
}

/// DTO for creating a new nurse.
///
/// `id` may be absent, null, or an integer. Its value is never used; the
/// store always assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNurse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub first_name: String,
    pub role: String,
    pub shift_start: String,
    pub shift_end: String,
}

impl Nurse {
    /// Attach a store-assigned id to a create DTO.
    pub fn from_create(id: DbId, input: &CreateNurse) -> Self {
        Self {
            id,
            first_name: input.first_name.clone(),
            role: input.role.clone(),
            shift_start: input.shift_start.clone(),
            shift_end: input.shift_end.clone(),
        }
    }
}
