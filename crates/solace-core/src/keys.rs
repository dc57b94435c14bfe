//! Storage key conventions.
//!
//! Pure string functions. These define the canonical layout of collections
//! in whichever key/value backend is configured.

use crate::id::EntityId;

pub const ASSESSMENTS: &str = "assessments.json";

pub const RESOURCES: &str = "resources.json";

pub const USERS: &str = "users.json";

pub const INQUIRIES: &str = "inquiries.json";

pub fn inquiry_notes(inquiry_id: EntityId) -> String {
    format!("notes/inquiry-{inquiry_id}.json")
}
