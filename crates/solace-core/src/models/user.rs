use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::{Keyed, impl_entity};
use crate::id::EntityId;
use crate::keys;
use crate::seed;
use crate::validation::{FieldErrors, Validate};
use crate::view::{Facet, Filterable};

/// A staff member or beneficiary account.
///
/// Older records carry a single `name`; newer ones split it into
/// `firstName`/`lastName`. Both shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    /// Inline `data:` URI.
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,

    // Counsellor-only
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub education: Option<String>,

    // User-list columns
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub assessment_name: Option<String>,
    #[serde(default)]
    pub join_date: Option<jiff::civil::Date>,
    #[serde(default)]
    pub status: UserStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum UserRole {
    #[default]
    Admin,
    SuperAdmin,
    WellnessCoach,
    SupportStaff,
    Counsellor,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super-admin",
            Self::WellnessCoach => "wellness-coach",
            Self::SupportStaff => "support-staff",
            Self::Counsellor => "counsellor",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Capitalized label used in exports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl User {
    /// `name` when set, otherwise "first last".
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{} {}", self.first_name.trim(), self.last_name.trim())
                .trim()
                .to_string(),
        }
    }
}

impl_entity!(User, "users", seed = seed::users);

impl Keyed for User {
    const KEY: &'static str = keys::USERS;
}

impl Validate for User {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.display_name().is_empty() {
            errors.add("firstName", "First name is required");
        }
        errors.require_email("email", &self.email);

        if self.role == UserRole::Counsellor {
            errors.require_some("expertise", "Expertise", self.expertise.as_deref());
            errors.require_some("experience", "Experience", self.experience.as_deref());
            errors.require_some("education", "Education", self.education.as_deref());
        }

        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum UserFacet {
    Role,
    Status,
}

impl Facet for UserFacet {
    const ALL: &'static [Self] = &[Self::Role, Self::Status];

    fn param(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Status => "status",
        }
    }
}

impl Filterable for User {
    type Facet = UserFacet;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![self.display_name().into(), self.email.as_str().into()]
    }

    fn facet_value(&self, facet: UserFacet) -> String {
        match facet {
            UserFacet::Role => self.role.as_str().to_string(),
            UserFacet::Status => self.status.as_str().to_string(),
        }
    }

    fn filter_date(&self) -> Option<jiff::civil::Date> {
        self.join_date
    }
}
