use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::{Keyed, impl_entity};
use crate::id::EntityId;
use crate::keys;
use crate::seed;
use crate::validation::{FieldErrors, Validate};
use crate::view::{Facet, Filterable};

/// A contact enquiry submitted through the public site.
///
/// Field names follow the enquiry API's snake_case payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Inquiry {
    #[serde(default, alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub enquiry_type: String,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum InquiryStatus {
    #[default]
    Pending,
    InProgress,
    Resolved,
}

impl InquiryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }
}

impl_entity!(Inquiry, "inquiries", seed = seed::inquiries);

impl Keyed for Inquiry {
    const KEY: &'static str = keys::INQUIRIES;
}

impl Validate for Inquiry {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("name", "Name", &self.name);
        errors.require_email("email", &self.email);
        errors.require("message", "Message", &self.message);
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InquiryFacet {
    Status,
    EnquiryType,
}

impl Facet for InquiryFacet {
    const ALL: &'static [Self] = &[Self::Status, Self::EnquiryType];

    fn param(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::EnquiryType => "enquiry_type",
        }
    }
}

impl Filterable for Inquiry {
    type Facet = InquiryFacet;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            self.name.as_str().into(),
            self.email.as_str().into(),
            self.message.as_str().into(),
        ]
    }

    fn facet_value(&self, facet: InquiryFacet) -> String {
        match facet {
            InquiryFacet::Status => self.status.as_str().to_string(),
            InquiryFacet::EnquiryType => self.enquiry_type.clone(),
        }
    }

    fn filter_date(&self) -> Option<jiff::civil::Date> {
        self.created_at
            .map(|ts| ts.to_zoned(jiff::tz::TimeZone::UTC).date())
    }
}
