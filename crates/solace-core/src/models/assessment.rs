use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::{Keyed, impl_entity};
use crate::id::EntityId;
use crate::keys;
use crate::seed;
use crate::validation::{FieldErrors, Validate};
use crate::view::{Facet, Filterable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Assessment {
    /// Assigned on create; ignored in submitted drafts.
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "super::today")]
    pub date: jiff::civil::Date,
    #[serde(default)]
    pub score: u32,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub min_age: u32,
    #[serde(default = "default_max_age")]
    pub max_age: u32,
    /// Inactive assessments are hidden from beneficiaries but kept on record.
    #[serde(default = "default_active")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
}

pub const MAX_SCORE: u32 = 100;

fn default_max_age() -> u32 {
    100
}

fn default_active() -> bool {
    true
}

impl_entity!(Assessment, "assessments", seed = seed::assessments);

impl Keyed for Assessment {
    const KEY: &'static str = keys::ASSESSMENTS;
}

impl Validate for Assessment {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("userName", "User name", &self.user_name);
        errors.require("category", "Category", &self.category);

        if self.score > MAX_SCORE {
            errors.add("score", format!("Score must be between 0 and {MAX_SCORE}"));
        }
        if self.min_age > self.max_age {
            errors.add("maxAge", "Maximum age must not be below minimum age");
        }

        for (i, question) in self.questions.iter().enumerate() {
            if question.text.trim().is_empty() {
                errors.add(format!("questions[{i}].text"), "Question text is required");
            }
            let filled = question
                .options
                .iter()
                .filter(|o| !o.trim().is_empty())
                .count();
            if filled < 2 {
                errors.add(
                    format!("questions[{i}].options"),
                    "At least two options are required",
                );
            }
        }

        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AssessmentFacet {
    Category,
    Active,
}

impl Facet for AssessmentFacet {
    const ALL: &'static [Self] = &[Self::Category, Self::Active];

    fn param(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Active => "active",
        }
    }
}

impl Filterable for Assessment {
    type Facet = AssessmentFacet;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![self.user_name.as_str().into(), self.category.as_str().into()]
    }

    fn facet_value(&self, facet: AssessmentFacet) -> String {
        match facet {
            AssessmentFacet::Category => self.category.clone(),
            AssessmentFacet::Active => self.active.to_string(),
        }
    }

    fn filter_date(&self) -> Option<jiff::civil::Date> {
        Some(self.date)
    }
}
