use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::entity::{Keyed, impl_entity};
use crate::id::EntityId;
use crate::keys;
use crate::seed;
use crate::validation::{FieldErrors, Validate};
use crate::view::{Facet, Filterable};

/// A piece of wellness content (article, video, or quick tip).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Resource {
    #[serde(default)]
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, rename = "type")]
    pub kind: ResourceType,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub platform: String,
    /// Target age group, e.g. "18-25".
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub status: ResourceStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Inline `data:` URI.
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default = "super::today")]
    pub publish_date: jiff::civil::Date,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResourceType {
    #[default]
    Article,
    Video,
    Tip,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Video => "video",
            Self::Tip => "tip",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResourceStatus {
    Live,
    Hide,
    #[default]
    Draft,
}

impl ResourceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Hide => "hide",
            Self::Draft => "draft",
        }
    }
}

impl_entity!(Resource, "resources", seed = seed::resources);

impl Keyed for Resource {
    const KEY: &'static str = keys::RESOURCES;
}

impl Validate for Resource {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("title", "Title", &self.title);
        errors.require("author", "Author", &self.author);
        errors.require("category", "Category", &self.category);
        errors.require("platform", "Platform", &self.platform);
        errors.require("age", "Age group", &self.age);
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ResourceFacet {
    Type,
    Category,
    Platform,
    Status,
    Age,
}

impl Facet for ResourceFacet {
    const ALL: &'static [Self] = &[
        Self::Type,
        Self::Category,
        Self::Platform,
        Self::Status,
        Self::Age,
    ];

    fn param(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Category => "category",
            Self::Platform => "platform",
            Self::Status => "status",
            Self::Age => "age",
        }
    }
}

impl Filterable for Resource {
    type Facet = ResourceFacet;

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            self.title.as_str().into(),
            self.author.as_str().into(),
            self.category.as_str().into(),
        ]
    }

    fn facet_value(&self, facet: ResourceFacet) -> String {
        match facet {
            ResourceFacet::Type => self.kind.as_str().to_string(),
            ResourceFacet::Category => self.category.clone(),
            ResourceFacet::Platform => self.platform.clone(),
            ResourceFacet::Status => self.status.as_str().to_string(),
            ResourceFacet::Age => self.age.clone(),
        }
    }

    fn filter_date(&self) -> Option<jiff::civil::Date> {
        Some(self.publish_date)
    }
}
