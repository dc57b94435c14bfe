use std::time::Duration;

use serde_json::Value;
use ureq::Agent;

use solace_core::id::EntityId;
use solace_core::models::inquiry::Inquiry;

use crate::error::InquiryClientError;
use crate::payload;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Unauthenticated client for `GET /enquiry/list` and `GET /enquiry/{id}`.
#[derive(Clone)]
pub struct InquiryClient {
    agent: Agent,
    base_url: String,
}

impl InquiryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json(&self, path: &str) -> Result<Value, InquiryClientError> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "fetching enquiries");
        let value = self.agent.get(&url).call()?.body_mut().read_json::<Value>()?;
        Ok(value)
    }

    pub fn list(&self) -> Result<Vec<Inquiry>, InquiryClientError> {
        let inquiries = payload::parse_list(self.get_json("/enquiry/list")?)?;
        tracing::info!(count = inquiries.len(), "fetched enquiry list");
        Ok(inquiries)
    }

    pub fn get(&self, id: EntityId) -> Result<Inquiry, InquiryClientError> {
        match self.get_json(&format!("/enquiry/{id}")) {
            Err(InquiryClientError::Http(ureq::Error::StatusCode(404))) => {
                Err(InquiryClientError::NotFound(id.to_string()))
            }
            other => payload::parse_detail(other?),
        }
    }
}
