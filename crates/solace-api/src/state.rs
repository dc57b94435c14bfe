use std::sync::Arc;
use std::time::Duration;

use solace_inquiries::client::InquiryClient;
use solace_storage::any::AnyStore;
use solace_storage::local::FsStore;
use solace_storage::memory::MemoryStore;
use solace_storage::s3::{S3Store, build_client};

use crate::config::{AdminConfig, InquirySource, StorageConfig};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AnyStore>,
    pub inquiries: InquiryBackend,
}

#[derive(Clone)]
pub enum InquiryBackend {
    Local,
    Remote(InquiryClient),
}

impl AppState {
    pub fn new(store: AnyStore, inquiries: InquiryBackend) -> Self {
        Self {
            store: Arc::new(store),
            inquiries,
        }
    }

    pub async fn from_config(config: &AdminConfig) -> eyre::Result<Self> {
        let store = match &config.storage {
            StorageConfig::Local { data_dir } => {
                std::fs::create_dir_all(data_dir)?;
                AnyStore::Local(FsStore::new(data_dir))
            }
            StorageConfig::S3 { bucket, region } => {
                let client = build_client(region.clone()).await;
                AnyStore::S3(S3Store::new(client, bucket))
            }
            StorageConfig::Memory => {
                tracing::warn!("using in-memory storage; changes are lost on restart");
                AnyStore::Memory(MemoryStore::new())
            }
        };

        let inquiries = match &config.inquiries {
            InquirySource::Local => InquiryBackend::Local,
            InquirySource::Remote {
                base_url,
                timeout_secs,
            } => InquiryBackend::Remote(InquiryClient::new(
                base_url.clone(),
                Duration::from_secs(*timeout_secs),
            )),
        };

        Ok(Self::new(store, inquiries))
    }
}
