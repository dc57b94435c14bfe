//! S3 backend. One object per key; ETags are the versions.

use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;
use crate::store::{KeyValueStore, Precondition, StoredValue, Version};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Build an S3 client from the default credential chain, optionally pinning
/// the region.
pub async fn build_client(region: Option<String>) -> Client {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(aws_config::Region::new(region));
    }
    Client::new(&loader.load().await)
}

pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

/// S3 reports a failed `If-Match`/`If-None-Match` as 412, or as 409 when two
/// conditional writes race.
fn is_condition_failure(message: &str) -> bool {
    message.contains("PreconditionFailed") || message.contains("ConditionalRequestConflict")
}

impl KeyValueStore for S3Store {
    async fn get(&self, key: &str) -> Result<Option<StoredValue>, StorageError> {
        let resp = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                let err = e.into_service_error();
                if err.is_no_such_key() {
                    return Ok(None);
                }
                return Err(StorageError::GetObject(err.to_string()));
            }
        };

        let version = Version(resp.e_tag().unwrap_or_default().to_string());
        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| StorageError::GetObject(e.to_string()))?
            .into_bytes()
            .to_vec();

        Ok(Some(StoredValue { body, version }))
    }

    async fn put(
        &self,
        key: &str,
        body: Vec<u8>,
        precondition: Precondition,
    ) -> Result<Version, StorageError> {
        let req = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(JSON_CONTENT_TYPE)
            .body(ByteStream::from(body));

        let req = match &precondition {
            Precondition::None => req,
            Precondition::IfMatch(version) => req.if_match(&version.0),
            Precondition::IfAbsent => req.if_none_match("*"),
        };

        let resp = req.send().await.map_err(|e| {
            let message = e.into_service_error().to_string();
            if is_condition_failure(&message) {
                StorageError::PreconditionFailed {
                    key: key.to_string(),
                }
            } else {
                StorageError::PutObject(message)
            }
        })?;

        Ok(Version(resp.e_tag().unwrap_or_default().to_string()))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;
        Ok(())
    }
}
