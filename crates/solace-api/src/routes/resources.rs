use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;

use solace_core::id::EntityId;
use solace_core::image;
use solace_core::models::resource::Resource;
use solace_storage::repository::Repository;

use crate::error::ApiError;
use crate::state::AppState;

pub(crate) fn content_type(headers: &HeaderMap) -> &str {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

/// Replace a resource's thumbnail with the raw image in the request body.
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Resource>, ApiError> {
    let data_uri = image::to_data_uri(&body, content_type(&headers))?;
    let repo = Repository::<Resource, _>::for_entity(state.store.clone());
    let resource = repo
        .modify(id, |r| r.thumbnail = Some(data_uri.clone()))
        .await?;
    Ok(Json(resource))
}
