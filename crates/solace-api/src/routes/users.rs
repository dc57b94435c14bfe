use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::IntoResponse;

use solace_core::id::EntityId;
use solace_core::image;
use solace_core::models::user::User;
use solace_export::csv;
use solace_storage::repository::Repository;

use crate::error::ApiError;
use crate::routes::resources::content_type;
use crate::routes::{ListParams, view_from_params};
use crate::state::AppState;

pub async fn upload_profile_pic(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let data_uri = image::to_data_uri(&body, content_type(&headers))?;
    let repo = Repository::<User, _>::for_entity(state.store.clone());
    let user = repo
        .modify(id, |u| u.profile_pic = Some(data_uri.clone()))
        .await?;
    Ok(Json(user))
}

/// Download the filtered user list (all pages) as CSV.
pub async fn export_csv(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let view = view_from_params::<User>(&params)?;
    let users = Repository::<User, _>::for_entity(state.store.clone())
        .list()
        .await?;
    let filtered: Vec<User> = view.filter(&users).into_iter().cloned().collect();
    let body = csv::users_to_csv(&filtered)?;

    Ok((
        [
            (CONTENT_TYPE, csv::CONTENT_TYPE),
            (CONTENT_DISPOSITION, "attachment; filename=\"users.csv\""),
        ],
        body,
    ))
}
