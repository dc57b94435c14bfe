use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use solace_core::id::EntityId;
use solace_core::models::assessment::Assessment;
use solace_storage::repository::Repository;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ActiveUpdate {
    pub active: bool,
}

/// Toggle the soft-delete flag without resubmitting the whole form.
pub async fn set_active(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<ActiveUpdate>, JsonRejection>,
) -> Result<Json<Assessment>, ApiError> {
    let Json(update) = payload?;
    let repo = Repository::<Assessment, _>::for_entity(state.store.clone());
    let assessment = repo.modify(id, |a| a.active = update.active).await?;
    Ok(Json(assessment))
}
