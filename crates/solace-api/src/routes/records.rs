//! Handlers shared by every locally stored entity.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};

use solace_core::entity::Keyed;
use solace_core::id::EntityId;
use solace_core::validation::Validate;
use solace_core::view::{Filterable, Page};
use solace_storage::repository::Repository;

use crate::error::ApiError;
use crate::routes::{ListParams, view_from_params};
use crate::state::AppState;

pub async fn list_records<T>(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<T>>, ApiError>
where
    T: Keyed + Validate + Filterable,
{
    let view = view_from_params::<T>(&params)?;
    let items = Repository::<T, _>::for_entity(state.store.clone()).list().await?;
    Ok(Json(view.current_page(&items).cloned()))
}

pub async fn get_record<T>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<T>, ApiError>
where
    T: Keyed + Validate,
{
    let record = Repository::<T, _>::for_entity(state.store.clone()).get(id).await?;
    Ok(Json(record))
}

pub async fn create_record<T>(
    State(state): State<AppState>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, ApiError>
where
    T: Keyed + Validate,
{
    let Json(draft) = payload?;
    let created = Repository::<T, _>::for_entity(state.store.clone())
        .create(draft)
        .await?;
    Ok(Json(created))
}

pub async fn update_record<T>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, ApiError>
where
    T: Keyed + Validate,
{
    let Json(draft) = payload?;
    let updated = Repository::<T, _>::for_entity(state.store.clone())
        .update(id, draft)
        .await?;
    Ok(Json(updated))
}

pub async fn delete_record<T>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<T>, ApiError>
where
    T: Keyed + Validate,
{
    let removed = Repository::<T, _>::for_entity(state.store.clone())
        .delete(id)
        .await?;
    Ok(Json(removed))
}
