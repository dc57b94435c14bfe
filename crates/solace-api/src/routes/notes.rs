use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use solace_core::id::EntityId;
use solace_core::keys;
use solace_core::models::note::Note;
use solace_storage::any::AnyStore;
use solace_storage::repository::Repository;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NewNote {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: Option<String>,
}

fn notes_for(state: &AppState, inquiry_id: EntityId) -> Repository<Note, Arc<AnyStore>> {
    Repository::new(state.store.clone(), keys::inquiry_notes(inquiry_id))
}

/// Newest first.
pub async fn list_notes(
    State(state): State<AppState>,
    Path(inquiry_id): Path<EntityId>,
) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(notes_for(&state, inquiry_id).list().await?))
}

pub async fn add_note(
    State(state): State<AppState>,
    Path(inquiry_id): Path<EntityId>,
    payload: Result<Json<NewNote>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let Json(new) = payload?;
    let draft = Note {
        id: EntityId::default(),
        inquiry_id,
        text: new.text,
        author: new.author,
        created_at: jiff::Timestamp::now(),
    };
    Ok(Json(notes_for(&state, inquiry_id).create(draft).await?))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path((inquiry_id, note_id)): Path<(EntityId, EntityId)>,
) -> Result<Json<Note>, ApiError> {
    Ok(Json(notes_for(&state, inquiry_id).delete(note_id).await?))
}
