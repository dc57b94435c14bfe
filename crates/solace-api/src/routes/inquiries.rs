use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use solace_core::id::EntityId;
use solace_core::keys;
use solace_core::models::inquiry::{Inquiry, InquiryStatus};
use solace_core::view::Page;
use solace_inquiries::client::InquiryClient;
use solace_storage::repository::Repository;
use solace_storage::store::KeyValueStore;

use crate::error::ApiError;
use crate::routes::{ListParams, records, view_from_params};
use crate::state::{AppState, InquiryBackend};

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: InquiryStatus,
}

/// Replace remote records by the locally stored record with the same id.
///
/// Local records the remote list does not contain are left out.
pub fn overlay_local(remote: Vec<Inquiry>, local: &[Inquiry]) -> Vec<Inquiry> {
    remote
        .into_iter()
        .map(|inquiry| {
            local
                .iter()
                .find(|l| l.id == inquiry.id)
                .cloned()
                .unwrap_or(inquiry)
        })
        .collect()
}

async fn fetch_list(client: &InquiryClient) -> Result<Vec<Inquiry>, ApiError> {
    let client = client.clone();
    Ok(tokio::task::spawn_blocking(move || client.list()).await??)
}

async fn fetch_one(client: &InquiryClient, id: EntityId) -> Result<Inquiry, ApiError> {
    let client = client.clone();
    Ok(tokio::task::spawn_blocking(move || client.get(id)).await??)
}

async fn load_all(state: &AppState) -> Result<Vec<Inquiry>, ApiError> {
    let repo = Repository::<Inquiry, _>::for_entity(state.store.clone());
    match &state.inquiries {
        InquiryBackend::Local => Ok(repo.list().await?),
        InquiryBackend::Remote(client) => {
            let remote = fetch_list(client).await?;
            Ok(overlay_local(remote, &repo.list().await?))
        }
    }
}

pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Inquiry>>, ApiError> {
    let view = view_from_params::<Inquiry>(&params)?;
    let items = load_all(&state).await?;
    Ok(Json(view.current_page(&items).cloned()))
}

pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Inquiry>, ApiError> {
    let repo = Repository::<Inquiry, _>::for_entity(state.store.clone());
    let inquiry = match &state.inquiries {
        InquiryBackend::Local => repo.get(id).await?,
        InquiryBackend::Remote(client) => {
            let remote = fetch_one(client, id).await?;
            repo.list()
                .await?
                .into_iter()
                .find(|l| l.id == id)
                .unwrap_or(remote)
        }
    };
    Ok(Json(inquiry))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Inquiry>, ApiError> {
    let Json(update) = payload?;
    let repo = Repository::<Inquiry, _>::for_entity(state.store.clone());

    if let InquiryBackend::Remote(client) = &state.inquiries {
        // The remote service is read-only; keep a local copy to hold the status.
        let remote = fetch_one(client, id).await?;
        repo.collection()
            .mutate(|items| {
                if !items.iter().any(|l| l.id == id) {
                    items.insert(0, remote.clone());
                }
                Ok(())
            })
            .await?;
    }

    let inquiry = repo.modify(id, |i| i.status = update.status).await?;
    Ok(Json(inquiry))
}

/// Inquiries arrive from the enquiry service in remote mode and cannot be
/// created, edited, or removed here.
fn ensure_local(state: &AppState) -> Result<(), ApiError> {
    match state.inquiries {
        InquiryBackend::Local => Ok(()),
        InquiryBackend::Remote(_) => Err(ApiError::MethodNotAllowed(
            "inquiries are read-only while sourced from the enquiry service".to_string(),
        )),
    }
}

pub async fn create_inquiry(
    State(state): State<AppState>,
    payload: Result<Json<Inquiry>, JsonRejection>,
) -> Result<Json<Inquiry>, ApiError> {
    ensure_local(&state)?;
    records::create_record(State(state), payload).await
}

pub async fn update_inquiry(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    payload: Result<Json<Inquiry>, JsonRejection>,
) -> Result<Json<Inquiry>, ApiError> {
    ensure_local(&state)?;
    records::update_record(State(state), Path(id), payload).await
}

/// Delete an inquiry together with its notes.
pub async fn delete_inquiry(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<Inquiry>, ApiError> {
    ensure_local(&state)?;
    let removed = Repository::<Inquiry, _>::for_entity(state.store.clone())
        .delete(id)
        .await?;
    state.store.delete(&keys::inquiry_notes(id)).await?;
    Ok(Json(removed))
}
