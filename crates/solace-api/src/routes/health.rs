use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::{AppState, InquiryBackend};

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let inquiries = match &state.inquiries {
        InquiryBackend::Local => "local",
        InquiryBackend::Remote(_) => "remote",
    };
    Json(json!({
        "status": "ok",
        "storage": state.store.kind(),
        "inquiries": inquiries,
    }))
}
