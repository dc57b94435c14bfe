pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, put};
use tower_http::cors::{Any, CorsLayer};

use solace_core::models::assessment::Assessment;
use solace_core::models::resource::Resource;
use solace_core::models::user::User;

use routes::{assessments, health, inquiries, notes, records, resources, users};
use state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/assessments",
            get(records::list_records::<Assessment>).post(records::create_record::<Assessment>),
        )
        .route(
            "/assessments/{id}",
            get(records::get_record::<Assessment>)
                .put(records::update_record::<Assessment>)
                .delete(records::delete_record::<Assessment>),
        )
        .route("/assessments/{id}/active", put(assessments::set_active))
        .route(
            "/resources",
            get(records::list_records::<Resource>).post(records::create_record::<Resource>),
        )
        .route(
            "/resources/{id}",
            get(records::get_record::<Resource>)
                .put(records::update_record::<Resource>)
                .delete(records::delete_record::<Resource>),
        )
        .route("/resources/{id}/thumbnail", put(resources::upload_thumbnail))
        .route(
            "/users",
            get(records::list_records::<User>).post(records::create_record::<User>),
        )
        .route("/users/export.csv", get(users::export_csv))
        .route(
            "/users/{id}",
            get(records::get_record::<User>)
                .put(records::update_record::<User>)
                .delete(records::delete_record::<User>),
        )
        .route("/users/{id}/profile-pic", put(users::upload_profile_pic))
        .route(
            "/inquiries",
            get(inquiries::list_inquiries).post(inquiries::create_inquiry),
        )
        .route(
            "/inquiries/{id}",
            get(inquiries::get_inquiry)
                .put(inquiries::update_inquiry)
                .delete(inquiries::delete_inquiry),
        )
        .route("/inquiries/{id}/status", put(inquiries::update_status))
        .route(
            "/inquiries/{id}/notes",
            get(notes::list_notes).post(notes::add_note),
        )
        .route(
            "/inquiries/{id}/notes/{note_id}",
            delete(notes::delete_note),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
