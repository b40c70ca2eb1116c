pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cli::handlers as cli_handlers;
use crate::contact::handlers as contact_handlers;
use crate::pdf::handlers as pdf_handlers;
use crate::sections::handlers as section_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio sections
        .route("/api/v1/profile", get(section_handlers::handle_get_profile))
        .route(
            "/api/v1/projects",
            get(section_handlers::handle_list_projects),
        )
        .route(
            "/api/v1/projects/spotlight",
            get(section_handlers::handle_get_spotlight),
        )
        .route("/api/v1/skills", get(section_handlers::handle_list_skills))
        .route(
            "/api/v1/experience",
            get(section_handlers::handle_list_experience),
        )
        .route(
            "/api/v1/education",
            get(section_handlers::handle_list_education),
        )
        .route("/api/v1/blogs", get(section_handlers::handle_list_blogs))
        // CLI navigation mode
        .route("/api/v1/cli", post(cli_handlers::handle_cli_command))
        // Contact form forwarding
        .route("/api/v1/contact", post(contact_handlers::handle_contact))
        // Experimental PDF text extraction
        .route("/api/v1/pdf/extract", post(pdf_handlers::handle_pdf_extract))
        .with_state(state)
}
