//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/playthroughs` - List playthroughs, most recently updated first
/// - `POST /api/playthroughs` - Create a playthrough
/// - `GET /api/playthroughs/{playthrough_id}` - Get a playthrough with its entries
/// - `PUT /api/playthroughs/{playthrough_id}` - Update a playthrough
/// - `DELETE /api/playthroughs/{playthrough_id}` - Delete a playthrough and its entries
/// - `POST /api/playthroughs/{playthrough_id}/entries` - Log an entry
/// - `DELETE /api/entries/{entry_id}` - Delete an entry
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and Swagger UI at
/// `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be given state and merged into the main application
/// router.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "PkmnLog", description = "PkmnLog API"), tags(
        (name = controller::playthrough::PLAYTHROUGH_TAG, description = "Playthrough API routes"),
        (name = controller::entry::ENTRY_TAG, description = "Entry API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::playthrough::list_playthroughs,
            controller::playthrough::create_playthrough
        ))
        .routes(routes!(
            controller::playthrough::get_playthrough,
            controller::playthrough::update_playthrough,
            controller::playthrough::delete_playthrough
        ))
        .routes(routes!(controller::entry::create_entry))
        .routes(routes!(controller::entry::delete_entry))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
