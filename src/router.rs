//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations, which
//! are collected into an OpenAPI document served by Swagger UI at `/api/docs`.
//! Anything outside `/api` falls through to the static frontend.

use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router: API endpoints, Swagger UI, the CORS
/// layer, and the static frontend fallback.
///
/// Handlers sharing a path are registered in one `routes!` call so each path
/// appears once in the OpenAPI document.
pub fn routes(frontend_dir: &str) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bunkhouse", description = "Hostel room allocation API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Registration, login, and session routes"),
        (name = controller::room::ROOM_TAG, description = "Room catalogue routes"),
        (name = controller::hostel::HOSTEL_TAG, description = "Hostel catalogue routes"),
        (name = controller::application::APPLICATION_TAG, description = "Room application routes"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Notification routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::auth::create_admin))
        .routes(routes!(controller::room::list_rooms, controller::room::create_room))
        .routes(routes!(
            controller::room::get_room,
            controller::room::update_room,
            controller::room::delete_room
        ))
        .routes(routes!(controller::hostel::list_hostels))
        .routes(routes!(controller::hostel::get_hostel))
        .routes(routes!(
            controller::application::apply,
            controller::application::list_applications
        ))
        .routes(routes!(controller::application::my_applications))
        .routes(routes!(controller::application::my_assigned_room))
        .routes(routes!(controller::application::update_application))
        .routes(routes!(controller::notification::list_notifications))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback_service(
            ServeDir::new(frontend_dir)
                .not_found_service(ServeFile::new(format!("{frontend_dir}/index.html"))),
        )
        .layer(cors)
}
