use crate::{
    handlers::{
        book_handler::BookHandler,
        health_handler::{db_health_check, health_checker_handler},
    },
    AppState,
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub fn create_routes(app_state: AppState, cors: CorsLayer) -> Router {
    let upload_dir = app_state.config.upload_dir.clone();

    Router::new()
        .nest("/book", book_routes())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .route("/healthy", get(health_checker_handler))
        .route("/db-health", get(db_health_check))
        .with_state(app_state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(BookHandler::get_statuses))
        .route("/genres", get(BookHandler::get_genres))
        .route(
            "/",
            get(BookHandler::get_books).post(BookHandler::create_book),
        )
        .route(
            "/{id}",
            put(BookHandler::update_book).delete(BookHandler::delete_book),
        )
        // 10MB request cap, the 5MB image limit is enforced separately with a 400
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
}
