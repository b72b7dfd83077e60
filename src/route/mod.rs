use axum::{http::Uri, response::Redirect, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{error::AppError, AppState};

pub mod model;
pub mod post;
pub mod tag;
pub mod user;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/", get(|| async { Redirect::to("/users") }))
		.merge(user::routes())
		.merge(post::routes())
		.merge(tag::routes())
		.fallback(not_found)
		.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
		.with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
	AppError::NoRoute(uri)
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[sqlx::test]
	async fn test_unknown_route(pool: Database) {
		let app = app(pool);

		let response = app.get("/nowhere").await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
		assert!(response.text().contains("404"));
	}
}
