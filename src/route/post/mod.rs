use axum::{routing::get, Router};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/users/:id/posts/new", get(new_post).post(create_post))
		.route("/users/posts/:id", get(show_post))
		.route("/users/edit/posts/:id", get(edit_post).post(update_post))
		.route("/users/posts/delete/:id", get(delete_post))
}
