use axum::{routing::get, Router};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/tags", get(list_tags))
		.route("/tags/new", get(new_tag).post(create_tag))
		.route("/tags/:id", get(show_tag))
		.route("/tags/edit/:id", get(edit_tag).post(update_tag))
		.route("/tags/delete/:id", get(delete_tag))
}
