use axum::{routing::get, Router};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> Router<AppState> {
	use route::*;

	Router::new()
		.route("/users", get(list_users))
		.route("/users/new", get(new_user).post(create_user))
		.route("/users/:id", get(show_user))
		.route("/users/edit/:id", get(edit_user).post(update_user))
		.route("/users/delete/:id", get(delete_user))
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[sqlx::test]
	async fn test_list_users(pool: Database) {
		fixture::user(&pool, "Bob", "Newhart").await;
		let app = app(pool);

		let response = app.get("/").await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
		assert_eq!(location(&response), "/users");

		let response = app.get("/users").await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert!(response.text().contains("Bob Newhart"));
	}

	#[sqlx::test]
	async fn test_view_user(pool: Database) {
		let user = fixture::user(&pool, "Bob", "Newhart").await;
		let app = app(pool);

		let response = app.get(&format!("/users/{}", user.id)).await;

		assert_eq!(response.status_code(), StatusCode::OK);
		let html = response.text();

		assert!(html.contains(r#"alt="Picture of Bob Newhart""#));
		assert!(html.contains("tinyurl.com"));
	}

	#[sqlx::test]
	async fn test_add_user(pool: Database) {
		let app = app(pool);

		let response = app
			.post("/users/new")
			.form(&json!({
				"first_name": "Conan",
				"middle_name": "",
				"last_name": "OBrien",
				"image_url": "http://fake_url.com",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
		assert_eq!(location(&response), "/users");

		let response = app.get("/users").await;

		assert!(response.text().contains("Conan OBrien"));
	}

	#[sqlx::test]
	async fn test_add_user_with_blank_name(pool: Database) {
		let app = app(pool);

		let response = app
			.post("/users/new")
			.form(&json!({
				"first_name": "  ",
				"last_name": "OBrien",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
		assert!(response.text().contains("first_name"));

		let response = app
			.post("/users/new")
			.form(&json!({ "first_name": "Conan" }))
			.await;

		assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	}

	#[sqlx::test]
	async fn test_add_user_with_long_name(pool: Database) {
		let app = app(pool);

		let response = app
			.post("/users/new")
			.form(&json!({
				"first_name": "Bartholomew-Maximilian",
				"last_name": "OBrien",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
	}

	#[sqlx::test]
	async fn test_add_user_with_padded_name(pool: Database) {
		let app = app(pool.clone());
		let first_name = format!("  Conan{}", " ".repeat(20));

		let response = app
			.post("/users/new")
			.form(&json!({
				"first_name": first_name,
				"last_name": "OBrien ",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

		let users = crate::repo::user::list(&pool).await.unwrap();

		assert_eq!(users[0].first_name, "Conan");
		assert_eq!(users[0].last_name, "OBrien");
	}

	#[sqlx::test]
	async fn test_edit_user(pool: Database) {
		let user = fixture::user(&pool, "Bob", "Newhart").await;
		let app = app(pool);

		let response = app.get(&format!("/users/edit/{}", user.id)).await;

		assert_eq!(response.status_code(), StatusCode::OK);
		assert!(response.text().contains(r#"value="Bob""#));

		let response = app
			.post(&format!("/users/edit/{}", user.id))
			.form(&json!({
				"first_name": "Bud",
				"middle_name": "",
				"last_name": "Newhart",
				"image_url": "http://fake_url.com",
			}))
			.await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

		let response = app.get("/users").await;

		assert!(response.text().contains("Bud Newhart"));
	}

	#[sqlx::test]
	async fn test_delete_user(pool: Database) {
		let user = fixture::user(&pool, "Bob", "Newhart").await;
		let app = app(pool);

		let response = app.get(&format!("/users/delete/{}", user.id)).await;

		assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
		assert_eq!(location(&response), "/users");

		let response = app.get("/users").await;

		assert!(!response.text().contains("Bob Newhart"));
	}

	#[sqlx::test]
	async fn test_missing_user(pool: Database) {
		let app = app(pool);

		assert_eq!(app.get("/users/99").await.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(app.get("/users/edit/99").await.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(app.get("/users/delete/99").await.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(app.get("/users/bob").await.status_code(), StatusCode::NOT_FOUND);

		let response = app
			.post("/users/edit/99")
			.form(&json!({ "first_name": "Bud", "last_name": "Newhart" }))
			.await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

		// a missing user wins over an invalid form
		let response = app
			.post("/users/edit/99")
			.form(&json!({ "first_name": "", "last_name": "Newhart" }))
			.await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	}
}
