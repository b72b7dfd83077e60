use axum::{extract::State, response::Redirect};
use validator::Validate;

use crate::{
	error::AppError,
	extract::{Form, Page, Path, Unvalidated},
	repo, Database,
};

use super::model;

/// Lists every user, ordered by last name.
pub async fn list_users(
	State(database): State<Database>,
) -> Result<Page<model::UsersPage>, AppError> {
	let users = repo::user::list(&database).await?;

	Ok(Page(model::UsersPage { users }))
}

pub async fn new_user() -> Page<model::UserFormPage> {
	Page(model::UserFormPage::create())
}

pub async fn create_user(
	State(database): State<Database>,
	Form(input): Form<model::UserInput>,
) -> Result<Redirect, AppError> {
	repo::user::create(&database, input.into()).await?;

	Ok(Redirect::to("/users"))
}

/// Shows a user along with the posts they own.
pub async fn show_user(
	State(database): State<Database>,
	Path(user_id): Path<i64>,
) -> Result<Page<model::UserPage>, AppError> {
	let user = repo::user::get(&database, user_id).await?;
	let posts = repo::user::posts(&database, user_id).await?;

	Ok(Page(model::UserPage { user, posts }))
}

pub async fn edit_user(
	State(database): State<Database>,
	Path(user_id): Path<i64>,
) -> Result<Page<model::UserFormPage>, AppError> {
	let user = repo::user::get(&database, user_id).await?;

	Ok(Page(model::UserFormPage::edit(user)))
}

/// Overwrites a user. A missing user is reported before any form errors.
pub async fn update_user(
	State(database): State<Database>,
	Path(user_id): Path<i64>,
	Unvalidated(input): Unvalidated<model::UserInput>,
) -> Result<Redirect, AppError> {
	repo::user::get(&database, user_id).await?;
	input.validate()?;

	repo::user::update(&database, user_id, input.into()).await?;

	Ok(Redirect::to("/users"))
}

/// Deletes a user together with everything they own.
pub async fn delete_user(
	State(database): State<Database>,
	Path(user_id): Path<i64>,
) -> Result<Redirect, AppError> {
	repo::user::delete(&database, user_id).await?;

	Ok(Redirect::to("/users"))
}
