use axum::{extract::State, response::Redirect};
use validator::Validate;

use crate::{
	error::AppError,
	extract::{Page, Path, Unvalidated},
	repo, Database,
};

use super::model;

/// Shows the form for adding a post to a user, with every tag as a choice.
pub async fn new_post(
	State(database): State<Database>,
	Path(user_id): Path<i64>,
) -> Result<Page<model::PostFormPage>, AppError> {
	let author = repo::user::get(&database, user_id).await?;
	let tags = repo::tag::list(&database).await?;

	Ok(Page(model::PostFormPage::create(&author, tags)))
}

pub async fn create_post(
	State(database): State<Database>,
	Path(user_id): Path<i64>,
	Unvalidated(input): Unvalidated<model::PostInput>,
) -> Result<Redirect, AppError> {
	repo::user::get(&database, user_id).await?;
	input.validate()?;

	repo::post::create(&database, user_id, input.into()).await?;

	Ok(Redirect::to("/users"))
}

/// Shows a single post with its author and tags.
pub async fn show_post(
	State(database): State<Database>,
	Path(post_id): Path<i64>,
) -> Result<Page<model::PostPage>, AppError> {
	let post = repo::post::get(&database, post_id).await?;
	let author = repo::user::get(&database, post.user_id).await?;
	let tags = repo::post::tags(&database, post_id).await?;

	Ok(Page(model::PostPage { post, author, tags }))
}

pub async fn edit_post(
	State(database): State<Database>,
	Path(post_id): Path<i64>,
) -> Result<Page<model::PostFormPage>, AppError> {
	let post = repo::post::get(&database, post_id).await?;
	let linked = repo::post::tags(&database, post_id).await?;
	let tags = repo::tag::list(&database).await?;

	Ok(Page(model::PostFormPage::edit(post, tags, &linked)))
}

/// Updates a post, replacing its tag set with the submitted one.
pub async fn update_post(
	State(database): State<Database>,
	Path(post_id): Path<i64>,
	Unvalidated(input): Unvalidated<model::PostInput>,
) -> Result<Redirect, AppError> {
	repo::post::get(&database, post_id).await?;
	input.validate()?;

	repo::post::update(&database, post_id, input.into()).await?;

	Ok(Redirect::to("/users"))
}

pub async fn delete_post(
	State(database): State<Database>,
	Path(post_id): Path<i64>,
) -> Result<Redirect, AppError> {
	repo::post::delete(&database, post_id).await?;

	Ok(Redirect::to("/users"))
}
