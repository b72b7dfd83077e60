use axum::{extract::State, response::Redirect};
use validator::Validate;

use crate::{
	error::AppError,
	extract::{Form, Page, Path, Unvalidated},
	repo, Database,
};

use super::model;

/// Lists every tag, ordered by name.
pub async fn list_tags(State(database): State<Database>) -> Result<Page<model::TagsPage>, AppError> {
	let tags = repo::tag::list(&database).await?;

	Ok(Page(model::TagsPage { tags }))
}

/// Shows the form for creating a tag, with every post as a choice.
pub async fn new_tag(
	State(database): State<Database>,
) -> Result<Page<model::TagFormPage>, AppError> {
	let posts = repo::post::list(&database).await?;

	Ok(Page(model::TagFormPage::create(posts)))
}

pub async fn create_tag(
	State(database): State<Database>,
	Form(input): Form<model::TagInput>,
) -> Result<Redirect, AppError> {
	repo::tag::create(&database, input.into()).await?;

	Ok(Redirect::to("/tags"))
}

pub async fn show_tag(
	State(database): State<Database>,
	Path(tag_id): Path<i64>,
) -> Result<Page<model::TagPage>, AppError> {
	let tag = repo::tag::get(&database, tag_id).await?;
	let posts = repo::tag::posts(&database, tag_id).await?;

	Ok(Page(model::TagPage { tag, posts }))
}

pub async fn edit_tag(
	State(database): State<Database>,
	Path(tag_id): Path<i64>,
) -> Result<Page<model::TagFormPage>, AppError> {
	let tag = repo::tag::get(&database, tag_id).await?;
	let linked = repo::tag::posts(&database, tag_id).await?;
	let posts = repo::post::list(&database).await?;

	Ok(Page(model::TagFormPage::edit(tag, posts, &linked)))
}

/// Renames a tag and replaces its post set with the submitted one.
pub async fn update_tag(
	State(database): State<Database>,
	Path(tag_id): Path<i64>,
	Unvalidated(input): Unvalidated<model::TagInput>,
) -> Result<Redirect, AppError> {
	repo::tag::get(&database, tag_id).await?;
	input.validate()?;

	repo::tag::update(&database, tag_id, input.into()).await?;

	Ok(Redirect::to("/tags"))
}

pub async fn delete_tag(
	State(database): State<Database>,
	Path(tag_id): Path<i64>,
) -> Result<Redirect, AppError> {
	repo::tag::delete(&database, tag_id).await?;

	Ok(Redirect::to("/tags"))
}
