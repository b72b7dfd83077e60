use crate::{
	model::{Post, Tag},
	Database,
};

use super::{
	duplicate_as,
	link::{self, Owner},
	Entity, RepoError, RepoResult,
};

/// The writable fields of a tag, including its full post set.
#[derive(Debug, Clone, Default)]
pub struct TagFields {
	pub name: String,
	pub post_ids: Vec<i64>,
}

fn name_taken(name: &str) -> impl FnOnce() -> String + '_ {
	move || format!("tag name {name:?} is already taken")
}

/// Returns all tags, ordered by name.
pub async fn list(database: &Database) -> RepoResult<Vec<Tag>> {
	let tags = sqlx::query_as::<_, Tag>("SELECT * FROM tags ORDER BY name")
		.fetch_all(database)
		.await?;

	Ok(tags)
}

pub async fn get(database: &Database, id: i64) -> RepoResult<Tag> {
	sqlx::query_as::<_, Tag>("SELECT * FROM tags WHERE id = ?")
		.bind(id)
		.fetch_optional(database)
		.await?
		.ok_or(RepoError::not_found(Entity::Tag, id))
}

/// Returns the posts linked to a tag, newest first.
pub async fn posts(database: &Database, id: i64) -> RepoResult<Vec<Post>> {
	let posts = sqlx::query_as::<_, Post>(
		r#"
			SELECT posts.* FROM posts
			JOIN posts_tags ON posts_tags.post_id = posts.id
			WHERE posts_tags.tag_id = ?
			ORDER BY posts.created_at DESC, posts.id DESC
		"#,
	)
	.bind(id)
	.fetch_all(database)
	.await?;

	Ok(posts)
}

/// Creates a tag and links it to every existing post in `fields.post_ids`.
///
/// Fails with [`RepoError::Duplicate`] if the name is already in use.
#[tracing::instrument(skip_all, fields(name = %fields.name))]
pub async fn create(database: &Database, fields: TagFields) -> RepoResult<Tag> {
	let mut tx = database.begin().await?;

	let tag = sqlx::query_as::<_, Tag>("INSERT INTO tags (name) VALUES (?) RETURNING *")
		.bind(&fields.name)
		.fetch_one(&mut *tx)
		.await
		.map_err(duplicate_as(name_taken(&fields.name)))?;

	let diff = link::replace(&mut tx, Owner::Tag(tag.id), &fields.post_ids).await?;

	tx.commit().await?;

	tracing::info!(tag = tag.id, posts = diff.added.len(), "created tag");

	Ok(tag)
}

/// Renames an existing tag and replaces its post set.
#[tracing::instrument(skip(database, fields))]
pub async fn update(database: &Database, id: i64, fields: TagFields) -> RepoResult<Tag> {
	let mut tx = database.begin().await?;

	let tag = sqlx::query_as::<_, Tag>("UPDATE tags SET name = ? WHERE id = ? RETURNING *")
		.bind(&fields.name)
		.bind(id)
		.fetch_optional(&mut *tx)
		.await
		.map_err(duplicate_as(name_taken(&fields.name)))?
		.ok_or(RepoError::not_found(Entity::Tag, id))?;

	let diff = link::replace(&mut tx, Owner::Tag(id), &fields.post_ids).await?;

	tx.commit().await?;

	tracing::info!(
		added = diff.added.len(),
		removed = diff.removed.len(),
		"updated tag"
	);

	Ok(tag)
}

#[tracing::instrument(skip(database))]
pub async fn delete(database: &Database, id: i64) -> RepoResult<()> {
	let mut tx = database.begin().await?;

	sqlx::query("DELETE FROM posts_tags WHERE tag_id = ?")
		.bind(id)
		.execute(&mut *tx)
		.await?;

	let tag = sqlx::query("DELETE FROM tags WHERE id = ?")
		.bind(id)
		.execute(&mut *tx)
		.await?;

	if tag.rows_affected() == 0 {
		return Err(RepoError::not_found(Entity::Tag, id));
	}

	tx.commit().await?;

	tracing::info!("deleted tag");

	Ok(())
}
