use crate::{
	model::{Post, Tag},
	Database,
};

use super::{
	link::{self, Owner},
	Entity, RepoError, RepoResult,
};

/// The writable fields of a post, including its full tag set.
#[derive(Debug, Clone, Default)]
pub struct PostFields {
	pub title: String,
	pub content: String,
	pub tag_ids: Vec<i64>,
}

/// Returns all posts ordered by title, used for choosing a tag's posts.
pub async fn list(database: &Database) -> RepoResult<Vec<Post>> {
	let posts = sqlx::query_as::<_, Post>("SELECT * FROM posts ORDER BY title, id")
		.fetch_all(database)
		.await?;

	Ok(posts)
}

pub async fn get(database: &Database, id: i64) -> RepoResult<Post> {
	sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE id = ?")
		.bind(id)
		.fetch_optional(database)
		.await?
		.ok_or(RepoError::not_found(Entity::Post, id))
}

/// Returns the tags linked to a post, ordered by name.
pub async fn tags(database: &Database, id: i64) -> RepoResult<Vec<Tag>> {
	let tags = sqlx::query_as::<_, Tag>(
		r#"
			SELECT tags.* FROM tags
			JOIN posts_tags ON posts_tags.tag_id = tags.id
			WHERE posts_tags.post_id = ?
			ORDER BY tags.name
		"#,
	)
	.bind(id)
	.fetch_all(database)
	.await?;

	Ok(tags)
}

/// Creates a post owned by `user_id` and links it to every existing tag in
/// `fields.tag_ids`.
#[tracing::instrument(skip(database, fields))]
pub async fn create(database: &Database, user_id: i64, fields: PostFields) -> RepoResult<Post> {
	let mut tx = database.begin().await?;

	let owner = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
		.bind(user_id)
		.fetch_optional(&mut *tx)
		.await?;

	if owner.is_none() {
		return Err(RepoError::not_found(Entity::User, user_id));
	}

	let post = sqlx::query_as::<_, Post>(
		r#"
			INSERT INTO posts (title, content, user_id)
			VALUES (?, ?, ?)
			RETURNING *
		"#,
	)
	.bind(fields.title)
	.bind(fields.content)
	.bind(user_id)
	.fetch_one(&mut *tx)
	.await?;

	let diff = link::replace(&mut tx, Owner::Post(post.id), &fields.tag_ids).await?;

	tx.commit().await?;

	tracing::info!(post = post.id, tags = diff.added.len(), "created post");

	Ok(post)
}

/// Replaces the title, content and tag set of an existing post.
///
/// The owner and creation time never change.
#[tracing::instrument(skip(database, fields))]
pub async fn update(database: &Database, id: i64, fields: PostFields) -> RepoResult<Post> {
	let mut tx = database.begin().await?;

	let post = sqlx::query_as::<_, Post>(
		r#"
			UPDATE posts
			SET title = ?, content = ?
			WHERE id = ?
			RETURNING *
		"#,
	)
	.bind(fields.title)
	.bind(fields.content)
	.bind(id)
	.fetch_optional(&mut *tx)
	.await?
	.ok_or(RepoError::not_found(Entity::Post, id))?;

	let diff = link::replace(&mut tx, Owner::Post(id), &fields.tag_ids).await?;

	tx.commit().await?;

	tracing::info!(
		added = diff.added.len(),
		removed = diff.removed.len(),
		"updated post"
	);

	Ok(post)
}

#[tracing::instrument(skip(database))]
pub async fn delete(database: &Database, id: i64) -> RepoResult<()> {
	let mut tx = database.begin().await?;

	sqlx::query("DELETE FROM posts_tags WHERE post_id = ?")
		.bind(id)
		.execute(&mut *tx)
		.await?;

	let post = sqlx::query("DELETE FROM posts WHERE id = ?")
		.bind(id)
		.execute(&mut *tx)
		.await?;

	if post.rows_affected() == 0 {
		return Err(RepoError::not_found(Entity::Post, id));
	}

	tx.commit().await?;

	tracing::info!("deleted post");

	Ok(())
}
