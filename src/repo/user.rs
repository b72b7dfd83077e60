use crate::{
	model::{Post, User},
	Database,
};

use super::{Entity, RepoError, RepoResult};

/// The writable fields of a user.
#[derive(Debug, Clone, Default)]
pub struct UserFields {
	pub first_name: String,
	pub middle_name: Option<String>,
	pub last_name: String,
	pub image_url: Option<String>,
}

/// Returns all users, ordered by last name.
pub async fn list(database: &Database) -> RepoResult<Vec<User>> {
	let users = sqlx::query_as::<_, User>(
		r#"
			SELECT * FROM users
			ORDER BY last_name, first_name, id
		"#,
	)
	.fetch_all(database)
	.await?;

	Ok(users)
}

pub async fn get(database: &Database, id: i64) -> RepoResult<User> {
	sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
		.bind(id)
		.fetch_optional(database)
		.await?
		.ok_or(RepoError::not_found(Entity::User, id))
}

/// Returns the posts owned by a user, newest first.
pub async fn posts(database: &Database, id: i64) -> RepoResult<Vec<Post>> {
	let posts = sqlx::query_as::<_, Post>(
		r#"
			SELECT * FROM posts
			WHERE user_id = ?
			ORDER BY created_at DESC, id DESC
		"#,
	)
	.bind(id)
	.fetch_all(database)
	.await?;

	Ok(posts)
}

#[tracing::instrument(skip_all)]
pub async fn create(database: &Database, fields: UserFields) -> RepoResult<User> {
	let user = sqlx::query_as::<_, User>(
		r#"
			INSERT INTO users (first_name, middle_name, last_name, image_url)
			VALUES (?, ?, ?, ?)
			RETURNING *
		"#,
	)
	.bind(fields.first_name)
	.bind(fields.middle_name)
	.bind(fields.last_name)
	.bind(fields.image_url)
	.fetch_one(database)
	.await?;

	tracing::info!(user = user.id, "created user");

	Ok(user)
}

/// Overwrites every writable field of an existing user.
#[tracing::instrument(skip(database, fields))]
pub async fn update(database: &Database, id: i64, fields: UserFields) -> RepoResult<User> {
	let user = sqlx::query_as::<_, User>(
		r#"
			UPDATE users
			SET first_name = ?, middle_name = ?, last_name = ?, image_url = ?
			WHERE id = ?
			RETURNING *
		"#,
	)
	.bind(fields.first_name)
	.bind(fields.middle_name)
	.bind(fields.last_name)
	.bind(fields.image_url)
	.bind(id)
	.fetch_optional(database)
	.await?
	.ok_or(RepoError::not_found(Entity::User, id))?;

	tracing::info!("updated user");

	Ok(user)
}

/// Deletes a user along with their posts and the posts' tag links.
#[tracing::instrument(skip(database))]
pub async fn delete(database: &Database, id: i64) -> RepoResult<()> {
	let mut tx = database.begin().await?;

	sqlx::query(
		r#"
			DELETE FROM posts_tags
			WHERE post_id IN (SELECT id FROM posts WHERE user_id = ?)
		"#,
	)
	.bind(id)
	.execute(&mut *tx)
	.await?;

	let posts = sqlx::query("DELETE FROM posts WHERE user_id = ?")
		.bind(id)
		.execute(&mut *tx)
		.await?;

	let user = sqlx::query("DELETE FROM users WHERE id = ?")
		.bind(id)
		.execute(&mut *tx)
		.await?;

	if user.rows_affected() == 0 {
		return Err(RepoError::not_found(Entity::User, id));
	}

	tx.commit().await?;

	tracing::info!(posts = posts.rows_affected(), "deleted user");

	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;

	fn bob() -> UserFields {
		UserFields {
			first_name: "Bob".into(),
			last_name: "Newhart".into(),
			image_url: Some("https://tinyurl.com/3pb9wkad".into()),
			..Default::default()
		}
	}

	#[sqlx::test]
	async fn test_list_ordered_by_last_name(pool: Database) {
		create(&pool, bob()).await.unwrap();
		create(
			&pool,
			UserFields {
				first_name: "Conan".into(),
				last_name: "OBrien".into(),
				..Default::default()
			},
		)
		.await
		.unwrap();
		create(
			&pool,
			UserFields {
				first_name: "Joe".into(),
				middle_name: Some("Don".into()),
				last_name: "Baker".into(),
				..Default::default()
			},
		)
		.await
		.unwrap();

		let names = list(&pool)
			.await
			.unwrap()
			.iter()
			.map(User::full_name)
			.collect::<Vec<_>>();

		assert_eq!(names, ["Joe Don Baker", "Bob Newhart", "Conan OBrien"]);
	}

	#[sqlx::test]
	async fn test_update_overwrites_fields(pool: Database) {
		let user = create(&pool, bob()).await.unwrap();

		let updated = update(
			&pool,
			user.id,
			UserFields {
				first_name: "Bud".into(),
				last_name: "Newhart".into(),
				..Default::default()
			},
		)
		.await
		.unwrap();

		assert_eq!(updated.id, user.id);
		assert_eq!(updated.full_name(), "Bud Newhart");
		assert_eq!(updated.image_url, None);
	}

	#[sqlx::test]
	async fn test_missing_user_is_not_found(pool: Database) {
		assert!(matches!(
			get(&pool, 42).await,
			Err(RepoError::NotFound { entity: Entity::User, id: 42 })
		));
		assert!(matches!(
			update(&pool, 42, bob()).await,
			Err(RepoError::NotFound { .. })
		));
		assert!(matches!(delete(&pool, 42).await, Err(RepoError::NotFound { .. })));
	}

	#[sqlx::test]
	async fn test_delete_removes_user(pool: Database) {
		let user = create(&pool, bob()).await.unwrap();

		delete(&pool, user.id).await.unwrap();

		assert!(list(&pool).await.unwrap().is_empty());
	}

	#[sqlx::test]
	async fn test_first_name_too_long_is_rejected(pool: Database) {
		let result = create(
			&pool,
			UserFields {
				first_name: "A".repeat(21),
				last_name: "Newhart".into(),
				..Default::default()
			},
		)
		.await;

		assert!(matches!(result, Err(RepoError::Database(..))));
	}
}
