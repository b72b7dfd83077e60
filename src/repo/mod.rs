//! Persistence layer.
//!
//! Every function takes the database pool as its persistence context.
//! Mutations open a transaction and commit it before returning, so a failure
//! part way through leaves the previously committed state untouched.

pub mod post;
pub mod tag;
pub mod user;

mod link;

use std::fmt;

use axum::http::StatusCode;

use crate::error::{ErrorShape, Message};

/// The kind of row a [`RepoError::NotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
	User,
	Post,
	Tag,
}

impl fmt::Display for Entity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::User => "user",
			Self::Post => "post",
			Self::Tag => "tag",
		})
	}
}

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
	#[error("unknown {entity} {id}")]
	NotFound { entity: Entity, id: i64 },
	#[error("{0}")]
	Duplicate(String),
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;

impl RepoError {
	pub fn not_found(entity: Entity, id: i64) -> Self {
		Self::NotFound { entity, id }
	}
}

impl ErrorShape for RepoError {
	fn status(&self) -> StatusCode {
		match self {
			Self::NotFound { .. } => StatusCode::NOT_FOUND,
			Self::Duplicate(..) => StatusCode::CONFLICT,
			Self::Database(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn messages(&self) -> Vec<Message> {
		match self {
			Self::NotFound { .. } | Self::Duplicate(..) => vec![Message {
				field: None,
				content: self.to_string(),
			}],
			Self::Database(..) => Vec::new(),
		}
	}
}

/// Maps a unique constraint violation to [`RepoError::Duplicate`].
fn duplicate_as(message: impl FnOnce() -> String) -> impl FnOnce(sqlx::Error) -> RepoError {
	move |error| match error {
		sqlx::Error::Database(ref e) if e.is_unique_violation() => RepoError::Duplicate(message()),
		error => RepoError::Database(error),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_not_found_status() {
		let error = RepoError::not_found(Entity::Tag, 7);

		assert_eq!(error.status(), StatusCode::NOT_FOUND);
		assert_eq!(error.to_string(), "unknown tag 7");
	}

	#[test]
	fn test_database_error_hides_details() {
		let error = RepoError::Database(sqlx::Error::RowNotFound);

		assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert!(error.messages().is_empty());
	}
}
