//! Maintenance of the `posts_tags` join table.

use std::collections::BTreeSet;

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::model::PostTag;

/// The side of the association whose link set is being replaced.
#[derive(Debug, Clone, Copy)]
pub enum Owner {
	Post(i64),
	Tag(i64),
}

impl Owner {
	fn id(self) -> i64 {
		match self {
			Self::Post(id) | Self::Tag(id) => id,
		}
	}

	/// The join table column holding the owner's id.
	fn column(self) -> &'static str {
		match self {
			Self::Post(..) => "post_id",
			Self::Tag(..) => "tag_id",
		}
	}

	/// The join table column holding the linked entity's id.
	fn other_column(self) -> &'static str {
		match self {
			Self::Post(..) => "tag_id",
			Self::Tag(..) => "post_id",
		}
	}

	/// The id on the other side of a link.
	fn other(self, link: PostTag) -> i64 {
		match self {
			Self::Post(..) => link.tag_id,
			Self::Tag(..) => link.post_id,
		}
	}

	/// The table the linked ids must resolve against.
	fn other_table(self) -> &'static str {
		match self {
			Self::Post(..) => "tags",
			Self::Tag(..) => "posts",
		}
	}
}

/// The rows to insert and delete to move from `current` to `wanted`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Diff {
	pub added: Vec<i64>,
	pub removed: Vec<i64>,
}

pub fn diff(current: &BTreeSet<i64>, wanted: &BTreeSet<i64>) -> Diff {
	Diff {
		added: wanted.difference(current).copied().collect(),
		removed: current.difference(wanted).copied().collect(),
	}
}

/// Keeps only the ids that exist in the other side's table.
async fn resolve(
	conn: &mut SqliteConnection,
	owner: Owner,
	ids: &BTreeSet<i64>,
) -> sqlx::Result<BTreeSet<i64>> {
	if ids.is_empty() {
		return Ok(BTreeSet::new());
	}

	let mut query = QueryBuilder::<Sqlite>::new(format!(
		"SELECT id FROM {} WHERE id IN (",
		owner.other_table()
	));
	let mut separated = query.separated(", ");

	for id in ids {
		separated.push_bind(*id);
	}

	separated.push_unseparated(")");

	let found = query.build_query_scalar::<i64>().fetch_all(conn).await?;

	Ok(found.into_iter().collect())
}

/// Replaces the owner's full link set with `ids`.
///
/// Ids that resolve to nothing are dropped. Links present in both the old and
/// the new set are left untouched. Must be called inside a transaction.
pub async fn replace(
	conn: &mut SqliteConnection,
	owner: Owner,
	ids: &[i64],
) -> sqlx::Result<Diff> {
	let requested = ids.iter().copied().collect::<BTreeSet<_>>();
	let wanted = resolve(&mut *conn, owner, &requested).await?;

	if wanted.len() != requested.len() {
		tracing::debug!(
			dropped = requested.len() - wanted.len(),
			"ignoring unknown {} ids",
			owner.other_column()
		);
	}

	let current = sqlx::query_as::<_, PostTag>(&format!(
		"SELECT post_id, tag_id FROM posts_tags WHERE {} = ?",
		owner.column()
	))
	.bind(owner.id())
	.fetch_all(&mut *conn)
	.await?
	.into_iter()
	.map(|link| owner.other(link))
	.collect::<BTreeSet<_>>();

	let diff = diff(&current, &wanted);

	let delete = format!(
		"DELETE FROM posts_tags WHERE {} = ? AND {} = ?",
		owner.column(),
		owner.other_column()
	);

	for id in &diff.removed {
		sqlx::query(&delete)
			.bind(owner.id())
			.bind(*id)
			.execute(&mut *conn)
			.await?;
	}

	let insert = format!(
		"INSERT INTO posts_tags ({}, {}) VALUES (?, ?)",
		owner.column(),
		owner.other_column()
	);

	for id in &diff.added {
		sqlx::query(&insert)
			.bind(owner.id())
			.bind(*id)
			.execute(&mut *conn)
			.await?;
	}

	Ok(diff)
}
