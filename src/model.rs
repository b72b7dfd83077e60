use chrono::NaiveDateTime;

/// Format used when displaying the creation time of a post,
/// e.g. `Tue Mar 05 2024, 02:07 PM`.
pub const DATE_FORMAT: &str = "%a %b %d %Y, %I:%M %p";

/// A model representing a single user.
///
/// Use this when fetching from the database and passing to a template.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
	pub id: i64,
	pub first_name: String,
	pub middle_name: Option<String>,
	pub last_name: String,
	pub image_url: Option<String>,
}

impl User {
	/// The user's name as displayed, including the middle name if there is one.
	pub fn full_name(&self) -> String {
		full_name(&self.first_name, self.middle_name.as_deref(), &self.last_name)
	}
}

pub fn full_name(first: &str, middle: Option<&str>, last: &str) -> String {
	match middle.filter(|middle| !middle.is_empty()) {
		Some(middle) => format!("{first} {middle} {last}"),
		None => format!("{first} {last}"),
	}
}

/// A single post, owned by a user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
	pub id: i64,
	pub title: String,
	pub content: String,
	/// Set by the database on insert and never updated.
	pub created_at: NaiveDateTime,
	pub user_id: i64,
}

impl Post {
	pub fn formatted_date(&self) -> String {
		self.created_at.format(DATE_FORMAT).to_string()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Tag {
	pub id: i64,
	pub name: String,
}

/// A row of the `posts_tags` join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, sqlx::FromRow)]
pub struct PostTag {
	pub post_id: i64,
	pub tag_id: i64,
}

#[cfg(test)]
mod test {
	use chrono::NaiveDate;

	use super::*;

	fn user(first: &str, middle: Option<&str>, last: &str) -> User {
		User {
			id: 1,
			first_name: first.into(),
			middle_name: middle.map(Into::into),
			last_name: last.into(),
			image_url: None,
		}
	}

	#[test]
	fn test_full_name() {
		assert_eq!(user("Bob", None, "Newhart").full_name(), "Bob Newhart");
		assert_eq!(user("Joe", Some("Don"), "Baker").full_name(), "Joe Don Baker");
	}

	#[test]
	fn test_full_name_empty_middle() {
		assert_eq!(user("Bob", Some(""), "Newhart").full_name(), "Bob Newhart");
	}

	#[test]
	fn test_formatted_date() {
		let post = Post {
			id: 1,
			title: "Hello".into(),
			content: "World".into(),
			created_at: NaiveDate::from_ymd_opt(2024, 3, 5)
				.unwrap()
				.and_hms_opt(14, 7, 0)
				.unwrap(),
			user_id: 1,
		};

		assert_eq!(post.formatted_date(), "Tue Mar 05 2024, 02:07 PM");
	}
}
