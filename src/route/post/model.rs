use askama::Template;
use serde::Deserialize;
use validator::Validate;

use crate::{
	model::{Post, Tag, User},
	repo::post::PostFields,
	route::model::{not_blank, trimmed, Choice},
};

/// Form submitted when creating or editing a post.
#[derive(Debug, Deserialize, Validate)]
pub struct PostInput {
	/// The title of the post.
	#[serde(default, deserialize_with = "trimmed")]
	#[validate(
		custom(function = "not_blank"),
		length(max = 50, message = "must be at most 50 characters")
	)]
	pub title: String,
	#[serde(default)]
	#[validate(custom(function = "not_blank"))]
	pub content: String,
	/// Ids of the tags to attach. Unknown ids are ignored.
	#[serde(default)]
	pub tags: Vec<i64>,
}

impl From<PostInput> for PostFields {
	fn from(input: PostInput) -> Self {
		Self {
			title: input.title,
			content: input.content,
			tag_ids: input.tags,
		}
	}
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostPage {
	pub post: Post,
	pub author: User,
	pub tags: Vec<Tag>,
}

/// The create and edit forms. Tags already linked to the post are checked.
#[derive(Template)]
#[template(path = "post_form.html")]
pub struct PostFormPage {
	pub heading: String,
	pub action: String,
	pub cancel: String,
	pub title: String,
	pub content: String,
	pub tags: Vec<Choice>,
}

fn tag_choices(tags: Vec<Tag>, selected: &[i64]) -> Vec<Choice> {
	Choice::list(tags.into_iter().map(|tag| (tag.id, tag.name)), selected)
}

impl PostFormPage {
	pub fn create(author: &User, tags: Vec<Tag>) -> Self {
		Self {
			heading: format!("Add post for {}", author.full_name()),
			action: format!("/users/{}/posts/new", author.id),
			cancel: format!("/users/{}", author.id),
			title: String::new(),
			content: String::new(),
			tags: tag_choices(tags, &[]),
		}
	}

	pub fn edit(post: Post, tags: Vec<Tag>, linked: &[Tag]) -> Self {
		let selected = linked.iter().map(|tag| tag.id).collect::<Vec<_>>();

		Self {
			heading: "Edit post".into(),
			action: format!("/users/edit/posts/{}", post.id),
			cancel: format!("/users/posts/{}", post.id),
			title: post.title,
			content: post.content,
			tags: tag_choices(tags, &selected),
		}
	}
}
