use askama::Template;
use serde::Deserialize;
use validator::Validate;

use crate::{
	model::{Post, Tag},
	repo::tag::TagFields,
	route::model::{not_blank, trimmed, Choice},
};

/// Form submitted when creating or editing a tag.
#[derive(Debug, Deserialize, Validate)]
pub struct TagInput {
	#[serde(default, deserialize_with = "trimmed")]
	#[validate(custom(function = "not_blank"))]
	pub name: String,
	/// Ids of the posts to link. Unknown ids are ignored.
	#[serde(default)]
	pub posts: Vec<i64>,
}

impl From<TagInput> for TagFields {
	fn from(input: TagInput) -> Self {
		Self {
			name: input.name,
			post_ids: input.posts,
		}
	}
}

#[derive(Template)]
#[template(path = "tags.html")]
pub struct TagsPage {
	pub tags: Vec<Tag>,
}

#[derive(Template)]
#[template(path = "tag.html")]
pub struct TagPage {
	pub tag: Tag,
	pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "tag_form.html")]
pub struct TagFormPage {
	pub heading: &'static str,
	pub action: String,
	pub cancel: String,
	pub name: String,
	pub posts: Vec<Choice>,
}

fn post_choices(posts: Vec<Post>, selected: &[i64]) -> Vec<Choice> {
	Choice::list(posts.into_iter().map(|post| (post.id, post.title)), selected)
}

impl TagFormPage {
	pub fn create(posts: Vec<Post>) -> Self {
		Self {
			heading: "Create a tag",
			action: "/tags/new".into(),
			cancel: "/tags".into(),
			name: String::new(),
			posts: post_choices(posts, &[]),
		}
	}

	pub fn edit(tag: Tag, posts: Vec<Post>, linked: &[Post]) -> Self {
		let selected = linked.iter().map(|post| post.id).collect::<Vec<_>>();

		Self {
			heading: "Edit a tag",
			action: format!("/tags/edit/{}", tag.id),
			cancel: format!("/tags/{}", tag.id),
			name: tag.name,
			posts: post_choices(posts, &selected),
		}
	}
}
