use askama::Template;
use serde::Deserialize;
use validator::Validate;

use crate::{
	model::{Post, User},
	repo::user::UserFields,
	route::model::{empty_as_none, not_blank, trimmed},
};

/// Form submitted when creating or editing a user.
#[derive(Debug, Deserialize, Validate)]
pub struct UserInput {
	#[serde(default, deserialize_with = "trimmed")]
	#[validate(
		custom(function = "not_blank"),
		length(max = 20, message = "must be at most 20 characters")
	)]
	pub first_name: String,
	#[serde(default, deserialize_with = "empty_as_none")]
	#[validate(length(max = 20, message = "must be at most 20 characters"))]
	pub middle_name: Option<String>,
	#[serde(default, deserialize_with = "trimmed")]
	#[validate(
		custom(function = "not_blank"),
		length(max = 20, message = "must be at most 20 characters")
	)]
	pub last_name: String,
	#[serde(default, deserialize_with = "empty_as_none")]
	pub image_url: Option<String>,
}

impl From<UserInput> for UserFields {
	fn from(input: UserInput) -> Self {
		Self {
			first_name: input.first_name,
			middle_name: input.middle_name,
			last_name: input.last_name,
			image_url: input.image_url,
		}
	}
}

#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersPage {
	pub users: Vec<User>,
}

#[derive(Template)]
#[template(path = "user.html")]
pub struct UserPage {
	pub user: User,
	pub posts: Vec<Post>,
}

/// The create and edit forms, pre-filled when editing.
#[derive(Template)]
#[template(path = "user_form.html")]
pub struct UserFormPage {
	pub heading: &'static str,
	pub action: String,
	pub cancel: String,
	pub first_name: String,
	pub middle_name: String,
	pub last_name: String,
	pub image_url: String,
}

impl UserFormPage {
	pub fn create() -> Self {
		Self {
			heading: "Create a user",
			action: "/users/new".into(),
			cancel: "/users".into(),
			first_name: String::new(),
			middle_name: String::new(),
			last_name: String::new(),
			image_url: String::new(),
		}
	}

	pub fn edit(user: User) -> Self {
		Self {
			heading: "Edit a user",
			action: format!("/users/edit/{}", user.id),
			cancel: format!("/users/{}", user.id),
			first_name: user.first_name,
			middle_name: user.middle_name.unwrap_or_default(),
			last_name: user.last_name,
			image_url: user.image_url.unwrap_or_default(),
		}
	}
}
