use askama::Template;
use axum::{
	body::Body,
	extract::{FromRequest, FromRequestParts, Request},
	http::{request, Response},
	response::{Html, IntoResponse},
};
use serde::de;

use crate::error::AppError;

/// Extractor that deserializes a url-encoded form body and validates it.
///
/// Repeated keys (`tags=1&tags=2`) deserialize into a `Vec`.
///
/// ```rust
/// async fn route(Form(input): Form<UserInput>) {
///   // ...
/// }
/// ```
pub struct Form<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for Form<T>
where
	T: de::DeserializeOwned + validator::Validate,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Unvalidated(result) = Unvalidated::<T>::from_request(req, state).await?;

		result.validate().map_err(AppError::Validation)?;
		Ok(Self(result))
	}
}

/// Extractor that deserializes a url-encoded form body without validating it.
///
/// Used where the target row must be looked up first, so that a missing row
/// is reported as not found even when the submitted form is invalid.
///
/// ```rust
/// async fn route(Path(id): Path<i64>, Unvalidated(input): Unvalidated<UserInput>) {
///   repo::user::get(&database, id).await?;
///   input.validate()?;
/// }
/// ```
pub struct Unvalidated<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for Unvalidated<T>
where
	T: de::DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let result = axum_extra::extract::Form::<T>::from_request(req, state)
			.await?
			.0;

		Ok(Self(result))
	}
}

/// Extractor for path parameters.
///
/// A parameter that fails to parse (e.g. a non-numeric id) can never match a
/// row, so it is rejected as not found.
pub struct Path<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequestParts<S> for Path<T>
where
	T: de::DeserializeOwned + Send,
	S: Send + Sync,
{
	type Rejection = AppError;

	async fn from_request_parts(
		parts: &mut request::Parts,
		state: &S,
	) -> Result<Self, Self::Rejection> {
		let result = axum::extract::Path::<T>::from_request_parts(parts, state)
			.await?
			.0;

		Ok(Self(result))
	}
}

/// Response that renders a template into an HTML page.
pub struct Page<T>(pub T);

impl<T> IntoResponse for Page<T>
where
	T: Template,
{
	fn into_response(self) -> Response<Body> {
		match self.0.render() {
			Ok(html) => Html(html).into_response(),
			Err(error) => AppError::Template(error).into_response(),
		}
	}
}
