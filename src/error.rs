use askama::Template;
use axum::{
	body::Body,
	extract::rejection::PathRejection,
	http::{Response, StatusCode, Uri},
	response::{Html, IntoResponse},
};
use axum_extra::extract::FormRejection;

use crate::repo::RepoError;

/// Error type for the application.
///
/// The Display trait is not sent to the client, so it can show
/// sensitive information. What the client sees comes from [`ErrorShape`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("form error: {0}")]
	Form(#[from] FormRejection),
	#[error("path error: {0}")]
	Path(#[from] PathRejection),
	#[error(transparent)]
	Repo(#[from] RepoError),
	#[error("template error: {0}")]
	Template(#[from] askama::Error),
	#[error("no route for {0}")]
	NoRoute(Uri),
}

/// A single problem shown on the error page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
	pub field: Option<String>,
	pub content: String,
}

/// How an error is presented to the client.
pub trait ErrorShape {
	fn status(&self) -> StatusCode;

	/// Messages safe to show to the client. Server errors return none.
	fn messages(&self) -> Vec<Message>;
}

impl ErrorShape for AppError {
	fn status(&self) -> StatusCode {
		match self {
			Self::Validation(..) | Self::Form(..) => StatusCode::BAD_REQUEST,
			Self::Path(..) | Self::NoRoute(..) => StatusCode::NOT_FOUND,
			Self::Repo(error) => error.status(),
			Self::Template(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn messages(&self) -> Vec<Message> {
		match self {
			Self::Validation(errors) => {
				let mut messages = errors
					.field_errors()
					.into_iter()
					.flat_map(|(field, errors)| {
						let field = field.to_string();

						errors.iter().map(move |error| Message {
							field: Some(field.clone()),
							content: error
								.message
								.as_ref()
								.map_or_else(|| error.code.to_string(), ToString::to_string),
						})
					})
					.collect::<Vec<_>>();

				messages.sort_by(|a, b| a.field.cmp(&b.field));
				messages
			}
			Self::Form(rejection) => vec![Message {
				field: None,
				content: rejection.to_string(),
			}],
			Self::Path(..) | Self::NoRoute(..) => vec![Message {
				field: None,
				content: "page not found".into(),
			}],
			Self::Repo(error) => error.messages(),
			Self::Template(..) => Vec::new(),
		}
	}
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
	status: u16,
	reason: &'static str,
	messages: Vec<Message>,
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		let status = self.status();

		if status.is_server_error() {
			tracing::error!(error = %self, "request failed");
		} else {
			tracing::debug!(error = %self, "request rejected");
		}

		let page = ErrorPage {
			status: status.as_u16(),
			reason: status.canonical_reason().unwrap_or("Error"),
			messages: self.messages(),
		};

		match page.render() {
			Ok(html) => (status, Html(html)).into_response(),
			Err(error) => {
				tracing::error!(%error, "failed to render error page");
				(status, page.reason).into_response()
			}
		}
	}
}
