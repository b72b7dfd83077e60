use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Deserializes an optional text field, treating a blank value as absent.
///
/// HTML forms submit empty inputs as `field=`, which should be stored as NULL.
pub fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Option::<String>::deserialize(deserializer)?;

	Ok(value
		.map(|value| value.trim().to_owned())
		.filter(|value| !value.is_empty()))
}

/// Deserializes a text field with surrounding whitespace removed, so that
/// validation sees the value that gets stored.
///
/// A missing field deserializes as empty and is caught by [`not_blank`].
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let value = String::deserialize(deserializer)?;

	Ok(value.trim().to_owned())
}

/// Rejects values that are empty or only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
	if value.trim().is_empty() {
		let mut error = ValidationError::new("blank");
		error.message = Some("must not be blank".into());

		return Err(error);
	}

	Ok(())
}

/// A checkbox on a form that links one entity to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
	pub id: i64,
	pub label: String,
	pub checked: bool,
}

impl Choice {
	/// Builds one choice per `(id, label)`, checking those in `selected`.
	pub fn list<I>(options: I, selected: &[i64]) -> Vec<Self>
	where
		I: IntoIterator<Item = (i64, String)>,
	{
		options
			.into_iter()
			.map(|(id, label)| Self {
				id,
				label,
				checked: selected.contains(&id),
			})
			.collect()
	}
}

#[cfg(test)]
mod test {
	use serde::Deserialize;

	use super::*;

	#[derive(Deserialize)]
	struct Input {
		#[serde(default, deserialize_with = "empty_as_none")]
		middle_name: Option<String>,
		#[serde(default, deserialize_with = "trimmed")]
		first_name: String,
	}

	fn parse(body: &str) -> Option<String> {
		serde_json::from_str::<Input>(body).unwrap().middle_name
	}

	fn first_name(body: &str) -> String {
		serde_json::from_str::<Input>(body).unwrap().first_name
	}

	#[test]
	fn test_empty_as_none() {
		assert_eq!(parse(r#"{"middle_name": ""}"#), None);
		assert_eq!(parse(r#"{"middle_name": "   "}"#), None);
		assert_eq!(parse("{}"), None);
		assert_eq!(parse(r#"{"middle_name": " Don "}"#), Some("Don".into()));
	}

	#[test]
	fn test_trimmed() {
		assert_eq!(first_name(r#"{"first_name": "  Bob   "}"#), "Bob");
		assert_eq!(first_name(r#"{"first_name": "   "}"#), "");
		assert_eq!(first_name("{}"), "");
	}

	#[test]
	fn test_not_blank() {
		assert!(not_blank("Bob").is_ok());
		assert!(not_blank("").is_err());
		assert!(not_blank("  ").is_err());
	}

	#[test]
	fn test_choice_list() {
		let choices = Choice::list([(1, "a".into()), (2, "b".into())], &[2]);

		assert!(!choices[0].checked);
		assert!(choices[1].checked);
	}
}
