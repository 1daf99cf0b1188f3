use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
	#[error("malformed user payload: {0}")]
	Json(#[from] serde_json::Error),
	#[error("user payload is missing `{0}`")]
	MissingField(&'static str),
}

/// The authenticated user, as returned by the backend on sign-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
	pub id: String,
	pub username: String,
	pub display_name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created_at: Option<OffsetDateTime>,
}

/// Wire shape of a user before validation. Every field is optional here so that
/// missing data is reported as a [`SessionError::MissingField`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
	#[serde(default)]
	id: Option<String>,
	#[serde(default, rename = "_id")]
	object_id: Option<String>,
	#[serde(default)]
	username: Option<String>,
	#[serde(default)]
	display_name: Option<String>,
	#[serde(default)]
	token: Option<String>,
	#[serde(default, with = "time::serde::rfc3339::option")]
	created_at: Option<OffsetDateTime>,
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

impl UserInfo {
	/// Validates a user payload from the backend's sign-in or user-info response.
	/// See [`super::SessionAction::sign_in`].
	pub fn parse(json: &str) -> Result<Self, SessionError> {
		Self::validate(serde_json::from_str(json)?)
	}

	pub fn from_value(value: serde_json::Value) -> Result<Self, SessionError> {
		Self::validate(serde_json::from_value(value)?)
	}

	fn validate(payload: Payload) -> Result<Self, SessionError> {
		let id = non_empty(payload.id)
			.or_else(|| non_empty(payload.object_id))
			.ok_or(SessionError::MissingField("id"))?;
		let username = non_empty(payload.username).ok_or(SessionError::MissingField("username"))?;
		let display_name = non_empty(payload.display_name).unwrap_or_else(|| username.clone());
		Ok(Self {
			id,
			username,
			display_name,
			token: non_empty(payload.token),
			created_at: payload.created_at,
		})
	}
}
