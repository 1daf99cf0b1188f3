use crate::media::MediaType;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// A TMDB media identifier in its normalized text form.
///
/// The backend hands these out both as numbers and as strings; either form
/// deserializes to the same id, so `640146` and `"640146"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl std::fmt::Display for MediaId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}
impl From<String> for MediaId {
	fn from(value: String) -> Self {
		Self(value)
	}
}
impl From<&str> for MediaId {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}
impl From<u64> for MediaId {
	fn from(value: u64) -> Self {
		Self(value.to_string())
	}
}
impl From<i64> for MediaId {
	fn from(value: i64) -> Self {
		Self(value.to_string())
	}
}

impl From<f64> for MediaId {
	/// Whole numbers lose their fraction, so `640146.0` is the id `640146`.
	fn from(value: f64) -> Self {
		if value.fract() == 0.0 && value.abs() < 1e15 {
			Self(format!("{value:.0}"))
		} else {
			Self(value.to_string())
		}
	}
}

impl<'de> Deserialize<'de> for MediaId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Unsigned(u64),
			Signed(i64),
			Float(f64),
			Text(String),
		}
		Ok(match Raw::deserialize(deserializer)? {
			Raw::Unsigned(id) => id.into(),
			Raw::Signed(id) => id.into(),
			Raw::Float(id) => id.into(),
			Raw::Text(id) => id.into(),
		})
	}
}

/// A media item the user has saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
	/// Backend record id, absent until the entry has been saved.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	pub media_id: MediaId,
	pub media_type: MediaType,
	pub media_title: String,
	/// TMDB path fragment, see [`crate::media::poster_path`].
	#[serde(default)]
	pub media_poster: Option<String>,
	#[serde(default)]
	pub media_rate: f64,
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub created_at: Option<OffsetDateTime>,
	#[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
	pub updated_at: Option<OffsetDateTime>,
}
