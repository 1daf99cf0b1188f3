//! Links to externally hosted media: TMDB artwork and YouTube trailer embeds.
//!
//! These are plain string templates. Fragments are not validated; a malformed
//! fragment simply yields a malformed url.
use crate::config::{TMDB_IMAGE_BASE, YOUTUBE_EMBED_BASE};
use serde::{Deserialize, Serialize};

/// Full-resolution backdrop image for a TMDB path fragment such as `/abc.jpg`.
pub fn backdrop_path(fragment: &str) -> String {
	format!("{TMDB_IMAGE_BASE}/original{fragment}")
}

/// Poster-sized (500px wide) image for a TMDB path fragment.
pub fn poster_path(fragment: &str) -> String {
	format!("{TMDB_IMAGE_BASE}/w500{fragment}")
}

/// Embeddable player for a YouTube video id, with player controls hidden.
pub fn youtube_path(video_id: &str) -> String {
	format!("{YOUTUBE_EMBED_BASE}/{video_id}?controls=0")
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseMediaError {
	#[error("unknown media type {0:?}")]
	MediaType(String),
	#[error("unknown media category {0:?}")]
	Category(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
	Movie,
	Tv,
}
impl MediaType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Movie => "movie",
			Self::Tv => "tv",
		}
	}
}
impl std::fmt::Display for MediaType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
impl std::str::FromStr for MediaType {
	type Err = ParseMediaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"movie" => Ok(Self::Movie),
			"tv" => Ok(Self::Tv),
			_ => Err(ParseMediaError::MediaType(s.to_owned())),
		}
	}
}

/// TMDB listing a media type can be browsed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaCategory {
	Popular,
	TopRated,
}
impl MediaCategory {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Popular => "popular",
			Self::TopRated => "top_rated",
		}
	}
}
impl std::fmt::Display for MediaCategory {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
impl std::str::FromStr for MediaCategory {
	type Err = ParseMediaError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"popular" => Ok(Self::Popular),
			"top_rated" => Ok(Self::TopRated),
			_ => Err(ParseMediaError::Category(s.to_owned())),
		}
	}
}
