use super::Client;
use crate::{
	media::MediaType,
	session::{FavoriteEntry, MediaId},
};
use reqwest::Method;
use serde::Serialize;

static ENDPOINT: &str = "user/favorites";

/// Request body for saving a favorite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
	pub media_type: MediaType,
	pub media_id: MediaId,
	pub media_title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub media_poster: Option<String>,
	pub media_rate: f64,
}

impl From<&FavoriteEntry> for NewFavorite {
	fn from(entry: &FavoriteEntry) -> Self {
		Self {
			media_type: entry.media_type,
			media_id: entry.media_id.clone(),
			media_title: entry.media_title.clone(),
			media_poster: entry.media_poster.clone(),
			media_rate: entry.media_rate,
		}
	}
}

impl Client {
	/// Every favorite of the authenticated user.
	pub async fn list_favorites(&self) -> anyhow::Result<Vec<FavoriteEntry>> {
		self.request(Method::GET, ENDPOINT)?.send().await
	}

	/// Saves a favorite, returning the stored record with its backend `id`.
	pub async fn add_favorite(&self, favorite: &NewFavorite) -> anyhow::Result<FavoriteEntry> {
		self.request(Method::POST, ENDPOINT)?.with_json(favorite).send().await
	}

	/// Deletes a favorite by its backend record id (not its media id).
	pub async fn remove_favorite(&self, favorite_id: &str) -> anyhow::Result<()> {
		self.request::<()>(Method::DELETE, &format!("{ENDPOINT}/{favorite_id}"))?
			.send_discard()
			.await
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn new_favorite_body() {
		let favorite = NewFavorite {
			media_type: MediaType::Movie,
			media_id: 640146u64.into(),
			media_title: "Ant-Man and the Wasp: Quantumania".into(),
			media_poster: Some("/cw6jBnTauNmEEIIXcoNEyoQItG7.jpg".into()),
			media_rate: 6.5,
		};
		assert_eq!(
			serde_json::to_value(&favorite).unwrap(),
			serde_json::json!({
				"mediaType": "movie",
				"mediaId": "640146",
				"mediaTitle": "Ant-Man and the Wasp: Quantumania",
				"mediaPoster": "/cw6jBnTauNmEEIIXcoNEyoQItG7.jpg",
				"mediaRate": 6.5,
			})
		);
	}

	#[test]
	fn from_entry_drops_record_fields() {
		let entry: FavoriteEntry = serde_json::from_value(serde_json::json!({
			"id": "6449586455717f627bb533dd",
			"mediaType": "tv",
			"mediaId": 1399,
			"mediaTitle": "Game of Thrones",
			"mediaRate": 8.4,
			"createdAt": "2023-04-26T16:59:16.388Z",
		}))
		.unwrap();
		let body = serde_json::to_value(NewFavorite::from(&entry)).unwrap();
		assert_eq!(
			body,
			serde_json::json!({
				"mediaType": "tv",
				"mediaId": "1399",
				"mediaTitle": "Game of Thrones",
				"mediaRate": 8.4,
			})
		);
	}
}
