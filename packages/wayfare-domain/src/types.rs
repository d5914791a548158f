use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A destination from the locally cached catalog. Created by catalog sync and
/// read-only to the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Destination {
	pub id: String,
	pub name: String,
	pub image_ref: String,
	pub rating: f32,
	pub location: String,
	pub categories: Vec<String>,
	pub price: f32,
	pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

/// A candidate from the remote place-lookup service. Autocomplete produces the
/// partial form (all optional fields `None`); detail enrichment fills them in.
/// Ephemeral, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemotePlaceCandidate {
	pub place_id: String,
	pub name: String,
	pub formatted_address: String,
	pub rating: Option<f32>,
	pub price_tier: Option<u8>,
	pub photo_ref: Option<String>,
	pub coordinates: Option<Coordinates>,
}

impl RemotePlaceCandidate {
	pub fn partial(place_id: String, name: String, formatted_address: String) -> Self {
		Self {
			place_id,
			name,
			formatted_address,
			rating: None,
			price_tier: None,
			photo_ref: None,
			coordinates: None,
		}
	}
}

/// Opaque correlation id binding one autocomplete call to its subsequent
/// detail-enrichment calls. One token per committed non-empty query; discarded
/// when the query clears or a new query commits.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
	pub fn new() -> Self {
		Self(Uuid::new_v4().to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Default for SessionToken {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SearchResultItem {
	Local(Destination),
	Remote { candidate: RemotePlaceCandidate, session: SessionToken },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
	Favorite,
	Unfavorite,
	Review,
	Booking,
	View,
}

/// An implicit or explicit interest signal. Consumed exactly once; the engine
/// does not deduplicate repeated identical events.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserActionEvent {
	pub user_id: String,
	pub action: ActionType,
	pub destination_id: String,
	pub rating: Option<u8>,
	#[serde(with = "time::serde::rfc3339")]
	pub ts: OffsetDateTime,
}
