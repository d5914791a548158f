use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub providers: Providers,
	pub search: Search,
	pub personalization: Personalization,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub places: PlacesProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct PlacesProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub autocomplete_path: String,
	pub details_path: String,
	pub locale: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_debounce_ms")]
	pub debounce_ms: u64,
	#[serde(default = "default_max_candidates")]
	pub max_candidates: u32,
}

#[derive(Debug, Deserialize)]
pub struct Personalization {
	pub categories: Vec<String>,
	#[serde(default = "default_favorite_delta")]
	pub favorite_delta: f32,
	#[serde(default = "default_unfavorite_delta")]
	pub unfavorite_delta: f32,
	#[serde(default = "default_positive_review_delta")]
	pub positive_review_delta: f32,
	#[serde(default = "default_negative_review_delta")]
	pub negative_review_delta: f32,
	/// Delta applied to a rating-3 review. Zero means a neutral review carries
	/// no signal.
	#[serde(default)]
	pub neutral_review_delta: f32,
}

fn default_debounce_ms() -> u64 {
	300
}

fn default_max_candidates() -> u32 {
	8
}

fn default_favorite_delta() -> f32 {
	1.0
}

fn default_unfavorite_delta() -> f32 {
	-1.0
}

fn default_positive_review_delta() -> f32 {
	5.0
}

fn default_negative_review_delta() -> f32 {
	-3.0
}
