use std::sync::Once;

use serde_json::Map;

use wayfare_config::{Config, Personalization, PlacesProviderConfig, Providers, Search, Service};
use wayfare_domain::Destination;

/// The fixed category set used across tests; ten entries, matching the size
/// the surrounding application configures.
pub const TEST_CATEGORIES: [&str; 10] = [
	"Beaches",
	"Mountains",
	"Lakes",
	"Wildlife",
	"Culture",
	"Adventure",
	"Relaxing",
	"City",
	"Historical",
	"Food",
];

/// Installs a fmt subscriber honoring `RUST_LOG`, once per process.
pub fn init_tracing() {
	static INIT: Once = Once::new();

	INIT.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_test_writer()
			.try_init();
	});
}

pub fn test_config() -> Config {
	Config {
		service: Service { log_level: "info".to_string() },
		providers: Providers {
			places: PlacesProviderConfig {
				provider_id: "places".to_string(),
				api_base: "http://localhost:9001".to_string(),
				api_key: "test-key".to_string(),
				autocomplete_path: "/v1/autocomplete".to_string(),
				details_path: "/v1/places".to_string(),
				locale: "en".to_string(),
				timeout_ms: 1_000,
				default_headers: Map::new(),
			},
		},
		search: Search { debounce_ms: 300, max_candidates: 8 },
		personalization: Personalization {
			categories: TEST_CATEGORIES.iter().map(|c| c.to_string()).collect(),
			favorite_delta: 1.0,
			unfavorite_delta: -1.0,
			positive_review_delta: 5.0,
			negative_review_delta: -3.0,
			neutral_review_delta: 0.0,
		},
	}
}

pub fn destination(id: &str, name: &str, categories: &[&str]) -> Destination {
	Destination {
		id: id.to_string(),
		name: name.to_string(),
		image_ref: format!("images/{id}.jpg"),
		rating: 4.2,
		location: "Rwanda".to_string(),
		categories: categories.iter().map(|c| c.to_string()).collect(),
		price: 80.0,
		description: String::new(),
	}
}

/// A small seeded catalog covering the fixture scenarios: a "kivu" local hit,
/// multi-category destinations, and several categories left empty.
pub fn fixture_catalog() -> Vec<Destination> {
	vec![
		Destination {
			id: "dest-kivu".to_string(),
			name: "Lake Kivu".to_string(),
			image_ref: "images/dest-kivu.jpg".to_string(),
			rating: 4.7,
			location: "Rubavu".to_string(),
			categories: vec!["Beaches".to_string(), "Lakes".to_string(), "Relaxing".to_string()],
			price: 120.0,
			description: "Freshwater lake ringed by beach towns.".to_string(),
		},
		destination("dest-akagera", "Akagera National Park", &["Wildlife", "Adventure"]),
		destination("dest-kigali", "Kigali Cultural Tour", &["City", "Culture"]),
		destination("dest-karisimbi", "Mount Karisimbi", &["Mountains", "Adventure"]),
	]
}
