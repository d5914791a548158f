use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use wayfare_config::PlacesProviderConfig;
use wayfare_domain::{Coordinates, RemotePlaceCandidate, SessionToken};

use crate::{Error, Result};

/// Fields requested from the details endpoint on top of the autocomplete
/// payload.
const DETAIL_FIELD_MASK: &str = "rating,price_tier,photo_ref,coordinates";

/// Opens a new remote-lookup session. The remote service bills and rate-limits
/// per session; one token covers one autocomplete call plus its detail
/// fan-out, and must not outlive the committed query that opened it.
pub fn new_session() -> SessionToken {
	SessionToken::new()
}

/// Autocompletes a free-text query into partial place candidates
/// (name/address only). Transport failures surface as `Error::Reqwest`; the
/// caller is expected to degrade to zero remote results rather than abort.
pub async fn autocomplete(
	cfg: &PlacesProviderConfig,
	query: &str,
	token: &SessionToken,
) -> Result<Vec<RemotePlaceCandidate>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.autocomplete_path);
	let body = serde_json::json!({
		"input": query,
		"session_token": token.as_str(),
		"locale": cfg.locale,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_autocomplete_response(json)
}

/// Enriches one candidate with rating, price tier, photo reference, and
/// coordinates. Returns `Ok(None)` when the remote service no longer knows the
/// place id. The token must be the one used for the autocomplete call that
/// produced the candidate.
pub async fn fetch_details(
	cfg: &PlacesProviderConfig,
	place_id: &str,
	token: &SessionToken,
) -> Result<Option<RemotePlaceCandidate>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}/{}", cfg.api_base, cfg.details_path, place_id);
	let body = serde_json::json!({
		"session_token": token.as_str(),
		"field_mask": DETAIL_FIELD_MASK,
	});
	let res = client
		.post(url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;

	if res.status() == StatusCode::NOT_FOUND {
		return Ok(None);
	}

	let json: Value = res.error_for_status()?.json().await?;

	parse_details_response(json).map(Some)
}

fn parse_autocomplete_response(json: Value) -> Result<Vec<RemotePlaceCandidate>> {
	let predictions = json.get("predictions").and_then(|v| v.as_array()).ok_or_else(|| {
		Error::InvalidResponse {
			message: "Autocomplete response is missing predictions array.".to_string(),
		}
	})?;

	let mut candidates = Vec::with_capacity(predictions.len());

	for item in predictions {
		let place_id = require_str(item, "place_id")?;
		let name = require_str(item, "name")?;
		let formatted_address = require_str(item, "formatted_address")?;

		candidates.push(RemotePlaceCandidate::partial(place_id, name, formatted_address));
	}

	Ok(candidates)
}

fn parse_details_response(json: Value) -> Result<RemotePlaceCandidate> {
	let place_id = require_str(&json, "place_id")?;
	let name = require_str(&json, "name")?;
	let formatted_address = require_str(&json, "formatted_address")?;
	let rating = json.get("rating").and_then(|v| v.as_f64()).map(|v| v as f32);
	let price_tier = parse_price_tier(&json)?;
	let photo_ref =
		json.get("photo_ref").and_then(|v| v.as_str()).map(|v| v.to_string());
	let coordinates = parse_coordinates(&json)?;

	Ok(RemotePlaceCandidate {
		place_id,
		name,
		formatted_address,
		rating,
		price_tier,
		photo_ref,
		coordinates,
	})
}

fn parse_price_tier(json: &Value) -> Result<Option<u8>> {
	let Some(value) = json.get("price_tier") else {
		return Ok(None);
	};

	match value {
		Value::Null => Ok(None),
		Value::String(s) if s == "unspecified" => Ok(None),
		Value::Number(number) => {
			let tier = number.as_u64().ok_or_else(|| Error::InvalidResponse {
				message: "Detail price_tier must be a small non-negative integer.".to_string(),
			})?;
			let tier = u8::try_from(tier).map_err(|_| Error::InvalidResponse {
				message: "Detail price_tier must be a small non-negative integer.".to_string(),
			})?;

			Ok(Some(tier))
		},
		_ => Err(Error::InvalidResponse {
			message: "Detail price_tier must be an integer or \"unspecified\".".to_string(),
		}),
	}
}

fn parse_coordinates(json: &Value) -> Result<Option<Coordinates>> {
	let Some(value) = json.get("coordinates") else {
		return Ok(None);
	};

	if value.is_null() {
		return Ok(None);
	}

	let lat = value.get("lat").and_then(|v| v.as_f64()).ok_or_else(|| Error::InvalidResponse {
		message: "Detail coordinates are missing a numeric lat.".to_string(),
	})?;
	let lng = value.get("lng").and_then(|v| v.as_f64()).ok_or_else(|| Error::InvalidResponse {
		message: "Detail coordinates are missing a numeric lng.".to_string(),
	})?;

	Ok(Some(Coordinates { lat, lng }))
}

fn require_str(json: &Value, field: &str) -> Result<String> {
	json.get(field).and_then(|v| v.as_str()).map(|v| v.to_string()).ok_or_else(|| {
		Error::InvalidResponse { message: format!("Response is missing string field {field:?}.") }
	})
}
