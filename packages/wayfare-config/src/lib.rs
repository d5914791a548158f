mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Personalization, PlacesProviderConfig, Providers, Search, Service};

use std::{collections::HashSet, fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	let places = &cfg.providers.places;

	for (label, value) in [
		("providers.places.provider_id", &places.provider_id),
		("providers.places.api_base", &places.api_base),
		("providers.places.api_key", &places.api_key),
		("providers.places.locale", &places.locale),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	for (label, path) in [
		("providers.places.autocomplete_path", &places.autocomplete_path),
		("providers.places.details_path", &places.details_path),
	] {
		if !path.starts_with('/') {
			return Err(Error::Validation { message: format!("{label} must start with '/'.") });
		}
	}

	if places.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.places.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.search.debounce_ms == 0 {
		return Err(Error::Validation {
			message: "search.debounce_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_candidates == 0 {
		return Err(Error::Validation {
			message: "search.max_candidates must be greater than zero.".to_string(),
		});
	}
	if cfg.personalization.categories.is_empty() {
		return Err(Error::Validation {
			message: "personalization.categories must be non-empty.".to_string(),
		});
	}

	let mut seen = HashSet::new();

	for category in &cfg.personalization.categories {
		if category.trim().is_empty() {
			return Err(Error::Validation {
				message: "personalization.categories must not contain blank entries.".to_string(),
			});
		}
		if !seen.insert(category.as_str()) {
			return Err(Error::Validation {
				message: format!("personalization.categories contains duplicate {category:?}."),
			});
		}
	}

	for (label, delta) in [
		("personalization.favorite_delta", cfg.personalization.favorite_delta),
		("personalization.unfavorite_delta", cfg.personalization.unfavorite_delta),
		("personalization.positive_review_delta", cfg.personalization.positive_review_delta),
		("personalization.negative_review_delta", cfg.personalization.negative_review_delta),
		("personalization.neutral_review_delta", cfg.personalization.neutral_review_delta),
	] {
		if !delta.is_finite() {
			return Err(Error::Validation {
				message: format!("{label} must be a finite number."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.providers.places.api_base.ends_with('/') {
		let trimmed = cfg.providers.places.api_base.trim_end_matches('/').to_string();

		cfg.providers.places.api_base = trimmed;
	}

	for category in &mut cfg.personalization.categories {
		let trimmed = category.trim().to_string();

		if trimmed != *category {
			*category = trimmed;
		}
	}
}
