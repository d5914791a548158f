use std::collections::BTreeMap;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use wayfare_domain::{ActionType, Destination, UserActionEvent, affinity};

use crate::{Error, Result, WayfareService};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryFeed {
	pub weight: f32,
	pub destinations: Vec<Destination>,
}

/// A personalized, categorized destination set: one entry per configured
/// category, each carrying the user's accumulated affinity weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonalizedFeed {
	pub user_id: String,
	pub categories: BTreeMap<String, CategoryFeed>,
}

impl WayfareService {
	/// Applies one interest signal. The event's delta is added to every
	/// category of the referenced destination. Per-item failures (unknown
	/// destination, a review missing its rating, an interest write error) are
	/// logged and absorbed; they never block the triggering user action. The
	/// engine does not deduplicate repeated identical events.
	pub async fn record_action(&self, event: UserActionEvent) -> Result<()> {
		if event.user_id.trim().is_empty() || event.destination_id.trim().is_empty() {
			return Err(Error::InvalidRequest {
				message: "user_id and destination_id are required.".to_string(),
			});
		}

		let Some(delta) = affinity::weight_delta(&event, &self.cfg.personalization) else {
			if event.action == ActionType::Review && event.rating.is_none() {
				tracing::warn!(
					destination_id = %event.destination_id,
					"Review event is missing its rating; skipping."
				);
			}

			return Ok(());
		};
		let destination = match self.catalog.get(&event.destination_id).await {
			Ok(Some(destination)) => destination,
			Ok(None) => {
				tracing::warn!(
					destination_id = %event.destination_id,
					"Action event references an unknown destination; skipping."
				);

				return Ok(());
			},
			Err(err) => {
				tracing::warn!(
					error = %err,
					destination_id = %event.destination_id,
					"Catalog lookup failed for an action event; skipping."
				);

				return Ok(());
			},
		};

		for category in &destination.categories {
			if let Err(err) = self.interests.increment(&event.user_id, category, delta).await {
				tracing::warn!(
					error = %err,
					user_id = %event.user_id,
					category = %category,
					"Interest weight write failed."
				);
			}
		}

		Ok(())
	}

	/// Reads the user's interest vector and fans out one category-filtered
	/// catalog query per configured category. A failed category query yields
	/// an empty list for that category and never aborts the rest; the result
	/// always has every configured category as a key.
	pub async fn personalized_feed(&self, user_id: &str) -> Result<PersonalizedFeed> {
		if user_id.trim().is_empty() {
			return Err(Error::InvalidRequest { message: "user_id is required.".to_string() });
		}

		let weights = self.interests.snapshot(user_id).await?;
		let lookups = self.cfg.personalization.categories.iter().map(|category| async move {
			let destinations = match self.catalog.by_category(category).await {
				Ok(destinations) => destinations,
				Err(err) => {
					tracing::warn!(
						error = %err,
						category = %category,
						"Category feed query failed; returning an empty list."
					);

					Vec::new()
				},
			};

			(category.clone(), destinations)
		});
		let mut categories = BTreeMap::new();

		for (category, destinations) in join_all(lookups).await {
			let weight = weights.get(&category).copied().unwrap_or(0.0);

			categories.insert(category, CategoryFeed { weight, destinations });
		}

		Ok(PersonalizedFeed { user_id: user_id.to_string(), categories })
	}
}
