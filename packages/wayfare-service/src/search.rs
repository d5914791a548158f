use std::{
	sync::{Arc, Mutex},
	time::Duration,
};

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

use wayfare_domain::{RemotePlaceCandidate, SearchResultItem, SessionToken, matcher};

use crate::{WayfareService, debounce};

/// Published state of one search feed. `Empty` ("no results for this query")
/// is deliberately distinct from `Loading`; `Failed` is reserved for the
/// aggregate-level case of the local catalog being entirely unavailable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchState {
	Idle,
	Loading { query: String },
	Ready { query: String, items: Vec<SearchResultItem> },
	Empty { query: String },
	Failed { query: String, message: String },
}

/// Generation-guarded publisher over a watch channel. A run may only publish
/// while its generation is still the latest committed one, so a stale
/// in-flight aggregation can never overwrite a newer query's results: last
/// writer wins in generation order, not completion order.
pub(crate) struct ResultPublisher {
	latest: Mutex<u64>,
	tx: watch::Sender<SearchState>,
}

impl ResultPublisher {
	pub(crate) fn new(tx: watch::Sender<SearchState>) -> Self {
		Self { latest: Mutex::new(0), tx }
	}

	/// Registers a newly committed query and returns its generation number.
	pub(crate) fn begin(&self) -> u64 {
		let mut latest = self.latest.lock().unwrap_or_else(|err| err.into_inner());

		*latest += 1;

		*latest
	}

	/// Publishes `state` unless a newer generation has committed since;
	/// returns whether the publish went through.
	pub(crate) fn publish(&self, generation: u64, state: SearchState) -> bool {
		let latest = self.latest.lock().unwrap_or_else(|err| err.into_inner());

		if *latest != generation {
			return false;
		}

		let _ = self.tx.send(state);

		true
	}
}

impl WayfareService {
	/// Spawns the search pipeline for one feed: raw keystrokes in, debounced
	/// commits, generation-guarded result states out. Each non-empty commit
	/// opens its own session token and cancels (cooperatively abandons) the
	/// previous in-flight aggregation; an empty commit clears back to `Idle`
	/// without opening a session.
	pub fn search(
		self: &Arc<Self>,
		keystrokes: mpsc::Receiver<String>,
	) -> watch::Receiver<SearchState> {
		let (tx, rx) = watch::channel(SearchState::Idle);
		let window = Duration::from_millis(self.cfg.search.debounce_ms);
		let mut committed = debounce::debounce(keystrokes, window);
		let publisher = Arc::new(ResultPublisher::new(tx));
		let service = self.clone();

		tokio::spawn(async move {
			while let Some(query) = committed.recv().await {
				let generation = publisher.begin();

				if query.is_empty() {
					publisher.publish(generation, SearchState::Idle);

					continue;
				}

				publisher.publish(generation, SearchState::Loading { query: query.clone() });

				let service = service.clone();
				let publisher = publisher.clone();

				tokio::spawn(async move {
					let state = service.aggregate(&query).await;

					if !publisher.publish(generation, state) {
						tracing::debug!(%query, generation, "Discarded superseded search results.");
					}
				});
			}
		});

		rx
	}

	/// One aggregation run: synchronous local match over the catalog snapshot,
	/// then the remote path under a fresh session token. Local results always
	/// precede remote results in the published list, whichever resolves first.
	async fn aggregate(&self, query: &str) -> SearchState {
		let local = match self.catalog.all().await {
			Ok(snapshot) => matcher::match_destinations(query, &snapshot),
			Err(err) => {
				tracing::warn!(error = %err, %query, "Local catalog unavailable.");

				return SearchState::Failed {
					query: query.to_string(),
					message: err.to_string(),
				};
			},
		};
		let token = self.providers.places.new_session();
		let remote = self.remote_candidates(query, &token).await;

		if local.is_empty() && remote.is_empty() {
			return SearchState::Empty { query: query.to_string() };
		}

		let mut items: Vec<SearchResultItem> =
			local.into_iter().map(SearchResultItem::Local).collect();

		items.extend(remote.into_iter().map(|candidate| SearchResultItem::Remote {
			candidate,
			session: token.clone(),
		}));

		SearchState::Ready { query: query.to_string(), items }
	}

	/// Remote path with graceful degradation: an autocomplete transport
	/// failure yields zero remote results, and a failed detail fetch keeps
	/// that one candidate in partial form at its original autocomplete
	/// position. Every call of the run is bound to the same session token.
	async fn remote_candidates(
		&self,
		query: &str,
		token: &SessionToken,
	) -> Vec<RemotePlaceCandidate> {
		let cfg = &self.cfg.providers.places;
		let mut candidates = match self.providers.places.autocomplete(cfg, query, token).await {
			Ok(candidates) => candidates,
			Err(err) => {
				tracing::warn!(error = %err, %query, "Place autocomplete degraded to zero results.");

				return Vec::new();
			},
		};

		candidates.truncate(self.cfg.search.max_candidates as usize);

		let lookups = candidates.into_iter().map(|candidate| async move {
			match self.providers.places.fetch_details(cfg, &candidate.place_id, token).await {
				Ok(Some(full)) => full,
				Ok(None) => {
					tracing::warn!(
						place_id = %candidate.place_id,
						"Place details not found; keeping the partial candidate."
					);

					candidate
				},
				Err(err) => {
					tracing::warn!(
						error = %err,
						place_id = %candidate.place_id,
						"Place detail fetch failed; keeping the partial candidate."
					);

					candidate
				},
			}
		});

		join_all(lookups).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stale_generation_cannot_publish() {
		let (tx, rx) = watch::channel(SearchState::Idle);
		let publisher = ResultPublisher::new(tx);
		let first = publisher.begin();
		let second = publisher.begin();

		assert!(!publisher.publish(first, SearchState::Loading { query: "a".to_string() }));
		assert!(publisher.publish(second, SearchState::Loading { query: "b".to_string() }));
		assert_eq!(*rx.borrow(), SearchState::Loading { query: "b".to_string() });
	}

	#[test]
	fn states_serialize_with_a_tag() {
		let json = serde_json::to_value(SearchState::Empty { query: "kivu".to_string() })
			.expect("serialize failed");

		assert_eq!(json["state"], "empty");
		assert_eq!(json["query"], "kivu");
	}
}
