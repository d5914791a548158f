pub mod debounce;
pub mod feed;
pub mod search;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use error::{Error, Result};
pub use feed::{CategoryFeed, PersonalizedFeed};
pub use search::SearchState;

use wayfare_config::{Config, PlacesProviderConfig};
use wayfare_domain::{RemotePlaceCandidate, SessionToken};
use wayfare_providers::places;
use wayfare_storage::{CatalogStore, InterestStore};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The remote place-lookup collaborator. One token per committed query: the
/// token returned by `new_session` must be passed to the autocomplete call and
/// every detail fetch of that query, and discarded afterwards.
pub trait PlaceProvider
where
	Self: Send + Sync,
{
	fn new_session(&self) -> SessionToken;

	fn autocomplete<'a>(
		&'a self,
		cfg: &'a PlacesProviderConfig,
		query: &'a str,
		token: &'a SessionToken,
	) -> BoxFuture<'a, wayfare_providers::Result<Vec<RemotePlaceCandidate>>>;

	fn fetch_details<'a>(
		&'a self,
		cfg: &'a PlacesProviderConfig,
		place_id: &'a str,
		token: &'a SessionToken,
	) -> BoxFuture<'a, wayfare_providers::Result<Option<RemotePlaceCandidate>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub places: Arc<dyn PlaceProvider>,
}

pub struct WayfareService {
	pub cfg: Arc<Config>,
	pub catalog: Arc<dyn CatalogStore>,
	pub interests: Arc<dyn InterestStore>,
	pub providers: Providers,
}

struct DefaultProviders;

impl PlaceProvider for DefaultProviders {
	fn new_session(&self) -> SessionToken {
		places::new_session()
	}

	fn autocomplete<'a>(
		&'a self,
		cfg: &'a PlacesProviderConfig,
		query: &'a str,
		token: &'a SessionToken,
	) -> BoxFuture<'a, wayfare_providers::Result<Vec<RemotePlaceCandidate>>> {
		Box::pin(places::autocomplete(cfg, query, token))
	}

	fn fetch_details<'a>(
		&'a self,
		cfg: &'a PlacesProviderConfig,
		place_id: &'a str,
		token: &'a SessionToken,
	) -> BoxFuture<'a, wayfare_providers::Result<Option<RemotePlaceCandidate>>> {
		Box::pin(places::fetch_details(cfg, place_id, token))
	}
}

impl Providers {
	pub fn new(places: Arc<dyn PlaceProvider>) -> Self {
		Self { places }
	}
}

impl Default for Providers {
	fn default() -> Self {
		Self { places: Arc::new(DefaultProviders) }
	}
}

impl WayfareService {
	pub fn new(
		cfg: Arc<Config>,
		catalog: Arc<dyn CatalogStore>,
		interests: Arc<dyn InterestStore>,
	) -> Self {
		Self { cfg, catalog, interests, providers: Providers::default() }
	}

	pub fn with_providers(
		cfg: Arc<Config>,
		catalog: Arc<dyn CatalogStore>,
		interests: Arc<dyn InterestStore>,
		providers: Providers,
	) -> Self {
		Self { cfg, catalog, interests, providers }
	}
}
