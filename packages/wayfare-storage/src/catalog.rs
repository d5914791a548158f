use std::{
	collections::HashMap,
	sync::RwLock,
};

use wayfare_domain::Destination;

use crate::{BoxFuture, Result};

/// The local destination catalog collaborator: a read-mostly collection keyed
/// by destination id, supporting full-scan and category-indexed reads in
/// insertion order.
pub trait CatalogStore
where
	Self: Send + Sync,
{
	fn all<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Destination>>>;

	fn get<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<Destination>>>;

	fn by_category<'a>(&'a self, category: &'a str) -> BoxFuture<'a, Result<Vec<Destination>>>;
}

struct CatalogIndex {
	destinations: Vec<Destination>,
	by_category: HashMap<String, Vec<usize>>,
}

impl CatalogIndex {
	fn build(destinations: Vec<Destination>) -> Self {
		let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();

		for (idx, destination) in destinations.iter().enumerate() {
			for category in &destination.categories {
				by_category.entry(category.clone()).or_default().push(idx);
			}
		}

		Self { destinations, by_category }
	}
}

/// In-memory catalog snapshot. `replace` models a catalog sync: the whole
/// snapshot and its category index swap at once.
pub struct InMemoryCatalog {
	index: RwLock<CatalogIndex>,
}

impl InMemoryCatalog {
	pub fn new(destinations: Vec<Destination>) -> Self {
		Self { index: RwLock::new(CatalogIndex::build(destinations)) }
	}

	pub fn replace(&self, destinations: Vec<Destination>) {
		let mut index = self.index.write().unwrap_or_else(|err| err.into_inner());

		*index = CatalogIndex::build(destinations);
	}
}

impl CatalogStore for InMemoryCatalog {
	fn all<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Destination>>> {
		Box::pin(async move {
			let index = self.index.read().unwrap_or_else(|err| err.into_inner());

			Ok(index.destinations.clone())
		})
	}

	fn get<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<Option<Destination>>> {
		Box::pin(async move {
			let index = self.index.read().unwrap_or_else(|err| err.into_inner());

			Ok(index.destinations.iter().find(|destination| destination.id == id).cloned())
		})
	}

	fn by_category<'a>(&'a self, category: &'a str) -> BoxFuture<'a, Result<Vec<Destination>>> {
		Box::pin(async move {
			let index = self.index.read().unwrap_or_else(|err| err.into_inner());
			let Some(positions) = index.by_category.get(category) else {
				return Ok(Vec::new());
			};

			Ok(positions.iter().map(|&idx| index.destinations[idx].clone()).collect())
		})
	}
}
