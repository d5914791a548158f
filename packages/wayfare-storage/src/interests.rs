use std::{
	collections::HashMap,
	sync::Mutex,
};

use crate::{BoxFuture, Result};

/// The interest-vector persistence collaborator: a document-style store keyed
/// by user id with atomic per-category numeric increments. Vectors are never
/// reset except by account deletion.
pub trait InterestStore
where
	Self: Send + Sync,
{
	fn increment<'a>(
		&'a self,
		user_id: &'a str,
		category: &'a str,
		delta: f32,
	) -> BoxFuture<'a, Result<()>>;

	fn snapshot<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<HashMap<String, f32>>>;

	fn remove_user<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<()>>;
}

/// In-memory interest store. The mutex makes each increment a single
/// read-modify-write, so concurrent action events for the same user and
/// category never lose a delta.
#[derive(Default)]
pub struct InMemoryInterestStore {
	vectors: Mutex<HashMap<String, HashMap<String, f32>>>,
}

impl InMemoryInterestStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl InterestStore for InMemoryInterestStore {
	fn increment<'a>(
		&'a self,
		user_id: &'a str,
		category: &'a str,
		delta: f32,
	) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let mut vectors = self.vectors.lock().unwrap_or_else(|err| err.into_inner());
			let vector = vectors.entry(user_id.to_string()).or_default();

			*vector.entry(category.to_string()).or_insert(0.0) += delta;

			Ok(())
		})
	}

	fn snapshot<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<HashMap<String, f32>>> {
		Box::pin(async move {
			let vectors = self.vectors.lock().unwrap_or_else(|err| err.into_inner());

			Ok(vectors.get(user_id).cloned().unwrap_or_default())
		})
	}

	fn remove_user<'a>(&'a self, user_id: &'a str) -> BoxFuture<'a, Result<()>> {
		Box::pin(async move {
			let mut vectors = self.vectors.lock().unwrap_or_else(|err| err.into_inner());

			vectors.remove(user_id);

			Ok(())
		})
	}
}
