pub mod catalog;
pub mod interests;

mod error;

pub use catalog::{CatalogStore, InMemoryCatalog};
pub use error::{Error, Result};
pub use interests::{InMemoryInterestStore, InterestStore};

use std::{future::Future, pin::Pin};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
