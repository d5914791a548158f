pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Catalog source unavailable: {message}")]
	CatalogUnavailable { message: String },
	#[error("Interest store unavailable: {message}")]
	InterestUnavailable { message: String },
}
