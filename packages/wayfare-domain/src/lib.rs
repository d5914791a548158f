pub mod affinity;
pub mod matcher;

mod types;

pub use types::{
	ActionType, Coordinates, Destination, RemotePlaceCandidate, SearchResultItem, SessionToken,
	UserActionEvent,
};
