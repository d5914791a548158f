use wayfare_config::Personalization;

use crate::{ActionType, UserActionEvent};

const NEGATIVE_REVIEW_MAX: u8 = 2;
const NEUTRAL_REVIEW: u8 = 3;

/// The signed interest delta an event contributes to every category of its
/// destination, or `None` when the event carries no weight signal in this core
/// (booking/view, or a review missing its rating).
pub fn weight_delta(event: &UserActionEvent, policy: &Personalization) -> Option<f32> {
	match event.action {
		ActionType::Favorite => Some(policy.favorite_delta),
		ActionType::Unfavorite => Some(policy.unfavorite_delta),
		ActionType::Review => review_delta(event.rating?, policy),
		ActionType::Booking | ActionType::View => None,
	}
}

fn review_delta(rating: u8, policy: &Personalization) -> Option<f32> {
	if rating <= NEGATIVE_REVIEW_MAX {
		Some(policy.negative_review_delta)
	} else if rating == NEUTRAL_REVIEW {
		Some(policy.neutral_review_delta)
	} else {
		Some(policy.positive_review_delta)
	}
}
