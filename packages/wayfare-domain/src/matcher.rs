use crate::Destination;

/// Filters the catalog snapshot by case-insensitive substring match against the
/// destination's name, location, and description. Catalog iteration order is
/// preserved. A blank query matches nothing.
pub fn match_destinations(query: &str, catalog: &[Destination]) -> Vec<Destination> {
	let needle = query.trim().to_lowercase();

	if needle.is_empty() {
		return Vec::new();
	}

	catalog
		.iter()
		.filter(|destination| {
			let haystack = format!(
				"{} {} {}",
				destination.name, destination.location, destination.description
			)
			.to_lowercase();

			haystack.contains(&needle)
		})
		.cloned()
		.collect()
}
