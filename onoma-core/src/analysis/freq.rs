use std::collections::BTreeMap;

use serde::Serialize;

/// Occurrence counts keyed by text token.
///
/// Backed by a `BTreeMap` so iteration — and therefore serialization — is
/// always lexicographic by key, which keeps the emitted statistics
/// deterministic and diffable. Entries only exist with a count of at
/// least 1; zero counts are never materialized.
pub type FrequencyMap = BTreeMap<String, usize>;

/// Records one occurrence of `token`.
pub fn tally(map: &mut FrequencyMap, token: &str) {
	*map.entry(token.to_owned()).or_insert(0) += 1;
}

/// Adds every count of `src` into `dst`.
///
/// Frequency maps merge as a commutative monoid, which is what allows the
/// corpus pass to be split into independently accumulated chunks.
pub fn merge_counts(dst: &mut FrequencyMap, src: FrequencyMap) {
	for (token, count) in src {
		*dst.entry(token).or_insert(0) += count;
	}
}

/// Frequency maps bucketed by structural position inside the source word.
///
/// Shared by the n-gram, syllable and component extractors; each pass
/// decides for itself what counts as start, middle and end.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PositionalFrequencies {
	pub start: FrequencyMap,
	pub middle: FrequencyMap,
	pub end: FrequencyMap,
}

impl PositionalFrequencies {
	/// Merges another set of buckets into this one, bucket by bucket.
	pub fn merge(&mut self, other: PositionalFrequencies) {
		merge_counts(&mut self.start, other.start);
		merge_counts(&mut self.middle, other.middle);
		merge_counts(&mut self.end, other.end);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tally_starts_at_one_and_increments() {
		let mut map = FrequencyMap::new();
		tally(&mut map, "an");
		tally(&mut map, "an");
		tally(&mut map, "na");
		assert_eq!(map.get("an"), Some(&2));
		assert_eq!(map.get("na"), Some(&1));
	}

	#[test]
	fn merge_adds_counts_for_shared_tokens() {
		let mut dst = FrequencyMap::from([("an".to_owned(), 2), ("ba".to_owned(), 1)]);
		let src = FrequencyMap::from([("an".to_owned(), 3), ("na".to_owned(), 4)]);
		merge_counts(&mut dst, src);
		assert_eq!(dst.get("an"), Some(&5));
		assert_eq!(dst.get("ba"), Some(&1));
		assert_eq!(dst.get("na"), Some(&4));
	}

	#[test]
	fn serialization_is_lexicographic() {
		let mut map = FrequencyMap::new();
		tally(&mut map, "zz");
		tally(&mut map, "aa");
		tally(&mut map, "mm");
		let json = serde_json::to_string(&map).unwrap();
		assert_eq!(json, "{\"aa\":1,\"mm\":1,\"zz\":1}");
	}

	#[test]
	fn positional_merge_keeps_buckets_separate() {
		let mut dst = PositionalFrequencies::default();
		tally(&mut dst.start, "ba");
		let mut other = PositionalFrequencies::default();
		tally(&mut other.start, "ba");
		tally(&mut other.end, "na");
		dst.merge(other);
		assert_eq!(dst.start.get("ba"), Some(&2));
		assert_eq!(dst.end.get("na"), Some(&1));
		assert!(dst.middle.is_empty());
	}
}
