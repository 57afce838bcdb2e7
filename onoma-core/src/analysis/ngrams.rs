use serde::Serialize;

use super::codepoints::CodepointIndex;
use super::freq::{FrequencyMap, PositionalFrequencies, merge_counts, tally};
use super::markov::MarkovChainSet;

/// Counts every window of `n` codepoints in `word` into `counts`.
///
/// Words shorter than the window record nothing. Used with `n` in
/// `1..=4` to populate the unigram through fourgram tables.
pub fn extract_ngrams(word: &str, n: usize, counts: &mut FrequencyMap) {
	let index = CodepointIndex::of(word);
	let len = index.char_count();
	if len < n {
		return;
	}
	for start in 0..=len - n {
		tally(counts, index.slice(word, start, start + n));
	}
}

/// Counts the first, middle and last windows of `n` codepoints into the
/// matching positional buckets.
///
/// # Behavior
/// The window at offset 0 goes into `start` and the window at offset
/// `L - n` into `end` — for a word of exactly `n` codepoints that is the
/// same substring counted twice, once per bucket. Windows strictly
/// between the two go into `middle`. Words shorter than the window
/// record nothing.
pub fn extract_positional_ngrams(word: &str, n: usize, counts: &mut PositionalFrequencies) {
	let index = CodepointIndex::of(word);
	let len = index.char_count();
	if len < n {
		return;
	}
	tally(&mut counts.start, index.slice(word, 0, n));
	tally(&mut counts.end, index.slice(word, len - n, len));
	for start in 1..len - n {
		tally(&mut counts.middle, index.slice(word, start, start + n));
	}
}

/// Character-level frequency tables for one corpus: plain and positional
/// n-grams plus the per-word character chains.
#[derive(Debug, Clone, Serialize)]
pub struct LetterAnalysis {
	pub unigrams: FrequencyMap,
	pub bigrams: FrequencyMap,
	pub trigrams: FrequencyMap,
	pub fourgrams: FrequencyMap,
	pub positional_bigrams: PositionalFrequencies,
	pub positional_trigrams: PositionalFrequencies,
	pub markov_chains: MarkovChainSet,
}

impl LetterAnalysis {
	/// Creates empty tables, with chain slots for orders `1..=markov_order`.
	pub fn new(markov_order: usize) -> Self {
		Self {
			unigrams: FrequencyMap::new(),
			bigrams: FrequencyMap::new(),
			trigrams: FrequencyMap::new(),
			fourgrams: FrequencyMap::new(),
			positional_bigrams: PositionalFrequencies::default(),
			positional_trigrams: PositionalFrequencies::default(),
			markov_chains: MarkovChainSet::new(markov_order),
		}
	}

	/// Folds one word into every character-level table.
	pub fn observe_word(&mut self, word: &str) {
		extract_ngrams(word, 1, &mut self.unigrams);
		extract_ngrams(word, 2, &mut self.bigrams);
		extract_ngrams(word, 3, &mut self.trigrams);
		extract_ngrams(word, 4, &mut self.fourgrams);
		extract_positional_ngrams(word, 2, &mut self.positional_bigrams);
		extract_positional_ngrams(word, 3, &mut self.positional_trigrams);
		self.markov_chains.observe_word(word);
	}

	/// Adds every count of `other` into this analysis.
	pub fn merge(&mut self, other: LetterAnalysis) {
		merge_counts(&mut self.unigrams, other.unigrams);
		merge_counts(&mut self.bigrams, other.bigrams);
		merge_counts(&mut self.trigrams, other.trigrams);
		merge_counts(&mut self.fourgrams, other.fourgrams);
		self.positional_bigrams.merge(other.positional_bigrams);
		self.positional_trigrams.merge(other.positional_trigrams);
		self.markov_chains.merge(other.markov_chains);
	}
}
