use serde::Serialize;

use super::freq::{FrequencyMap, PositionalFrequencies, merge_counts, tally};
use super::syllables::Syllable;

/// Occurrence counts for each syllable part across the corpus.
///
/// Empty onsets and codas are real observations — a vowel-initial
/// syllable has an empty onset — and are counted under the empty-string
/// key rather than dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentFrequencies {
	pub onsets: FrequencyMap,
	pub nuclei: FrequencyMap,
	pub codas: FrequencyMap,
}

impl ComponentFrequencies {
	/// Adds every count of `other` into this table.
	pub fn merge(&mut self, other: ComponentFrequencies) {
		merge_counts(&mut self.onsets, other.onsets);
		merge_counts(&mut self.nuclei, other.nuclei);
		merge_counts(&mut self.codas, other.codas);
	}
}

/// Component-level analysis: overall part frequencies plus positional
/// tables for onsets and codas.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComponentAnalysis {
	pub frequencies: ComponentFrequencies,
	pub positional_onsets: PositionalFrequencies,
	pub positional_codas: PositionalFrequencies,
}

impl ComponentAnalysis {
	/// Folds one word's syllable sequence into the component tables.
	///
	/// The first syllable's parts count as `start`, the last's as `end`,
	/// everything in between as `middle`; a single-syllable word counts
	/// only as `start`.
	pub fn observe_syllables(&mut self, syllables: &[Syllable]) {
		for (i, syllable) in syllables.iter().enumerate() {
			tally(&mut self.frequencies.onsets, &syllable.onset);
			tally(&mut self.frequencies.nuclei, &syllable.nucleus);
			tally(&mut self.frequencies.codas, &syllable.coda);

			let (onset_bucket, coda_bucket) = if i == 0 {
				(&mut self.positional_onsets.start, &mut self.positional_codas.start)
			} else if i == syllables.len() - 1 {
				(&mut self.positional_onsets.end, &mut self.positional_codas.end)
			} else {
				(&mut self.positional_onsets.middle, &mut self.positional_codas.middle)
			};
			tally(onset_bucket, &syllable.onset);
			tally(coda_bucket, &syllable.coda);
		}
	}

	/// Adds every count of `other` into this analysis.
	pub fn merge(&mut self, other: ComponentAnalysis) {
		self.frequencies.merge(other.frequencies);
		self.positional_onsets.merge(other.positional_onsets);
		self.positional_codas.merge(other.positional_codas);
	}
}
