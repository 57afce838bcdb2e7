use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use super::codepoints::CodepointIndex;
use super::freq::{FrequencyMap, PositionalFrequencies, merge_counts, tally};
use super::markov::MarkovChainSet;

/// True for the Latin vowels `{a, e, i, o, u, y}` in either case.
///
/// Every other codepoint — including all non-Latin letters — is treated as
/// consonant-like by the segmenter. This is a stated scope limitation of
/// the heuristic, not a defect: words from non-Latin scripts fall through
/// to the degenerate one-syllable case.
pub fn is_vowel(c: char) -> bool {
	matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// True iff the codepoint is alphabetic and not a vowel.
pub fn is_consonant(c: char) -> bool {
	c.is_alphabetic() && !is_vowel(c)
}

/// One syllable of a word: onset, nucleus and coda substrings, any of
/// which may be empty.
///
/// The token form used everywhere syllables are counted or chained is the
/// plain concatenation `onset + nucleus + coda`, exposed through
/// [`fmt::Display`]. The nucleus is non-empty except in the degenerate
/// no-vowel fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllable {
	/// Consonant cluster before the nucleus (possibly empty).
	pub onset: String,
	/// Vowel run forming the core of the syllable.
	pub nucleus: String,
	/// Consonant cluster after the nucleus (possibly empty).
	pub coda: String,
}

impl fmt::Display for Syllable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.onset, self.nucleus, self.coda)
	}
}

/// Splits a lowercase-folded word into an ordered sequence of syllables.
///
/// The sequence covers the whole word with no gaps and no overlaps:
/// concatenating every syllable's onset, nucleus and coda in order
/// reconstructs the input exactly.
///
/// # Behavior
/// - Maximal runs of consecutive vowels become nuclei, one syllable per
///   run, scanned left to right.
/// - The consonant span between two nuclei is divided by length `m`:
///   `m == 1` opens the following syllable (V-CV); `m >= 2` leaves its
///   first consonant as the previous syllable's coda and opens the
///   following syllable with the rest (VC-CV, VC-CCV, ...).
/// - Leading consonants all belong to the first onset; trailing
///   consonants all belong to the last coda.
/// - A word with no vowel at all yields a single syllable holding the
///   whole word in its onset, with empty nucleus and coda.
pub fn detect_syllables(word: &str) -> Vec<Syllable> {
	let mut syllables = Vec::new();
	if word.is_empty() {
		return syllables;
	}

	let index = CodepointIndex::of(word);
	let len = index.char_count();

	// Maximal vowel runs as [start, end) codepoint indices.
	let mut vowel_groups: Vec<(usize, usize)> = Vec::new();
	let mut run_start: Option<usize> = None;
	for (pos, c) in word.chars().enumerate() {
		if is_vowel(c) {
			if run_start.is_none() {
				run_start = Some(pos);
			}
		} else if let Some(start) = run_start.take() {
			vowel_groups.push((start, pos));
		}
	}
	if let Some(start) = run_start {
		vowel_groups.push((start, len));
	}

	// Degenerate fallback: no nucleus anywhere in the word.
	if vowel_groups.is_empty() {
		syllables.push(Syllable { onset: word.to_owned(), ..Syllable::default() });
		return syllables;
	}

	for (group_idx, &(v_start, v_end)) in vowel_groups.iter().enumerate() {
		let mut syllable = Syllable {
			nucleus: index.slice(word, v_start, v_end).to_owned(),
			..Syllable::default()
		};

		// Consonant span between the previous nucleus (or the word start)
		// and this one.
		let span_start = if group_idx == 0 { 0 } else { vowel_groups[group_idx - 1].1 };
		let span_len = v_start - span_start;

		if group_idx == 0 {
			// Every leading consonant opens the first syllable.
			syllable.onset = index.slice(word, span_start, v_start).to_owned();
		} else if span_len == 1 {
			// V-CV: the lone consonant opens this syllable; the previous
			// coda stays empty.
			syllable.onset = index.slice(word, span_start, v_start).to_owned();
		} else if span_len >= 2 {
			// VC-CV: the first consonant closes the previous syllable,
			// the rest open this one.
			if let Some(previous) = syllables.last_mut() {
				previous.coda = index.slice(word, span_start, span_start + 1).to_owned();
			}
			syllable.onset = index.slice(word, span_start + 1, v_start).to_owned();
		}

		// Trailing consonants after the last nucleus close the word.
		if group_idx == vowel_groups.len() - 1 {
			syllable.coda = index.slice(word, v_end, len).to_owned();
		}

		syllables.push(syllable);
	}

	syllables
}

/// Syllable-level analysis results.
///
/// ## Invariants
/// - `all_syllables` is exactly the key set of `syllable_frequencies`,
///   ordered by first occurrence in the corpus scan (the frequency map
///   itself serializes lexicographically).
/// - `syllable_markov` is built once, after the whole corpus has been
///   segmented, over the flattened cross-word syllable sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SyllableAnalysis {
	/// Unique syllable tokens in first-occurrence order.
	pub all_syllables: Vec<String>,
	pub syllable_frequencies: FrequencyMap,
	pub positional_syllables: PositionalFrequencies,
	pub syllable_markov: MarkovChainSet,
	/// Membership index for `all_syllables`.
	#[serde(skip)]
	seen: HashSet<String>,
}

impl SyllableAnalysis {
	/// Creates empty tables, with chain slots for orders `1..=markov_order`.
	pub fn new(markov_order: usize) -> Self {
		Self {
			all_syllables: Vec::new(),
			syllable_frequencies: FrequencyMap::new(),
			positional_syllables: PositionalFrequencies::default(),
			syllable_markov: MarkovChainSet::new(markov_order),
			seen: HashSet::new(),
		}
	}

	/// Folds one word's syllable tokens into the frequency tables.
	///
	/// The first syllable counts as `start`, the last as `end`, everything
	/// in between as `middle`; a single-syllable word counts only as
	/// `start`. Chains are not touched here — they are corpus-global and
	/// built from the flattened sequence once all words are in.
	pub fn observe_tokens(&mut self, tokens: &[String]) {
		for (i, token) in tokens.iter().enumerate() {
			if self.seen.insert(token.clone()) {
				self.all_syllables.push(token.clone());
			}
			tally(&mut self.syllable_frequencies, token);
			if i == 0 {
				tally(&mut self.positional_syllables.start, token);
			} else if i == tokens.len() - 1 {
				tally(&mut self.positional_syllables.end, token);
			} else {
				tally(&mut self.positional_syllables.middle, token);
			}
		}
	}

	/// Merges another partial accumulation into this one.
	///
	/// `other` must come from a later chunk of the corpus scan so that
	/// first-occurrence order is preserved.
	pub fn merge(&mut self, other: SyllableAnalysis) {
		for token in other.all_syllables {
			if self.seen.insert(token.clone()) {
				self.all_syllables.push(token);
			}
		}
		merge_counts(&mut self.syllable_frequencies, other.syllable_frequencies);
		self.positional_syllables.merge(other.positional_syllables);
		self.syllable_markov.merge(other.syllable_markov);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn triple(onset: &str, nucleus: &str, coda: &str) -> Syllable {
		Syllable {
			onset: onset.to_owned(),
			nucleus: nucleus.to_owned(),
			coda: coda.to_owned(),
		}
	}

	#[test]
	fn vowel_classification_covers_both_cases() {
		for c in ['a', 'e', 'i', 'o', 'u', 'y', 'A', 'Y'] {
			assert!(is_vowel(c), "{c} should be a vowel");
		}
		for c in ['b', 'Z', 'é', 'ß', 'あ', '7', '-'] {
			assert!(!is_vowel(c), "{c} should not be a vowel");
		}
	}

	#[test]
	fn consonants_must_be_alphabetic() {
		assert!(is_consonant('b'));
		assert!(is_consonant('ß'));
		assert!(!is_consonant('a'));
		assert!(!is_consonant('7'));
		assert!(!is_consonant('-'));
	}

	#[test]
	fn banana_splits_into_three_open_syllables() {
		assert_eq!(
			detect_syllables("banana"),
			vec![triple("b", "a", ""), triple("n", "a", ""), triple("n", "a", "")]
		);
	}

	#[test]
	fn apple_backpatches_the_first_coda() {
		// Boundary span "ppl" (length 3): "p" closes the first syllable,
		// "pl" opens the second.
		assert_eq!(detect_syllables("apple"), vec![triple("", "a", "p"), triple("pl", "e", "")]);
	}

	#[test]
	fn single_consonant_between_nuclei_opens_the_next_syllable() {
		assert_eq!(detect_syllables("lua"), vec![triple("l", "u", ""), triple("", "a", "")]);
	}

	#[test]
	fn adjacent_vowels_form_one_nucleus() {
		assert_eq!(detect_syllables("queen"), vec![triple("q", "uee", "n")]);
	}

	#[test]
	fn single_vowel_group_takes_coda_from_the_trailing_run() {
		assert_eq!(detect_syllables("strand"), vec![triple("str", "a", "nd")]);
	}

	#[test]
	fn word_ending_on_a_nucleus_has_an_empty_final_coda() {
		assert_eq!(detect_syllables("sofa"), vec![triple("s", "o", ""), triple("f", "a", "")]);
	}

	#[test]
	fn no_vowel_word_falls_back_to_a_single_onset() {
		assert_eq!(detect_syllables("brr"), vec![triple("brr", "", "")]);
	}

	#[test]
	fn empty_word_yields_no_syllables() {
		assert!(detect_syllables("").is_empty());
	}

	#[test]
	fn multibyte_consonants_are_segmented_on_codepoint_boundaries() {
		// 'ï' is not in the vowel set, so "naïve" has nuclei "a" and "e"
		// with the two-consonant span "ïv" between them.
		assert_eq!(detect_syllables("naïve"), vec![triple("n", "a", "ï"), triple("v", "e", "")]);
	}

	#[test]
	fn segmentation_reconstructs_the_word() {
		for word in [
			"banana", "apple", "strand", "queen", "brr", "naïve", "aesthetically",
			"rhythm", "ouija", "straßenfest", "a", "io", "xylophone",
		] {
			let rebuilt: String = detect_syllables(word)
				.iter()
				.map(Syllable::to_string)
				.collect();
			assert_eq!(rebuilt, word, "syllables must cover {word} exactly");
		}
	}

	#[test]
	fn tokens_count_into_positional_buckets() {
		let mut analysis = SyllableAnalysis::new(1);
		let tokens: Vec<String> =
			detect_syllables("banana").iter().map(|s| s.to_string()).collect();
		analysis.observe_tokens(&tokens);

		assert_eq!(analysis.all_syllables, vec!["ba".to_owned(), "na".to_owned()]);
		assert_eq!(analysis.syllable_frequencies.get("na"), Some(&2));
		assert_eq!(analysis.positional_syllables.start.get("ba"), Some(&1));
		assert_eq!(analysis.positional_syllables.middle.get("na"), Some(&1));
		assert_eq!(analysis.positional_syllables.end.get("na"), Some(&1));
	}

	#[test]
	fn single_syllable_words_count_only_as_start() {
		let mut analysis = SyllableAnalysis::new(1);
		analysis.observe_tokens(&["strand".to_owned()]);
		assert_eq!(analysis.positional_syllables.start.get("strand"), Some(&1));
		assert!(analysis.positional_syllables.end.is_empty());
	}

	#[test]
	fn merge_preserves_first_occurrence_order() {
		let mut first = SyllableAnalysis::new(1);
		first.observe_tokens(&["na".to_owned(), "ba".to_owned()]);
		let mut second = SyllableAnalysis::new(1);
		second.observe_tokens(&["ba".to_owned(), "zu".to_owned()]);

		first.merge(second);
		assert_eq!(
			first.all_syllables,
			vec!["na".to_owned(), "ba".to_owned(), "zu".to_owned()]
		);
		assert_eq!(first.syllable_frequencies.get("ba"), Some(&2));
	}
}
