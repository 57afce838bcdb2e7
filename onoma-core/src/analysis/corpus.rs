use std::collections::BTreeMap;
use std::sync::mpsc;
use std::thread;

use serde::Serialize;

use super::components::ComponentAnalysis;
use super::ngrams::LetterAnalysis;
use super::syllables::{SyllableAnalysis, detect_syllables};
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;

/// Corpus-level counters and derived averages.
///
/// Word lengths count codepoints, never bytes, so the histogram and the
/// averages agree with the codepoint-based extractors under non-ASCII
/// input. Averages are filled in by the aggregator once the whole corpus
/// has been merged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusStats {
	pub total_words: usize,
	pub total_characters: usize,
	/// Sum of all syllable-frequency values; zero when syllable analysis
	/// is disabled.
	pub total_syllables: usize,
	pub avg_word_length: f64,
	pub avg_syllables_per_word: f64,
	/// Word count per codepoint length, in ascending length order.
	pub length_distribution: BTreeMap<usize, usize>,
}

impl CorpusStats {
	/// Counts one word of the given codepoint length.
	pub fn observe_word_length(&mut self, length: usize) {
		self.total_words += 1;
		self.total_characters += length;
		*self.length_distribution.entry(length).or_insert(0) += 1;
	}

	/// Adds the counters of `other` into this one. Averages are left
	/// untouched; they are only meaningful after the final merge.
	pub fn merge(&mut self, other: CorpusStats) {
		self.total_words += other.total_words;
		self.total_characters += other.total_characters;
		self.total_syllables += other.total_syllables;
		for (length, count) in other.length_distribution {
			*self.length_distribution.entry(length).or_insert(0) += count;
		}
	}
}

/// The full statistics aggregate of one analysis run.
///
/// Serializes to the JSON document consumed by downstream generators.
/// The optional sections appear only when the matching configuration flag
/// was set; a disabled analysis is absent from the output rather than
/// present-but-empty.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResults {
	/// Snapshot of the configuration that produced these statistics.
	pub config: AnalysisConfig,
	pub stats: CorpusStats,
	pub letter_analysis: LetterAnalysis,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub syllable_analysis: Option<SyllableAnalysis>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub component_analysis: Option<ComponentAnalysis>,
}

/// Accumulator for one slice of the corpus.
///
/// Holds the same tables as the final aggregate plus the slice's flattened
/// syllable sequence. Syllable chains cannot be built per slice — their
/// transitions span word boundaries — so the sequence is carried along and
/// the chains are built once over the fully merged sequence.
struct PartialAnalysis {
	stats: CorpusStats,
	letters: LetterAnalysis,
	syllables: Option<SyllableAnalysis>,
	components: Option<ComponentAnalysis>,
	syllable_sequence: Vec<String>,
}

impl PartialAnalysis {
	fn new(config: &AnalysisConfig) -> Self {
		Self {
			stats: CorpusStats::default(),
			letters: LetterAnalysis::new(config.markov_order),
			syllables: config
				.enable_syllables
				.then(|| SyllableAnalysis::new(config.markov_order)),
			components: config.enable_components.then(ComponentAnalysis::default),
			syllable_sequence: Vec::new(),
		}
	}

	/// Runs every enabled extractor over one word.
	///
	/// The word is segmented at most once; syllable and component analysis
	/// share the segmentation.
	fn observe_word(&mut self, word: &str) {
		self.stats.observe_word_length(word.chars().count());
		self.letters.observe_word(word);

		if self.syllables.is_none() && self.components.is_none() {
			return;
		}
		let syllables = detect_syllables(word);
		if let Some(components) = &mut self.components {
			components.observe_syllables(&syllables);
		}
		if let Some(analysis) = &mut self.syllables {
			let tokens: Vec<String> = syllables.iter().map(ToString::to_string).collect();
			analysis.observe_tokens(&tokens);
			self.syllable_sequence.extend(tokens);
		}
	}

	/// Merges a later slice into this one. Corpus order must be respected
	/// by the caller: the syllable sequence is order-sensitive.
	fn merge(&mut self, other: PartialAnalysis) {
		self.stats.merge(other.stats);
		self.letters.merge(other.letters);
		if let (Some(mine), Some(theirs)) = (&mut self.syllables, other.syllables) {
			mine.merge(theirs);
		}
		if let (Some(mine), Some(theirs)) = (&mut self.components, other.components) {
			mine.merge(theirs);
		}
		self.syllable_sequence.extend(other.syllable_sequence);
	}
}

/// Analyzes a corpus of words under the given configuration.
///
/// # Behavior
/// - Splits the corpus into chunks (CPU count times a spread factor) and
///   accumulates each chunk on its own thread.
/// - Merges the partial results back in corpus order, then derives the
///   averages and — when enabled — the corpus-wide syllable chains.
///
/// # Errors
/// Returns [`AnalysisError::EmptyCorpus`] for an empty word list: the
/// averages are undefined without at least one word.
pub fn analyze(words: &[String], config: &AnalysisConfig) -> Result<AnalysisResults, AnalysisError> {
	if words.is_empty() {
		return Err(AnalysisError::EmptyCorpus);
	}

	let cpus = num_cpus::get();
	let factor = 8;
	let chunks = cpus * factor;
	let chunk_size = (words.len() + chunks - 1) / chunks;

	Ok(analyze_chunked(words, config, chunk_size))
}

/// Runs the chunked corpus pass with an explicit chunk size.
///
/// `words` must be non-empty and `chunk_size` at least 1.
fn analyze_chunked(
	words: &[String],
	config: &AnalysisConfig,
	chunk_size: usize,
) -> AnalysisResults {
	let (tx, rx) = mpsc::channel();
	for (chunk_index, chunk) in words.chunks(chunk_size).enumerate() {
		let tx = tx.clone();
		let chunk: Vec<String> = chunk.to_vec();
		let config = config.clone();

		thread::spawn(move || {
			let mut partial = PartialAnalysis::new(&config);
			for word in &chunk {
				partial.observe_word(word);
			}
			tx.send((chunk_index, partial)).expect("Failed to send from thread");
		});
	}
	drop(tx);

	// Threads finish in arbitrary order; merging must follow corpus order
	// because first-occurrence tracking and the flattened syllable
	// sequence depend on it.
	let mut partials: Vec<(usize, PartialAnalysis)> = rx.iter().collect();
	partials.sort_by_key(|&(chunk_index, _)| chunk_index);

	let mut merged = PartialAnalysis::new(config);
	for (_, partial) in partials {
		merged.merge(partial);
	}

	finalize(merged, config)
}

/// Derives the averages and the corpus-wide syllable chains, then
/// assembles the final aggregate. The merged corpus holds at least one
/// word.
fn finalize(mut merged: PartialAnalysis, config: &AnalysisConfig) -> AnalysisResults {
	merged.stats.avg_word_length =
		merged.stats.total_characters as f64 / merged.stats.total_words as f64;

	if let Some(analysis) = &mut merged.syllables {
		analysis.syllable_markov.observe_sequence(&merged.syllable_sequence);
		merged.stats.total_syllables = analysis.syllable_frequencies.values().sum();
		merged.stats.avg_syllables_per_word =
			merged.stats.total_syllables as f64 / merged.stats.total_words as f64;
	}

	AnalysisResults {
		config: config.clone(),
		stats: merged.stats,
		letter_analysis: merged.letters,
		syllable_analysis: merged.syllables,
		component_analysis: merged.components,
	}
}
