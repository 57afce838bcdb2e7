use serde::Serialize;

/// Configuration of one analysis run.
///
/// A snapshot of this structure is embedded in the serialized results, so
/// downstream consumers can tell which input and options produced a given
/// statistics file. Fields serialize in the order they are declared.
///
/// ## Invariants
/// - `markov_order` is between 1 and 3 inclusive; validation is owned by
///   the caller (the CLI rejects out-of-range values before the engine
///   ever sees them).
/// - `min_word_length` is at least 1 and counts codepoints, not bytes.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisConfig {
	/// Path of the analyzed word list, echoed into the result snapshot.
	pub input_file: String,

	/// Highest Markov order to build. Chains are built for every order
	/// from 1 up to this value, at the character level and (when enabled)
	/// at the syllable level.
	pub markov_order: usize,

	/// Minimum codepoint length a word must have to enter the corpus.
	/// Applied by the word source, not by the engine.
	pub min_word_length: usize,

	/// Build syllable-level frequency tables and Markov chains.
	#[serde(rename = "syllables_enabled")]
	pub enable_syllables: bool,

	/// Build onset/nucleus/coda component frequency tables.
	#[serde(rename = "components_enabled")]
	pub enable_components: bool,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self {
			input_file: String::new(),
			markov_order: 2,
			min_word_length: 2,
			enable_syllables: false,
			enable_components: false,
		}
	}
}
