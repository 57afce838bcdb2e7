//! The text analysis engine.
//!
//! Every component here is a pure batch computation: words go in, frequency
//! tables and transition tables come out. Nothing is mutated after the
//! corpus pass completes, and the same input with the same configuration
//! always produces the same aggregate.
//!
//! Text is sliced exclusively through codepoint boundaries: no component
//! ever cuts a string at a raw byte offset, so multi-byte input stays
//! intact end to end.

/// Codepoint boundary tables over byte-encoded text.
///
/// Every slicing operation in the engine goes through this indexer.
pub mod codepoints;

/// Onset/nucleus/coda component extraction over segmentation output.
pub mod components;

/// The corpus aggregator: drives the extractors across all words, merges
/// partial results and assembles the final aggregate.
pub mod corpus;

/// Frequency containers shared by every extractor: token-count maps and
/// start/middle/end positional buckets.
pub mod freq;

/// Markov chain construction, character-level and syllable-level.
pub mod markov;

/// Fixed-length n-gram extraction and positional bucketing.
pub mod ngrams;

/// Vowel classification and the syllable segmentation heuristic.
pub mod syllables;
