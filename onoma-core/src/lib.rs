//! Word-corpus statistics library.
//!
//! This crate ingests a list of words and produces statistical descriptions
//! of their orthographic structure:
//! - Character n-gram frequencies (unigrams through fourgrams)
//! - Position-aware frequencies (word start / middle / end)
//! - Markov transition tables of configurable order, at the character level
//!   and, optionally, at the syllable level
//! - A phonotactic decomposition of each word into onset/nucleus/coda parts
//!
//! The resulting [`analysis::corpus::AnalysisResults`] aggregate is designed
//! to be serialized to JSON and fed to downstream generators (for example
//! procedural name generators) that sample from the learned distributions.
//!
//! All counts are raw, unsmoothed occurrence frequencies.

/// The text analysis engine: codepoint indexing, n-gram extraction,
/// syllable segmentation, Markov chain construction and corpus aggregation.
pub mod analysis;

/// Configuration of one analysis run (Markov order, enabled analyses,
/// minimum word length).
pub mod config;

/// Error types surfaced by the word source and the corpus aggregator.
pub mod error;

/// Word source: line-oriented reading, comment stripping, normalization
/// and length filtering of the input word list.
pub mod words;
