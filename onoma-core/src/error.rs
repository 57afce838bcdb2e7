use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading the word list or driving the analysis.
///
/// The analysis engine itself is infallible once it holds a non-empty
/// corpus: contract misuse (for example a chain order longer than the
/// available sequence) yields empty tables rather than an error.
#[derive(Debug, Error)]
pub enum AnalysisError {
	/// The input file could not be opened or read.
	#[error("failed to read word list {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Every line of the input was filtered out (comments, whitespace,
	/// minimum-length filtering), leaving nothing to analyze.
	#[error("no valid words found in {path}")]
	NoWords { path: PathBuf },

	/// The corpus handed to the analyzer was empty. Averages are undefined
	/// for an empty corpus, so the analysis refuses to start.
	#[error("cannot analyze an empty corpus")]
	EmptyCorpus,
}
