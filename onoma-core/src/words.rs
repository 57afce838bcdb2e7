use std::fs;
use std::path::Path;

use crate::analysis::codepoints::decode_lossy;
use crate::error::AnalysisError;

/// Loads and normalizes a word list from a line-oriented text file.
///
/// # Behavior
/// - One word per line; `#` starts a comment that runs to the end of the
///   line, so full-line headers and trailing annotations are both
///   dropped.
/// - Whitespace is removed entirely (including the `\r` of CRLF line
///   endings) and the remainder is lowercased.
/// - Lines left empty after normalization are skipped; surviving words
///   shorter than `min_length` codepoints are filtered out.
/// - Invalid byte sequences are dropped silently, keeping the valid
///   codepoints around them.
/// - Corpus order follows file order; nothing is sorted or deduplicated.
///
/// # Errors
/// - [`AnalysisError::Read`] if the file cannot be read.
/// - [`AnalysisError::NoWords`] if filtering leaves nothing to analyze.
pub fn read_words<P: AsRef<Path>>(path: P, min_length: usize) -> Result<Vec<String>, AnalysisError> {
	let path = path.as_ref();
	let bytes = fs::read(path)
		.map_err(|source| AnalysisError::Read { path: path.to_owned(), source })?;

	let words: Vec<String> = bytes
		.split(|&byte| byte == b'\n')
		.filter_map(normalize_line)
		.filter(|word| word.chars().count() >= min_length)
		.collect();

	if words.is_empty() {
		return Err(AnalysisError::NoWords { path: path.to_owned() });
	}
	Ok(words)
}

/// Turns one raw line into a normalized word, or `None` if nothing
/// remains.
fn normalize_line(line: &[u8]) -> Option<String> {
	let content = match line.iter().position(|&byte| byte == b'#') {
		Some(comment_start) => &line[..comment_start],
		None => line,
	};

	let word: String = decode_lossy(content)
		.chars()
		.filter(|c| !c.is_whitespace())
		.flat_map(|c| c.to_lowercase())
		.collect();

	(!word.is_empty()).then_some(word)
}
