use std::ops::Range;

/// Codepoint boundary table over a byte-encoded string.
///
/// Holds the byte offset of every codepoint boundary plus a final sentinel
/// at the total byte length, so a span of codepoints `[from, to)` can be
/// translated to a byte range in constant time. Higher layers (n-gram
/// extraction, syllable boundaries, Markov contexts) slice text only
/// through this table — never by raw byte offset — which keeps them
/// correct on multi-byte input.
///
/// ## Invariants
/// - `boundaries` is strictly increasing and ends with the byte length.
/// - `char_count()` equals the number of decoded codepoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointIndex {
	boundaries: Vec<usize>,
}

impl CodepointIndex {
	/// Builds the boundary table for text already known to be valid UTF-8.
	pub fn of(text: &str) -> Self {
		let mut boundaries: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
		boundaries.push(text.len());
		Self { boundaries }
	}

	/// Builds the boundary table for raw bytes.
	///
	/// A byte that does not start a valid codepoint at its position is
	/// skipped and produces no boundary entry. This is best-effort
	/// recovery, not an error: malformed input shrinks the table instead
	/// of aborting the run.
	pub fn from_bytes(bytes: &[u8]) -> Self {
		let mut boundaries = Vec::new();
		let mut base = 0;
		for chunk in bytes.utf8_chunks() {
			let valid = chunk.valid();
			boundaries.extend(valid.char_indices().map(|(offset, _)| base + offset));
			base += valid.len() + chunk.invalid().len();
		}
		boundaries.push(bytes.len());
		Self { boundaries }
	}

	/// Number of codepoints covered by the table.
	pub fn char_count(&self) -> usize {
		self.boundaries.len() - 1
	}

	/// True when the indexed text holds no codepoints.
	pub fn is_empty(&self) -> bool {
		self.char_count() == 0
	}

	/// Byte range spanned by the codepoints `[from, to)`.
	///
	/// Both indices must be at most `char_count()`.
	pub fn byte_range(&self, from: usize, to: usize) -> Range<usize> {
		self.boundaries[from]..self.boundaries[to]
	}

	/// Slice of `text` covering the codepoints `[from, to)`.
	///
	/// `text` must be the same string the table was built from.
	pub fn slice<'a>(&self, text: &'a str, from: usize, to: usize) -> &'a str {
		&text[self.byte_range(from, to)]
	}
}

/// Decodes raw bytes into the string of their valid codepoints.
///
/// Bytes that do not decode are dropped, one byte at a time, rather than
/// substituted with a replacement character. Used by the word source to
/// normalize lines before analysis.
pub(crate) fn decode_lossy(bytes: &[u8]) -> String {
	bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
