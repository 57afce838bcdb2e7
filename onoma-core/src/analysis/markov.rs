use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::codepoints::CodepointIndex;
use super::freq::{FrequencyMap, merge_counts};

/// Boundary marker prepended to a word before character transitions are
/// recorded (one copy per order level).
pub const START_MARKER: char = '^';

/// Boundary marker appended to a word before character transitions are
/// recorded.
pub const END_MARKER: char = '$';

/// Separator between syllable tokens inside a multi-token context key.
pub const CONTEXT_SEPARATOR: &str = "|";

/// Transition table of one order: context token → next-token counts.
pub type MarkovChain = BTreeMap<String, FrequencyMap>;

fn record_transition(chain: &mut MarkovChain, context: String, next: &str) {
	let successors = chain.entry(context).or_default();
	*successors.entry(next.to_owned()).or_insert(0) += 1;
}

/// Family of Markov chains for every order `1..=K`.
///
/// Two observation modes share the same update primitive but differ in
/// their treatment of boundaries:
/// - character mode ([`observe_word`](Self::observe_word)) resets at every
///   word, padding it with boundary markers so generators can learn
///   word-start and word-end tendencies;
/// - syllable mode ([`observe_sequence`](Self::observe_sequence)) runs
///   over one corpus-wide token sequence with no markers and no reset, so
///   transitions span word boundaries.
///
/// ## Invariants
/// - A chain exists for every order `1..=K` from construction on, even
///   when it never receives a transition; serialization therefore always
///   emits every `order_<k>` key.
/// - Inputs no longer than the order leave the chain untouched. This is
///   not an error.
#[derive(Debug, Clone)]
pub struct MarkovChainSet {
	chains: BTreeMap<usize, MarkovChain>,
}

impl MarkovChainSet {
	/// Creates an empty chain for every order in `1..=max_order`.
	pub fn new(max_order: usize) -> Self {
		let chains = (1..=max_order).map(|order| (order, MarkovChain::new())).collect();
		Self { chains }
	}

	/// Records one word's character transitions into every chain.
	///
	/// # Behavior
	/// For a chain of order `k` the word is padded to
	/// `^^..^ (k times) + word + $` and every window of `k` codepoints
	/// followed by one codepoint becomes a context/next pair. The padded
	/// codepoint length `N` yields exactly `N - k` transitions.
	pub fn observe_word(&mut self, word: &str) {
		for (&order, chain) in self.chains.iter_mut() {
			let mut padded = String::with_capacity(order + word.len() + 1);
			for _ in 0..order {
				padded.push(START_MARKER);
			}
			padded.push_str(word);
			padded.push(END_MARKER);

			let index = CodepointIndex::of(&padded);
			let total = index.char_count();
			for start in 0..total - order {
				let context = index.slice(&padded, start, start + order).to_owned();
				let next = index.slice(&padded, start + order, start + order + 1);
				record_transition(chain, context, next);
			}
		}
	}

	/// Records transitions over a flattened token sequence into every
	/// chain.
	///
	/// # Behavior
	/// For a chain of order `k`, every run of `k` consecutive tokens —
	/// joined with [`CONTEXT_SEPARATOR`] — becomes the context for the
	/// token that follows it. No boundary markers are inserted. A sequence
	/// of `k` or fewer tokens records nothing.
	pub fn observe_sequence(&mut self, tokens: &[String]) {
		for (&order, chain) in self.chains.iter_mut() {
			if tokens.len() <= order {
				continue;
			}
			for start in 0..tokens.len() - order {
				let context = tokens[start..start + order].join(CONTEXT_SEPARATOR);
				record_transition(chain, context, &tokens[start + order]);
			}
		}
	}

	/// Returns the chain of the given order, if one was configured.
	pub fn order(&self, k: usize) -> Option<&MarkovChain> {
		self.chains.get(&k)
	}

	/// Adds every transition count of `other` into this set.
	pub fn merge(&mut self, other: MarkovChainSet) {
		for (order, chain) in other.chains {
			let target = self.chains.entry(order).or_default();
			for (context, successors) in chain {
				merge_counts(target.entry(context).or_default(), successors);
			}
		}
	}
}

impl Serialize for MarkovChainSet {
	/// Serializes as an object keyed `order_1`, `order_2`, ... so the
	/// chain order survives the trip into JSON.
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.chains.len()))?;
		for (order, chain) in &self.chains {
			map.serialize_entry(&format!("order_{order}"), chain)?;
		}
		map.end()
	}
}
