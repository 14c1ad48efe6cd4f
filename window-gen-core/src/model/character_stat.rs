use std::fmt;

/// One observed successor of a window.
///
/// Holds the raw number of times `chr` followed the window in the corpus,
/// and once the owning list is finalized, the derived probability `p` and
/// the cumulative probability `cp`.
///
/// # Invariants
/// - `count >= 1` once the record has been observed
/// - `p` and `cp` are `0.0` until probabilities are computed
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterStat {
	pub(crate) chr: char,
	pub(crate) count: usize,
	pub(crate) p: f64,
	pub(crate) cp: f64,
}

impl CharacterStat {
	/// Creates an unobserved record for `chr`.
	pub(crate) fn new(chr: char) -> Self {
		Self { chr, count: 0, p: 0.0, cp: 0.0 }
	}

	/// The successor character.
	pub fn chr(&self) -> char {
		self.chr
	}

	/// How many times the character followed the window.
	pub fn count(&self) -> usize {
		self.count
	}

	/// Probability of the character given the window.
	pub fn p(&self) -> f64 {
		self.p
	}

	/// Running sum of `p` up to and including this record.
	pub fn cp(&self) -> f64 {
		self.cp
	}
}

impl fmt::Display for CharacterStat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:?} {} {:.4} {:.4})", self.chr, self.count, self.p, self.cp)
	}
}
