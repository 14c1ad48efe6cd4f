use std::fmt;

use indexmap::IndexMap;
use rand::Rng;

use super::character_stat::CharacterStat;

/// The ordered list of characters observed after one window.
///
/// Records are kept in the order their character was first seen, which is
/// also the order used to accumulate `cp` and to scan during sampling.
///
/// ## Responsibilities:
/// - Accumulate successor occurrences during training
/// - Turn counts into probabilities once training is over
/// - Pick a successor from a uniform draw
///
/// ## Invariants
/// - Each character appears at most once
/// - Insertion order never changes after a record is created
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Successors {
	/// Example: { 'e' => (e 42 ..), 'a' => (a 3 ..) }
	stats: IndexMap<char, CharacterStat>,
}

impl Successors {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self { stats: IndexMap::new() }
	}

	/// Records one occurrence of `next_char` after the window.
	///
	/// - If the character was already seen, its count is increased.
	/// - Otherwise a record with a count of 1 is appended.
	pub fn add_transition(&mut self, next_char: char) {
		self.stats
			.entry(next_char)
			.or_insert_with(|| CharacterStat::new(next_char))
			.count += 1;
	}

	/// Computes `p` and `cp` for every record from the current counts.
	pub(crate) fn compute_probabilities(&mut self) {
		let total = self.total();
		if total == 0 {
			return;
		}

		let mut cumulative = 0.0;
		for stat in self.stats.values_mut() {
			stat.p = stat.count as f64 / total as f64;
			cumulative += stat.p;
			stat.cp = cumulative;
		}
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.stats.values().map(|stat| stat.count).sum()
	}

	pub fn len(&self) -> usize {
		self.stats.len()
	}

	pub fn is_empty(&self) -> bool {
		self.stats.is_empty()
	}

	/// Returns the record of `chr`, if it was observed.
	pub fn get(&self, chr: char) -> Option<&CharacterStat> {
		self.stats.get(&chr)
	}

	/// Iterates over the records in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = &CharacterStat> {
		self.stats.values()
	}

	/// Selects the successor matching the draw `r` in `[0, 1)`.
	///
	/// Returns the first record, in insertion order, whose `cp` is strictly
	/// greater than `r`. When rounding leaves `r` at or above the last `cp`,
	/// the last record is returned.
	///
	/// Returns `None` only if the list is empty.
	pub fn pick(&self, r: f64) -> Option<char> {
		self.stats
			.values()
			.find(|stat| stat.cp > r)
			.or_else(|| self.stats.values().last())
			.map(|stat| stat.chr)
	}

	/// Draws a successor with `rng`, weighted by probability.
	///
	/// The list must have been finalized. Consumes exactly one `f64` from
	/// `rng` when the list is not empty.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<char> {
		if self.stats.is_empty() {
			return None;
		}
		self.pick(rng.random::<f64>())
	}
}

impl fmt::Display for Successors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, stat) in self.stats.values().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{stat}")?;
		}
		Ok(())
	}
}
