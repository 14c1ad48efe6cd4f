use std::fmt;
use std::io::Read;
use std::path::Path;

use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::frequency_table::FrequencyTable;
use super::generation_target::GenerationTarget;
use crate::error::Result;
use crate::io;

/// A sliding-window language model and its generator.
///
/// # Responsibilities
/// - Own the frequency table and the random source used to sample it
/// - Train the table from a corpus (iterator, reader or file)
/// - Extend a seed text one character at a time
///
/// The random source is owned by the model and only borrowed mutably by
/// generation, so concurrent generations on one instance cannot interleave
/// their draws.
#[derive(Debug)]
pub struct LanguageModel<R = StdRng> {
	table: FrequencyTable,
	rng: R,
}

impl LanguageModel<StdRng> {
	/// Creates a model whose random source is seeded from the OS.
	///
	/// Generated texts differ from one run to the next.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Self::with_rng(window_length, StdRng::from_os_rng())
	}

	/// Creates a model with a deterministic random source.
	///
	/// Two models built with the same `seed` and trained on the same corpus
	/// generate the same texts.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn seeded(window_length: usize, seed: u64) -> Result<Self> {
		Self::with_rng(window_length, StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> LanguageModel<R> {
	/// Creates a model drawing from `rng`.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_rng(window_length: usize, rng: R) -> Result<Self> {
		Ok(Self { table: FrequencyTable::new(window_length)?, rng })
	}

	pub fn window_length(&self) -> usize {
		self.table.window_length()
	}

	/// Read-only access to the trained table.
	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	/// Trains the model on a sequence of characters.
	///
	/// See [`FrequencyTable::train`].
	pub fn train<I: IntoIterator<Item = char>>(&mut self, corpus: I) {
		self.table.train(corpus);
	}

	/// Reads the whole `reader` as UTF-8 text and trains on it.
	///
	/// # Errors
	/// Returns an error if reading fails or the text is not valid UTF-8.
	/// The table is left untouched in that case.
	pub fn train_reader<Rd: Read>(&mut self, reader: Rd) -> Result<()> {
		let corpus = io::read_corpus(reader)?;
		self.train(corpus.chars());
		Ok(())
	}

	/// Reads the text file at `path` and trains on it.
	///
	/// # Errors
	/// Returns an error if the file cannot be opened or read.
	pub fn train_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
		let corpus = io::read_corpus_file(path)?;
		self.train(corpus.chars());
		Ok(())
	}

	/// Appends up to `length` generated characters to `seed`.
	///
	/// Same as `generate_with(seed, GenerationTarget::Append(length))`.
	pub fn generate(&mut self, seed: &str, length: usize) -> String {
		self.generate_with(seed, GenerationTarget::Append(length))
	}

	/// Extends `seed` until `target` is reached.
	///
	/// # Behavior
	/// - A seed shorter than the window is returned unchanged.
	/// - Each step looks up the last `window_length` characters of the text,
	///   draws a successor and appends it.
	/// - Generation stops early, returning the text built so far, as soon as
	///   the current window is not in the table.
	pub fn generate_with(&mut self, seed: &str, target: GenerationTarget) -> String {
		let window_length = self.table.window_length();
		let seed_len = seed.chars().count();
		if seed_len < window_length {
			trace!("seed {seed:?} is shorter than window length {window_length}");
			return seed.to_owned();
		}

		let to_add = target.chars_to_add(seed_len);
		let mut text = seed.to_owned();

		// Trailing window of the text, kept in sync as characters are appended
		let mut window: String = seed.chars().skip(seed_len - window_length).collect();
		let rng = &mut self.rng;
		for added in 0..to_add {
			let sampled = match self.table.get(&window) {
				Some(successors) => successors.sample(&mut *rng),
				None => None,
			};
			let next_char = match sampled {
				Some(c) => c,
				None => {
					trace!("window {window:?} never seen, stopping after {added} of {to_add} characters");
					break;
				}
			};
			text.push(next_char);
			window.remove(0);
			window.push(next_char);
		}

		text
	}
}

impl<R> fmt::Display for LanguageModel<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.table, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ModelError;

	const TEXT: &str = "the theory of the thermal thesis is that the theme is there, then the others thaw";

	fn trained(window_length: usize, seed: u64, corpus: &str) -> LanguageModel {
		let mut model = LanguageModel::seeded(window_length, seed).unwrap();
		model.train(corpus.chars());
		model
	}

	#[test]
	fn rejects_zero_window() {
		assert!(matches!(LanguageModel::new(0), Err(ModelError::InvalidWindowLength(0))));
		assert!(matches!(LanguageModel::seeded(0, 1), Err(ModelError::InvalidWindowLength(0))));
	}

	#[test]
	fn cycle_is_seed_independent() {
		for seed in [0, 1, 20, 12345] {
			let mut model = trained(2, seed, "abcabcabc");
			assert_eq!(model.generate("ab", 6), "abcabcab");
		}
	}

	#[test]
	fn repeated_character_runs() {
		let mut model = trained(1, 3, "aaaa");
		assert_eq!(model.generate("a", 0), "a");
		assert_eq!(model.generate("a", 9), "a".repeat(10));
		assert_eq!(model.generate_with("a", GenerationTarget::Total(9)), "a".repeat(9));
	}

	#[test]
	fn short_seed_is_returned_unchanged() {
		let mut model = trained(3, 1, TEXT);
		assert_eq!(model.generate("", 50), "");
		assert_eq!(model.generate("th", 50), "th");
		assert_eq!(model.generate_with("th", GenerationTarget::Total(50)), "th");
	}

	#[test]
	fn empty_table_returns_seed() {
		let mut model = trained(5, 1, "abc");
		assert!(model.table().is_empty());
		assert_eq!(model.generate("abcde", 10), "abcde");
		assert_eq!(model.generate("ab", 10), "ab");
	}

	#[test]
	fn stops_at_unseen_window() {
		let mut model = trained(2, 1, "abcd");
		assert_eq!(model.generate("ab", 10), "abcd");
		assert_eq!(model.generate("xab", 10), "xabcd");
		assert_eq!(model.generate("ba", 10), "ba");
		// Only the trailing window matters
		assert_eq!(model.generate("zzbc", 10), "zzbcd");
	}

	#[test]
	fn append_and_total_boundaries() {
		let mut model = trained(2, 1, "abcabcabc");
		assert_eq!(model.generate_with("ab", GenerationTarget::Append(0)), "ab");
		assert_eq!(model.generate_with("ab", GenerationTarget::Append(1)), "abc");
		assert_eq!(model.generate_with("ab", GenerationTarget::Total(2)), "ab");
		assert_eq!(model.generate_with("ab", GenerationTarget::Total(3)), "abc");
		assert_eq!(model.generate_with("ab", GenerationTarget::Total(5)), "abcab");
		assert_eq!(model.generate_with("abcab", GenerationTarget::Total(3)), "abcab");
	}

	#[test]
	fn seeded_generation_is_reproducible() {
		let mut first = trained(2, 20, TEXT);
		let mut second = trained(2, 20, TEXT);
		for _ in 0..5 {
			assert_eq!(first.generate("th", 200), second.generate("th", 200));
		}
	}

	#[test]
	fn generated_windows_come_from_corpus() {
		let mut model = trained(3, 9, TEXT);
		let text = model.generate("the", 300);
		let chars: Vec<char> = text.chars().collect();
		for span in chars.windows(4) {
			let ngram: String = span.iter().collect();
			assert!(TEXT.contains(&ngram), "{ngram:?} not in corpus");
		}
	}

	#[test]
	fn train_reader_rejects_invalid_utf8() {
		let mut model = trained(1, 1, "abab");
		let err = model.train_reader(&[0x61, 0xc3, 0x28][..]).unwrap_err();
		assert!(matches!(err, ModelError::Io(_)));
		assert_eq!(model.table().len(), 2);
	}

	#[test]
	fn train_reader_reads_text() {
		let mut model = LanguageModel::seeded(2, 1).unwrap();
		model.train_reader("abcabcabc".as_bytes()).unwrap();
		assert_eq!(model.table().len(), 3);
		assert_eq!(model.generate("bc", 4), "bcabca");
	}

	#[test]
	fn train_file_reports_missing_file() {
		let mut model = LanguageModel::seeded(2, 1).unwrap();
		let err = model.train_file("no/such/corpus.txt").unwrap_err();
		assert!(matches!(err, ModelError::Io(_)));
	}

	#[test]
	fn display_delegates_to_table() {
		let model = trained(1, 1, "abac");
		assert_eq!(model.to_string(), model.table().to_string());
	}
}
