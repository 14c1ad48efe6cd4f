use std::collections::HashMap;
use std::fmt;

use log::debug;

use super::successors::Successors;
use crate::error::{ModelError, Result};

/// Maps every window of a corpus to the characters that followed it.
///
/// A window is a run of exactly `window_length` characters. Windows are
/// compared exactly: case and whitespace matter.
///
/// # Responsibilities
/// - Slide a window over a corpus and count each window's successors
/// - Finalize every successor list into cumulative probabilities
/// - Look up the successors of a window during generation
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key of `windows` has exactly `window_length` characters
/// - After [`train`](Self::train) returns, every list is finalized
#[derive(Clone, Debug)]
pub struct FrequencyTable {
	window_length: usize,
	windows: HashMap<String, Successors>,
}

impl FrequencyTable {
	/// Creates an empty table for windows of `window_length` characters.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength(window_length));
		}
		Ok(Self { window_length, windows: HashMap::new() })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Builds the table from `corpus`, discarding any previous content.
	///
	/// The first `window_length` characters seed the window; each following
	/// character is counted as a successor of the current window, then
	/// becomes the window's last character.
	///
	/// # Notes
	/// - A corpus shorter than the window leaves the table empty.
	/// - The result only depends on the corpus and the window length.
	pub fn train<I: IntoIterator<Item = char>>(&mut self, corpus: I) {
		self.windows.clear();

		let mut chars = corpus.into_iter();
		let mut window: String = chars.by_ref().take(self.window_length).collect();
		let mut read = window.chars().count();
		if read < self.window_length {
			debug!("corpus has {read} characters, shorter than window length {}", self.window_length);
			return;
		}

		for next_char in chars {
			match self.windows.get_mut(&window) {
				Some(successors) => successors.add_transition(next_char),
				None => {
					let mut successors = Successors::new();
					successors.add_transition(next_char);
					self.windows.insert(window.clone(), successors);
				}
			}
			window.remove(0);
			window.push(next_char);
			read += 1;
		}

		for successors in self.windows.values_mut() {
			successors.compute_probabilities();
		}

		debug!(
			"trained {} windows of length {} from {read} characters",
			self.windows.len(),
			self.window_length
		);
	}

	/// Returns the successors of `window`, or `None` if it was never observed.
	pub fn get(&self, window: &str) -> Option<&Successors> {
		self.windows.get(window)
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Iterates over all windows, in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Successors)> {
		self.windows.iter().map(|(window, successors)| (window.as_str(), successors))
	}
}

/// One line per window, sorted by window:
/// `"ab" : ('c' 2 0.6667 0.6667) ('d' 1 0.3333 1.0000)`
impl fmt::Display for FrequencyTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut windows: Vec<_> = self.windows.iter().collect();
		windows.sort_by(|a, b| a.0.cmp(b.0));
		for (window, successors) in windows {
			writeln!(f, "{window:?} : {successors}")?;
		}
		Ok(())
	}
}
