/// How far [`LanguageModel::generate_with`](super::language_model::LanguageModel::generate_with)
/// should extend a seed text.
///
/// # Variants
/// - `Append(n)`: add up to `n` characters after the seed.
/// - `Total(n)`: stop once the text, seed included, has `n` characters.
///   A seed already that long is returned as is.
///
/// Both are upper bounds: generation also stops on a window the model
/// never saw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationTarget {
	Append(usize),
	Total(usize),
}

impl GenerationTarget {
	/// Number of characters to add to a seed of `seed_len` characters.
	pub fn chars_to_add(&self, seed_len: usize) -> usize {
		match *self {
			GenerationTarget::Append(n) => n,
			GenerationTarget::Total(n) => n.saturating_sub(seed_len),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn append_ignores_seed_length() {
		assert_eq!(GenerationTarget::Append(5).chars_to_add(0), 5);
		assert_eq!(GenerationTarget::Append(5).chars_to_add(10), 5);
	}

	#[test]
	fn total_includes_seed() {
		assert_eq!(GenerationTarget::Total(5).chars_to_add(2), 3);
		assert_eq!(GenerationTarget::Total(5).chars_to_add(5), 0);
		assert_eq!(GenerationTarget::Total(5).chars_to_add(9), 0);
	}
}
