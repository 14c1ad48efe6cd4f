use std::io;

/// Result type used across the crate.
pub type Result<T, E = ModelError> = std::result::Result<T, E>;

/// Errors raised while building or training a language model.
///
/// Degenerate inputs (a corpus or seed shorter than the window, a window
/// never seen during training) are not errors: they end training or
/// generation early instead.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
	/// The window length must be at least one character.
	#[error("window length must be > 0, got {0}")]
	InvalidWindowLength(usize),

	/// The corpus could not be opened, read, or decoded as UTF-8.
	#[error("failed to read corpus: {0}")]
	Io(#[from] io::Error),
}
