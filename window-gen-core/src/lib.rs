//! Character-level sliding-window text generation library.
//!
//! This crate provides a small n-gram language model:
//! - A frequency table mapping each fixed-length window of a corpus to the
//!   characters that followed it, with counts and cumulative probabilities
//! - Weighted random sampling over a window's successors
//! - A generator extending a seed text one character at a time
//!
//! Corpus loading helpers are kept internal; callers go through
//! [`model::language_model::LanguageModel`].

/// Frequency table, successor statistics and the text generator.
pub mod model;

/// Error type shared by the model constructors and training entry points.
pub mod error;

/// Corpus reading helpers.
///
/// Not exposed
pub(crate) mod io;
