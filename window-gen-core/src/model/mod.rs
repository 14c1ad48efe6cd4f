//! Sliding-window language model.
//!
//! This module contains:
//! - Per-successor statistics (`CharacterStat`)
//! - The ordered successor list of one window (`Successors`)
//! - The window -> successors table built from a corpus (`FrequencyTable`)
//! - The generation length convention (`GenerationTarget`)
//! - The high-level model and generator (`LanguageModel`)

/// One successor character with its count and probabilities.
pub mod character_stat;

/// Insertion-ordered successor list of a single window.
///
/// Accumulates counts during training and supports weighted sampling
/// over cumulative probabilities.
pub mod successors;

/// Mapping from every window of a corpus to its successors.
///
/// Handles corpus ingestion, normalization and debug rendering.
pub mod frequency_table;

/// Target length of a generation, with or without the seed.
pub mod generation_target;

/// Model construction, training entry points and text generation.
pub mod language_model;
