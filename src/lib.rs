//! Conlang Engine: procedural words and names for constructed languages.
//!
//! Builds pronounceable, internally consistent vocabulary from a compact
//! language profile: phoneme inventories, a syllable shape grammar,
//! phonotactic restrictions, and orthography tables. Generated morphemes
//! and words are cached per semantic key, so the same key keeps yielding
//! related tokens for the lifetime of a session.

pub mod core;
pub mod presets;
pub mod schema;
