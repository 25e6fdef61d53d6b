pub mod choice;
pub mod language;
pub mod morpheme;
pub mod name;
pub mod orthography;
pub mod pool;
pub mod syllable;
pub mod word;

use std::fmt;
use thiserror::Error;

/// The generation step whose accept/reject loop ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Syllable,
    Morpheme,
    Word,
    Name,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Syllable => "syllable",
            Stage::Morpheme => "morpheme",
            Stage::Word => "word",
            Stage::Name => "name",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("cannot choose from an empty sequence")]
    EmptyChoice,
    #[error("no acceptable {stage} found after {attempts} attempts")]
    Exhausted { stage: Stage, attempts: u32 },
    #[error("restriction pattern failed to run: {0}")]
    Restriction(#[from] fancy_regex::Error),
}
