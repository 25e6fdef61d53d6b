/// Syllable shape templates: parsing `"CVV?C"` style strings into slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Marker that makes the preceding slot optional.
const OPTIONAL_MARKER: char = '?';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("syllable template is empty")]
    Empty,
    #[error("optional marker at position {0} does not follow a phoneme class")]
    DanglingOptional(usize),
}

/// One position in a syllable template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Phoneme class tag, e.g. `C` or `V`.
    pub class: char,
    /// Skipped with probability 0.5 when set.
    pub optional: bool,
}

/// A parsed syllable template, an ordered sequence of slots.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyllableTemplate {
    pub slots: Vec<Slot>,
}

impl SyllableTemplate {
    /// Parse a template string.
    ///
    /// Every character is a phoneme class tag, except `?` which marks the
    /// tag right before it as optional: `"S?CVC"` is an optional sibilant
    /// followed by consonant, vowel, consonant.
    pub fn parse(input: &str) -> Result<SyllableTemplate, TemplateError> {
        let chars: Vec<char> = input.chars().collect();
        let len = chars.len();
        if len == 0 {
            return Err(TemplateError::Empty);
        }

        let mut slots = Vec::with_capacity(len);
        let mut i = 0;
        while i < len {
            let class = chars[i];
            if class == OPTIONAL_MARKER {
                return Err(TemplateError::DanglingOptional(i));
            }

            let optional = i + 1 < len && chars[i + 1] == OPTIONAL_MARKER;
            slots.push(Slot { class, optional });
            i += if optional { 2 } else { 1 };
        }

        Ok(SyllableTemplate { slots })
    }

    /// Phoneme class tags in template order (duplicates included).
    pub fn classes(&self) -> impl Iterator<Item = char> + '_ {
        self.slots.iter().map(|slot| slot.class)
    }

    /// Number of slots that are always filled.
    pub fn required_slots(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.optional).count()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Display for SyllableTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            write!(f, "{}", slot.class)?;
            if slot.optional {
                write!(f, "{}", OPTIONAL_MARKER)?;
            }
        }
        Ok(())
    }
}
