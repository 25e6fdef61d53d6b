/// Language profiles: the serializable definition and its validated runtime form.

use fancy_regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::core::orthography::Orthography;
use crate::schema::template::{SyllableTemplate, TemplateError};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialization error: {0}")]
    RonWrite(#[from] ron::Error),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("template references unknown phoneme class '{0}'")]
    UnknownClass(char),
    #[error("phoneme class '{0}' has no phonemes")]
    EmptyClass(char),
    #[error("selection exponent must be finite and >= 1, got {0}")]
    InvalidExponent(f64),
    #[error("invalid syllable range {min}..={max} (need 1 <= min <= max)")]
    SyllableRange { min: usize, max: usize },
    #[error("invalid name length range {min}..={max}")]
    NameLengthRange { min: usize, max: usize },
    #[error("restriction pattern '{pattern}' does not compile: {source}")]
    Pattern {
        pattern: String,
        source: fancy_regex::Error,
    },
    #[error("retry limit for {0} must be at least 1")]
    ZeroRetryLimit(&'static str),
}

/// Attempt caps for every accept/reject loop in the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryLimits {
    pub syllable: u32,
    pub morpheme: u32,
    pub word: u32,
    pub name: u32,
}

impl Default for RetryLimits {
    fn default() -> Self {
        Self {
            syllable: 1_000,
            morpheme: 1_000,
            word: 1_000,
            name: 10_000,
        }
    }
}

impl RetryLimits {
    fn validate(&self) -> Result<(), ProfileError> {
        let limits = [
            ("syllables", self.syllable),
            ("morphemes", self.morpheme),
            ("words", self.word),
            ("names", self.name),
        ];
        for (stage, limit) in limits {
            if limit == 0 {
                return Err(ProfileError::ZeroRetryLimit(stage));
            }
        }
        Ok(())
    }
}

fn default_exponent() -> f64 {
    1.0
}

fn default_syllables() -> usize {
    1
}

fn default_joiner() -> String {
    " ".to_string()
}

fn default_min_name_length() -> usize {
    5
}

fn default_max_name_length() -> usize {
    12
}

/// A language definition as written in RON profile files.
///
/// Phoneme classes map a single-character tag to a string whose characters
/// are the phonemes of that class, most common first:
///
/// ```ron
/// Language(
///     phonemes: {'C': "ptkmnls", 'V': "aeiou"},
///     structure: "CVC?",
///     exponent: 2.0,
///     restricts: ["(.)\\1"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Language")]
pub struct LanguageDef {
    pub phonemes: BTreeMap<char, String>,
    pub structure: String,
    #[serde(default = "default_exponent")]
    pub exponent: f64,
    #[serde(default)]
    pub restricts: Vec<String>,
    #[serde(default)]
    pub consonant_orthography: BTreeMap<char, String>,
    #[serde(default)]
    pub vowel_orthography: BTreeMap<char, String>,
    #[serde(default)]
    pub no_orthography: bool,
    #[serde(default)]
    pub no_morpheme_pool: bool,
    #[serde(default)]
    pub no_word_pool: bool,
    #[serde(default = "default_syllables")]
    pub min_syllables: usize,
    #[serde(default = "default_syllables")]
    pub max_syllables: usize,
    #[serde(default = "default_joiner")]
    pub joiner: String,
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default)]
    pub limits: RetryLimits,
}

impl LanguageDef {
    /// Load a language definition from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<LanguageDef, ProfileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a language definition from a RON string.
    pub fn parse_ron(input: &str) -> Result<LanguageDef, ProfileError> {
        Ok(ron::from_str(input)?)
    }

    pub fn to_ron_string(&self) -> Result<String, ProfileError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    /// Save this definition to a RON file.
    pub fn save_ron(&self, path: &Path) -> Result<(), ProfileError> {
        std::fs::write(path, self.to_ron_string()?)?;
        Ok(())
    }
}

/// A validated, immutable language configuration.
///
/// Built once from a [`LanguageDef`]; every misconfiguration the generator
/// could trip over (unknown or empty classes, inverted ranges, broken
/// patterns) is rejected here instead of surfacing mid-generation. Fields
/// are read-only so a validated profile stays valid:
///
/// ```compile_fail
/// use conlang_engine::presets;
/// use conlang_engine::schema::profile::LanguageProfile;
///
/// let mut profile = LanguageProfile::from_def(&presets::basic()).unwrap();
/// profile.min_syllables = 3;
/// ```
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    phonemes: FxHashMap<char, Vec<char>>,
    structure: SyllableTemplate,
    exponent: f64,
    restrictions: Vec<Regex>,
    orthography: Orthography,
    no_morpheme_pool: bool,
    no_word_pool: bool,
    min_syllables: usize,
    max_syllables: usize,
    joiner: String,
    min_name_length: usize,
    max_name_length: usize,
    limits: RetryLimits,
    def: LanguageDef,
}

impl LanguageProfile {
    pub fn from_def(def: &LanguageDef) -> Result<LanguageProfile, ProfileError> {
        let structure = SyllableTemplate::parse(&def.structure)?;

        let phonemes: FxHashMap<char, Vec<char>> = def
            .phonemes
            .iter()
            .map(|(tag, set)| (*tag, set.chars().collect()))
            .collect();

        for class in structure.classes() {
            match phonemes.get(&class) {
                None => return Err(ProfileError::UnknownClass(class)),
                Some(set) if set.is_empty() => return Err(ProfileError::EmptyClass(class)),
                Some(_) => {}
            }
        }

        if !def.exponent.is_finite() || def.exponent < 1.0 {
            return Err(ProfileError::InvalidExponent(def.exponent));
        }

        if def.min_syllables == 0 || def.min_syllables > def.max_syllables {
            return Err(ProfileError::SyllableRange {
                min: def.min_syllables,
                max: def.max_syllables,
            });
        }

        if def.min_name_length > def.max_name_length {
            return Err(ProfileError::NameLengthRange {
                min: def.min_name_length,
                max: def.max_name_length,
            });
        }

        def.limits.validate()?;

        let restrictions = def
            .restricts
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ProfileError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let orthography = if def.no_orthography {
            Orthography::disabled()
        } else {
            Orthography::new(
                def.consonant_orthography
                    .iter()
                    .map(|(c, s)| (*c, s.clone())),
                def.vowel_orthography.iter().map(|(c, s)| (*c, s.clone())),
            )
        };

        Ok(LanguageProfile {
            phonemes,
            structure,
            exponent: def.exponent,
            restrictions,
            orthography,
            no_morpheme_pool: def.no_morpheme_pool,
            no_word_pool: def.no_word_pool,
            min_syllables: def.min_syllables,
            max_syllables: def.max_syllables,
            joiner: def.joiner.clone(),
            min_name_length: def.min_name_length,
            max_name_length: def.max_name_length,
            limits: def.limits,
            def: def.clone(),
        })
    }

    /// Load and validate a profile from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<LanguageProfile, ProfileError> {
        Self::from_def(&LanguageDef::load_from_ron(path)?)
    }

    /// Phonemes of a class, or an empty slice for unknown tags.
    pub fn class(&self, tag: char) -> &[char] {
        self.phonemes.get(&tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn structure(&self) -> &SyllableTemplate {
        &self.structure
    }

    /// Selection exponent passed to `choose` for every phoneme draw.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn restrictions(&self) -> &[Regex] {
        &self.restrictions
    }

    pub fn orthography(&self) -> &Orthography {
        &self.orthography
    }

    pub fn no_morpheme_pool(&self) -> bool {
        self.no_morpheme_pool
    }

    pub fn no_word_pool(&self) -> bool {
        self.no_word_pool
    }

    pub fn min_syllables(&self) -> usize {
        self.min_syllables
    }

    pub fn max_syllables(&self) -> usize {
        self.max_syllables
    }

    pub fn joiner(&self) -> &str {
        &self.joiner
    }

    pub fn min_name_length(&self) -> usize {
        self.min_name_length
    }

    pub fn max_name_length(&self) -> usize {
        self.max_name_length
    }

    pub fn limits(&self) -> RetryLimits {
        self.limits
    }

    /// The definition this profile was validated from.
    pub fn def(&self) -> &LanguageDef {
        &self.def
    }
}
