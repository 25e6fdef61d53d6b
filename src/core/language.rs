/// The language session: one profile plus the lexicons it has grown.
///
/// Wires together syllable synthesis, spelling, the morpheme and word
/// lexicons, and name composition behind a single seeded random source.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use thiserror::Error;

use crate::core::morpheme::MorphemeLexicon;
use crate::core::name::{NameComposer, NameRegistry, Particles};
use crate::core::syllable::SyllableBuilder;
use crate::core::word::WordLexicon;
use crate::core::GenerationError;
use crate::presets;
use crate::schema::profile::{LanguageDef, LanguageProfile, ProfileError};

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// A generation session for one language. Built via `Language::builder()`.
///
/// All caches live here and only grow: the same semantic key keeps
/// drawing on the same morphemes and words, and no name ever overlaps an
/// earlier one. Not meant to be shared across threads without external
/// synchronization.
#[derive(Debug)]
pub struct Language {
    profile: LanguageProfile,
    morphemes: MorphemeLexicon,
    words: WordLexicon,
    names: NameRegistry,
    particles: Option<Particles>,
    rng: StdRng,
    seed: Option<u64>,
}

/// Builder for constructing a `Language`.
pub struct LanguageBuilder {
    seed: Option<u64>,
    profile_path: Option<String>,
    /// Directly provided definition (validated on build).
    def: Option<LanguageDef>,
    /// Directly provided, already validated profile.
    profile: Option<LanguageProfile>,
}

impl Language {
    pub fn builder() -> LanguageBuilder {
        LanguageBuilder {
            seed: None,
            profile_path: None,
            def: None,
            profile: None,
        }
    }

    /// A phonemic syllable, before spelling. Does not touch the lexicons.
    pub fn syllable(&mut self) -> Result<String, LanguageError> {
        Ok(SyllableBuilder::build(&self.profile, &mut self.rng)?)
    }

    /// A freshly built syllable rendered through the orthography.
    pub fn spelled_syllable(&mut self) -> Result<String, LanguageError> {
        let syllable = self.syllable()?;
        Ok(self.profile.orthography().render(&syllable))
    }

    /// A morpheme for a semantic key (`""` for generic).
    pub fn morpheme(&mut self, key: &str) -> Result<String, LanguageError> {
        Ok(self
            .morphemes
            .get_or_mint(&self.profile, &mut self.rng, key)?)
    }

    /// A word for a semantic key (`""` for generic).
    pub fn word(&mut self, key: &str) -> Result<String, LanguageError> {
        Ok(self
            .words
            .get_word(&mut self.morphemes, &self.profile, &mut self.rng, key)?)
    }

    /// A display name for a semantic key (`""` for generic).
    ///
    /// The first call also mints the genitive and definite particles.
    pub fn name(&mut self, key: &str) -> Result<String, LanguageError> {
        let particles = match &mut self.particles {
            Some(particles) => particles,
            slot @ None => {
                let minted = Particles::mint(&mut self.morphemes, &self.profile, &mut self.rng)?;
                log::debug!(
                    "particles minted: genitive '{}', definite '{}'",
                    minted.genitive,
                    minted.definite
                );
                slot.insert(minted)
            }
        };

        let mut composer = NameComposer {
            profile: &self.profile,
            morphemes: &mut self.morphemes,
            words: &mut self.words,
            registry: &mut self.names,
            particles,
            rng: &mut self.rng,
        };
        Ok(composer.make_name(key)?)
    }

    /// Generate `count` words for a key.
    pub fn words_for(&mut self, key: &str, count: usize) -> Result<Vec<String>, LanguageError> {
        (0..count).map(|_| self.word(key)).collect()
    }

    /// Generate `count` names for a key.
    pub fn names_for(&mut self, key: &str, count: usize) -> Result<Vec<String>, LanguageError> {
        (0..count).map(|_| self.name(key)).collect()
    }

    /// The genitive particle, once the first name has been made.
    pub fn genitive(&self) -> Option<&str> {
        self.particles.as_ref().map(|p| p.genitive.as_str())
    }

    /// The definite particle, once the first name has been made.
    pub fn definite(&self) -> Option<&str> {
        self.particles.as_ref().map(|p| p.definite.as_str())
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    pub fn morphemes(&self) -> &MorphemeLexicon {
        &self.morphemes
    }

    pub fn words(&self) -> &WordLexicon {
        &self.words
    }

    pub fn names(&self) -> &NameRegistry {
        &self.names
    }

    /// The seed this session was built with, if one was given.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl LanguageBuilder {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load the definition from a RON file on build.
    pub fn profile_path(mut self, path: &str) -> Self {
        self.profile_path = Some(path.to_string());
        self
    }

    /// Provide a definition directly (for testing without files).
    pub fn with_def(mut self, def: LanguageDef) -> Self {
        self.def = Some(def);
        self
    }

    /// Provide an already validated profile.
    pub fn with_profile(mut self, profile: LanguageProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Resolve the profile and seed the session.
    ///
    /// Precedence: a validated profile, then a definition, then a profile
    /// file, falling back to the minimal basic preset.
    pub fn build(self) -> Result<Language, LanguageError> {
        let profile = match (self.profile, self.def, self.profile_path) {
            (Some(profile), _, _) => profile,
            (None, Some(def), _) => LanguageProfile::from_def(&def)?,
            (None, None, Some(path)) => LanguageProfile::load_from_ron(Path::new(&path))?,
            (None, None, None) => LanguageProfile::from_def(&presets::basic())?,
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        log::debug!(
            "language built: template {}, {} restriction(s), seed {:?}",
            profile.structure(),
            profile.restrictions().len(),
            self.seed
        );

        Ok(Language {
            profile,
            morphemes: MorphemeLexicon::new(),
            words: WordLexicon::new(),
            names: NameRegistry::new(),
            particles: None,
            rng,
            seed: self.seed,
        })
    }
}
