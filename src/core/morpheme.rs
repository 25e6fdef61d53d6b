/// Morpheme lexicon: per-key cache of reusable syllables.

use rand::rngs::StdRng;

use super::pool::KeyedPool;
use super::syllable::SyllableBuilder;
use super::{GenerationError, Stage};
use crate::schema::profile::LanguageProfile;

/// Extra draw slots for the generic key; generic filler should stay varied.
const GENERIC_EXTRA_SLOTS: usize = 10;
/// Extra draw slots for a semantic key; tagged morphemes settle quickly.
const KEYED_EXTRA_SLOTS: usize = 1;

/// Spelled morphemes minted so far, grouped by semantic key.
#[derive(Debug, Clone, Default)]
pub struct MorphemeLexicon {
    pool: KeyedPool,
}

impl MorphemeLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a morpheme for `key` (`""` is the generic key).
    ///
    /// The more morphemes a key already has, the likelier one of them is
    /// reused. With morpheme pooling disabled, every call spells a fresh
    /// syllable and nothing is cached.
    pub fn get_or_mint(
        &mut self,
        profile: &LanguageProfile,
        rng: &mut StdRng,
        key: &str,
    ) -> Result<String, GenerationError> {
        if profile.no_morpheme_pool() {
            return mint(profile, rng);
        }

        let extra_slots = if key.is_empty() {
            GENERIC_EXTRA_SLOTS
        } else {
            KEYED_EXTRA_SLOTS
        };

        self.pool.reuse_or_mint(
            rng,
            key,
            extra_slots,
            profile.limits().morpheme,
            Stage::Morpheme,
            |rng| mint(profile, rng),
        )
    }

    pub fn get(&self, key: &str) -> &[String] {
        self.pool.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pool.keys()
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn contains(&self, morpheme: &str) -> bool {
        self.pool.contains(morpheme)
    }

    pub fn key_of(&self, morpheme: &str) -> Option<&str> {
        self.pool.key_of(morpheme)
    }
}

fn mint(profile: &LanguageProfile, rng: &mut StdRng) -> Result<String, GenerationError> {
    let syllable = SyllableBuilder::build(profile, rng)?;
    Ok(profile.orthography().render(&syllable))
}
