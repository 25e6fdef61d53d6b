/// Word lexicon: multi-syllable words composed from cached morphemes.

use rand::rngs::StdRng;
use rand::Rng;

use super::morpheme::MorphemeLexicon;
use super::pool::KeyedPool;
use super::{GenerationError, Stage};
use crate::schema::profile::LanguageProfile;

const GENERIC_EXTRA_SLOTS: usize = 3;
const KEYED_EXTRA_SLOTS: usize = 2;

/// Words minted so far, grouped by semantic key.
#[derive(Debug, Clone, Default)]
pub struct WordLexicon {
    pool: KeyedPool,
}

impl WordLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a word for `key` (`""` is the generic key), reusing cached
    /// words the same way the morpheme lexicon does. With word pooling
    /// disabled, every call composes a fresh word.
    pub fn get_word(
        &mut self,
        morphemes: &mut MorphemeLexicon,
        profile: &LanguageProfile,
        rng: &mut StdRng,
        key: &str,
    ) -> Result<String, GenerationError> {
        if profile.no_word_pool() {
            return make_word(morphemes, profile, rng, key);
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
            profile.limits().word,
            Stage::Word,
            |rng| make_word(morphemes, profile, rng, key),
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

    pub fn contains(&self, word: &str) -> bool {
        self.pool.contains(word)
    }

    pub fn key_of(&self, word: &str) -> Option<&str> {
        self.pool.key_of(word)
    }
}

/// Compose a fresh word of random length.
///
/// Exactly one syllable position carries `key`; the rest draw generic
/// morphemes. Morphemes are already spelled, so the result is too.
pub fn make_word(
    morphemes: &mut MorphemeLexicon,
    profile: &LanguageProfile,
    rng: &mut StdRng,
    key: &str,
) -> Result<String, GenerationError> {
    let syllables = rng.gen_range(profile.min_syllables()..=profile.max_syllables());
    let keyed_position = rng.gen_range(0..syllables);

    let mut word = String::new();
    for position in 0..syllables {
        let slot_key = if position == keyed_position { key } else { "" };
        word.push_str(&morphemes.get_or_mint(profile, rng, slot_key)?);
    }
    Ok(word)
}
