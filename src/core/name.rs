/// Name composition: one- and two-word display names with particles.

use rand::rngs::StdRng;
use rand::Rng;

use super::morpheme::MorphemeLexicon;
use super::word::WordLexicon;
use super::{GenerationError, Stage};
use crate::schema::profile::LanguageProfile;

/// Semantic key of the genitive ("of") particle.
pub const GENITIVE_KEY: &str = "of";
/// Semantic key of the definite ("the") particle.
pub const DEFINITE_KEY: &str = "the";

const SINGLE_WORD_PROBABILITY: f64 = 0.5;
const KEYED_PART_PROBABILITY: f64 = 0.6;
const PLAIN_PAIR_PROBABILITY: f64 = 0.5;
const DEFINITE_PROBABILITY: f64 = 0.1;

/// The two grammatical particles used when joining names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Particles {
    pub genitive: String,
    pub definite: String,
}

impl Particles {
    /// Mint the particle morphemes, genitive first.
    ///
    /// A particle already stored under its key is taken as-is, so a retry
    /// after a failed first attempt reuses whatever that attempt kept.
    pub fn mint(
        morphemes: &mut MorphemeLexicon,
        profile: &LanguageProfile,
        rng: &mut StdRng,
    ) -> Result<Particles, GenerationError> {
        let genitive = particle(morphemes, profile, rng, GENITIVE_KEY)?;
        let definite = particle(morphemes, profile, rng, DEFINITE_KEY)?;
        Ok(Particles { genitive, definite })
    }
}

fn particle(
    morphemes: &mut MorphemeLexicon,
    profile: &LanguageProfile,
    rng: &mut StdRng,
    key: &str,
) -> Result<String, GenerationError> {
    match morphemes.get(key).first() {
        Some(stored) => Ok(stored.clone()),
        None => morphemes.get_or_mint(profile, rng, key),
    }
}

/// Every name produced so far, in order.
///
/// No entry is a substring of another.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: Vec<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// An existing name that contains, or is contained in, `candidate`.
    pub fn collides(&self, candidate: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| name.contains(candidate) || candidate.contains(name.as_str()))
            .map(String::as_str)
    }

    fn record(&mut self, name: String) {
        self.names.push(name);
    }
}

/// Borrowed view of a session's state, used for one name request.
pub struct NameComposer<'a> {
    pub profile: &'a LanguageProfile,
    pub morphemes: &'a mut MorphemeLexicon,
    pub words: &'a mut WordLexicon,
    pub registry: &'a mut NameRegistry,
    pub particles: &'a Particles,
    pub rng: &'a mut StdRng,
}

impl NameComposer<'_> {
    /// Compose a name for `key` and record it in the registry.
    ///
    /// Candidates are either a single word or a pair of words, optionally
    /// linked by the genitive particle, and occasionally prefixed with the
    /// definite particle. A candidate is rejected when it pairs a word
    /// with itself, falls outside the length bounds, or overlaps an
    /// earlier name as a substring.
    pub fn make_name(&mut self, key: &str) -> Result<String, GenerationError> {
        let attempts = self.profile.limits().name;
        let bounds = self.profile.min_name_length()..=self.profile.max_name_length();

        for _ in 0..attempts {
            let name = match self.candidate(key)? {
                Some(name) => name,
                None => continue,
            };

            let length = name.chars().count();
            if !bounds.contains(&length) {
                log::trace!("name '{}' rejected: length {} outside {:?}", name, length, bounds);
                continue;
            }

            if let Some(existing) = self.registry.collides(&name) {
                log::trace!("name '{}' rejected: overlaps '{}'", name, existing);
                continue;
            }

            log::debug!("accepted name '{}' for key '{}'", name, key);
            self.registry.record(name.clone());
            return Ok(name);
        }

        log::warn!(
            "gave up composing a name for key '{}' after {} attempts",
            key,
            attempts
        );
        Err(GenerationError::Exhausted {
            stage: Stage::Name,
            attempts,
        })
    }

    /// One raw candidate, or `None` when both halves drew the same word.
    fn candidate(&mut self, key: &str) -> Result<Option<String>, GenerationError> {
        let profile = self.profile;
        let joiner = profile.joiner();

        let mut name = if self.rng.gen_bool(SINGLE_WORD_PROBABILITY) {
            title_case(&self.word(key)?)
        } else {
            let first = self.name_part(key)?;
            let second = self.name_part(key)?;
            if first == second {
                log::trace!("name rejected: '{}' paired with itself", first);
                return Ok(None);
            }

            if self.rng.gen_bool(PLAIN_PAIR_PROBABILITY) {
                [first.as_str(), second.as_str()].join(joiner)
            } else {
                [
                    first.as_str(),
                    self.particles.genitive.as_str(),
                    second.as_str(),
                ]
                .join(joiner)
            }
        };

        if self.rng.gen_bool(DEFINITE_PROBABILITY) {
            name = [self.particles.definite.as_str(), name.as_str()].join(joiner);
        }

        Ok(Some(name))
    }

    /// A title-cased word drawn from `key` most of the time, else generic.
    fn name_part(&mut self, key: &str) -> Result<String, GenerationError> {
        let part_key = if self.rng.gen_bool(KEYED_PART_PROBABILITY) {
            key
        } else {
            ""
        };
        Ok(title_case(&self.word(part_key)?))
    }

    fn word(&mut self, key: &str) -> Result<String, GenerationError> {
        self.words
            .get_word(&mut *self.morphemes, self.profile, &mut *self.rng, key)
    }
}

/// Uppercase every letter that does not follow another letter and
/// lowercase the rest, so `ka‘u` becomes `Ka‘U`.
pub fn title_case(word: &str) -> String {
    let mut titled = String::with_capacity(word.len());
    let mut after_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if after_letter {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            titled.push(c);
            after_letter = false;
        }
    }
    titled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use rand::SeedableRng;

    struct Session {
        profile: LanguageProfile,
        morphemes: MorphemeLexicon,
        words: WordLexicon,
        registry: NameRegistry,
        particles: Particles,
        rng: StdRng,
    }

    impl Session {
        fn new(profile: LanguageProfile, seed: u64) -> Self {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut morphemes = MorphemeLexicon::new();
            let particles = Particles::mint(&mut morphemes, &profile, &mut rng).unwrap();
            Self {
                profile,
                morphemes,
                words: WordLexicon::new(),
                registry: NameRegistry::new(),
                particles,
                rng,
            }
        }

        fn name(&mut self, key: &str) -> Result<String, GenerationError> {
            NameComposer {
                profile: &self.profile,
                morphemes: &mut self.morphemes,
                words: &mut self.words,
                registry: &mut self.registry,
                particles: &self.particles,
                rng: &mut self.rng,
            }
            .make_name(key)
        }
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("patek"), "Patek");
        assert_eq!(title_case("šimon"), "Šimon");
        assert_eq!(title_case("ka‘u"), "Ka‘U");
        assert_eq!(title_case("áKO"), "Áko");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn registry_detects_substrings_both_ways() {
        let mut registry = NameRegistry::new();
        registry.record("Tamun Kel".to_string());
        assert_eq!(registry.collides("Kel"), Some("Tamun Kel"));
        assert_eq!(registry.collides("Sa Tamun Kel"), Some("Tamun Kel"));
        assert_eq!(registry.collides("Tamun Kelo"), Some("Tamun Kel"));
        assert_eq!(registry.collides("Pimas"), None);
    }

    #[test]
    fn names_respect_length_bounds_and_never_overlap() {
        let profile = LanguageProfile::from_def(&presets::basic()).unwrap();
        let mut session = Session::new(profile, 42);

        for _ in 0..30 {
            session.name("").unwrap();
        }

        let names: Vec<&str> = session.registry.iter().collect();
        assert_eq!(names.len(), 30);
        for (i, a) in names.iter().enumerate() {
            let len = a.chars().count();
            assert!((5..=12).contains(&len), "bad length: {}", a);
            for b in &names[i + 1..] {
                assert!(!a.contains(b) && !b.contains(a), "{} overlaps {}", a, b);
            }
        }
    }

    #[test]
    fn multi_word_names_use_the_joiner() {
        let mut def = presets::basic();
        def.joiner = "-".to_string();
        let profile = LanguageProfile::from_def(&def).unwrap();
        let mut session = Session::new(profile, 3);

        // basic words are three letters, below the five-character minimum,
        // so every accepted name is a joined construction
        for _ in 0..10 {
            let name = session.name("").unwrap();
            assert!(name.contains('-'), "expected joined name, got {}", name);
            assert!(!name.contains(' '));
        }
    }

    fn pooled_hyphen_profile() -> LanguageProfile {
        let mut def = presets::basic();
        def.joiner = "-".to_string();
        def.no_morpheme_pool = false;
        LanguageProfile::from_def(&def).unwrap()
    }

    #[test]
    fn names_take_every_shape() {
        let mut session = Session::new(pooled_hyphen_profile(), 4);
        let genitive = session.particles.genitive.clone();
        let definite = session.particles.definite.clone();
        assert_ne!(genitive, definite);

        let mut genitive_forms = 0;
        let mut definite_forms = 0;
        for _ in 0..200 {
            let name = session.name("").unwrap();
            let mut parts: Vec<&str> = name.split('-').collect();

            if parts.len() > 1 && parts[0] == definite {
                definite_forms += 1;
                parts.remove(0);
            }

            let words: Vec<&str> = match parts.as_slice() {
                [first, particle, second] if *particle == genitive => {
                    genitive_forms += 1;
                    vec![*first, *second]
                }
                other => other.to_vec(),
            };

            // Particles never take a capital; words always do
            for word in &words {
                assert!(word.starts_with(char::is_uppercase), "{}", name);
            }
            if let [first, second] = words.as_slice() {
                assert_ne!(first, second, "word paired with itself in {}", name);
            }
        }

        assert!(genitive_forms > 0, "no '<word> {} <word>' names", genitive);
        assert!(definite_forms > 0, "no names prefixed with '{}'", definite);
    }

    #[test]
    fn keyed_names_draw_on_keyed_morphemes() {
        let mut session = Session::new(pooled_hyphen_profile(), 9);

        for _ in 0..20 {
            session.name("").unwrap();
        }
        assert!(session.morphemes.get("city").is_empty());

        for _ in 0..20 {
            session.name("city").unwrap();
        }
        assert!(!session.morphemes.get("city").is_empty());
    }

    #[test]
    fn stored_particles_are_reused() {
        let profile = pooled_hyphen_profile();
        let mut morphemes = MorphemeLexicon::new();
        let mut rng = StdRng::seed_from_u64(12);
        let genitive = morphemes
            .get_or_mint(&profile, &mut rng, GENITIVE_KEY)
            .unwrap();

        for _ in 0..20 {
            let particles = Particles::mint(&mut morphemes, &profile, &mut rng).unwrap();
            assert_eq!(particles.genitive, genitive);
        }
        assert_eq!(morphemes.get(GENITIVE_KEY).len(), 1);
        assert_eq!(morphemes.get(DEFINITE_KEY).len(), 1);
    }

    #[test]
    fn unreachable_length_exhausts() {
        let mut def = presets::basic();
        def.min_name_length = 40;
        def.max_name_length = 50;
        def.limits.name = 100;
        let profile = LanguageProfile::from_def(&def).unwrap();
        let mut session = Session::new(profile, 1);

        assert!(matches!(
            session.name(""),
            Err(GenerationError::Exhausted {
                stage: Stage::Name,
                attempts: 100
            })
        ));
        assert!(session.registry.is_empty());
    }
}
