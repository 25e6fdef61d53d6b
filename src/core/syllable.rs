/// Syllable synthesis from a template, with phonotactic restrictions.

use fancy_regex::Regex;
use rand::rngs::StdRng;
use rand::Rng;

use super::choice::choose;
use super::{GenerationError, Stage};
use crate::schema::profile::LanguageProfile;

/// Builds phonemic syllables for a profile.
pub struct SyllableBuilder;

impl SyllableBuilder {
    /// Build one phonemic syllable (not yet spelled).
    ///
    /// Walks the template slot by slot, skipping each optional slot on a
    /// coin flip and otherwise drawing from the slot's phoneme class. A
    /// candidate matching any restriction pattern anywhere is thrown away
    /// and the walk starts over, up to the profile's syllable retry limit.
    pub fn build(profile: &LanguageProfile, rng: &mut StdRng) -> Result<String, GenerationError> {
        let attempts = profile.limits().syllable;

        for _ in 0..attempts {
            let candidate = Self::walk_template(profile, rng)?;
            match Self::restricted_by(profile, &candidate)? {
                Some(pattern) => {
                    log::trace!(
                        "syllable '{}' rejected by restriction /{}/",
                        candidate,
                        pattern.as_str()
                    );
                }
                None => return Ok(candidate),
            }
        }

        log::warn!(
            "gave up building a syllable for template {} after {} attempts",
            profile.structure(),
            attempts
        );
        Err(GenerationError::Exhausted {
            stage: Stage::Syllable,
            attempts,
        })
    }

    fn walk_template(profile: &LanguageProfile, rng: &mut StdRng) -> Result<String, GenerationError> {
        let mut syllable = String::new();
        for slot in &profile.structure().slots {
            if slot.optional && rng.gen_bool(0.5) {
                continue;
            }
            let phoneme = choose(rng, profile.class(slot.class), profile.exponent())?;
            syllable.push(*phoneme);
        }
        Ok(syllable)
    }

    /// First restriction matching the candidate, checking every pattern.
    fn restricted_by<'p>(
        profile: &'p LanguageProfile,
        candidate: &str,
    ) -> Result<Option<&'p Regex>, GenerationError> {
        for pattern in profile.restrictions() {
            if pattern.is_match(candidate)? {
                return Ok(Some(pattern));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;
    use crate::schema::profile::LanguageDef;
    use rand::SeedableRng;

    fn profile_with(structure: &str, phonemes: &[(char, &str)], restricts: &[&str]) -> LanguageProfile {
        let mut def: LanguageDef = presets::basic();
        def.structure = structure.to_string();
        def.phonemes = phonemes.iter().map(|(c, s)| (*c, s.to_string())).collect();
        def.restricts = restricts.iter().map(|s| s.to_string()).collect();
        def.limits.syllable = 200;
        LanguageProfile::from_def(&def).unwrap()
    }

    #[test]
    fn follows_template_shape() {
        let profile = profile_with("CV", &[('C', "ptk"), ('V', "ae")], &[]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let syllable: Vec<char> = SyllableBuilder::build(&profile, &mut rng)
                .unwrap()
                .chars()
                .collect();
            assert_eq!(syllable.len(), 2);
            assert!("ptk".contains(syllable[0]));
            assert!("ae".contains(syllable[1]));
        }
    }

    #[test]
    fn optional_slots_are_sometimes_skipped() {
        let profile = profile_with("S?CV", &[('S', "s"), ('C', "ptk"), ('V', "a")], &[]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut with_onset = 0;
        let mut without_onset = 0;
        for _ in 0..500 {
            let syllable = SyllableBuilder::build(&profile, &mut rng).unwrap();
            match syllable.chars().count() {
                3 => {
                    assert!(syllable.starts_with('s'));
                    with_onset += 1;
                }
                2 => without_onset += 1,
                n => panic!("unexpected syllable length {}: {}", n, syllable),
            }
        }
        assert!(with_onset > 150 && without_onset > 150);
    }

    #[test]
    fn double_restriction_never_yields_adjacent_repeats() {
        let profile = profile_with("CCVV", &[('C', "pt"), ('V', "ae")], &[r"(.)\1"]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let syllable: Vec<char> = SyllableBuilder::build(&profile, &mut rng)
                .unwrap()
                .chars()
                .collect();
            assert!(
                syllable.windows(2).all(|pair| pair[0] != pair[1]),
                "adjacent repeat in {:?}",
                syllable
            );
        }
    }

    #[test]
    fn every_restriction_is_enforced() {
        // The second pattern must be honoured, not just the first.
        let profile = profile_with("CV", &[('C', "pt"), ('V', "a")], &["x", "p"]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            assert_eq!(SyllableBuilder::build(&profile, &mut rng).unwrap(), "ta");
        }
    }

    #[test]
    fn no_restrictions_accepts_first_candidate() {
        let profile = profile_with("V", &[('V', "a")], &[]);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(SyllableBuilder::build(&profile, &mut rng).unwrap(), "a");
    }

    #[test]
    fn impossible_profile_exhausts() {
        let profile = profile_with("VV", &[('V', "a")], &[r"(.)\1"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            SyllableBuilder::build(&profile, &mut rng),
            Err(GenerationError::Exhausted {
                stage: Stage::Syllable,
                attempts: 200
            })
        ));
    }
}
