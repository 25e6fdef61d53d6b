/// Preset catalog: phoneme inventories, syllable shapes, restriction sets,
/// and orthographies to assemble languages from.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use crate::core::choice::choose;
use crate::core::GenerationError;
use crate::schema::profile::{LanguageDef, RetryLimits};

/// A named phoneme inventory, most common phoneme first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhonemeSet {
    pub name: &'static str,
    pub phonemes: &'static str,
}

/// A named set of restriction patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestrictionSet {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

/// A named spelling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrthographySet {
    pub name: &'static str,
    pub spellings: &'static [(char, &'static str)],
}

impl OrthographySet {
    pub fn to_map(&self) -> BTreeMap<char, String> {
        self.spellings
            .iter()
            .map(|(phoneme, spelled)| (*phoneme, spelled.to_string()))
            .collect()
    }
}

const fn set(name: &'static str, phonemes: &'static str) -> PhonemeSet {
    PhonemeSet { name, phonemes }
}

pub const CONSONANT_SETS: &[PhonemeSet] = &[
    set("Minimal", "ptkmnls"),
    set("English-ish", "ptkbdgmnlrsʃzʒʧ"),
    set("Pirahã (very simple)", "ptkmnh"),
    set("Hawaiian-ish", "hklmnpwʔ"),
    set("Greenlandic-ish", "ptkqvsgrmnŋlj"),
    set("Arabic-ish", "tksʃdbqɣxmnlrwj"),
    set("Arabic-lite", "tkdgmnsʃ"),
    set("English-lite", "ptkbdgmnszʒʧhjw"),
];

pub const SIBILANT_SETS: &[PhonemeSet] = &[
    set("Just s", "s"),
    set("s ʃ", "sʃ"),
    set("s ʃ f", "sʃf"),
];

pub const LIQUID_SETS: &[PhonemeSet] = &[
    set("r l", "rl"),
    set("Just r", "r"),
    set("Just l", "l"),
    set("w j", "wj"),
    set("r l w j", "rlwj"),
];

pub const FINAL_SETS: &[PhonemeSet] = &[
    set("m n", "mn"),
    set("s k", "sk"),
    set("m n ŋ", "mnŋ"),
    set("s ʃ z ʒ", "sʃzʒ"),
];

pub const VOWEL_SETS: &[PhonemeSet] = &[
    set("Standard 5-vowel", "aeiou"),
    set("3-vowel a i u", "aiu"),
    set("Extra A E I", "aeiouAEI"),
    set("Extra U", "aeiouU"),
    set("5-vowel a i u A I", "aiuAI"),
    set("3-vowel e o u", "eou"),
    set("Extra A O U", "aeiouAOU"),
];

pub const SYLLABLE_STRUCTURES: &[&str] = &[
    "CVC", "CVV?C", "CVVC?", "CVC?", "CV", "VC", "CVF", "C?VC", "CVF?", "CL?VC", "CL?VF",
    "S?CVC", "S?CVF", "S?CVC?", "C?VF", "C?VC?", "C?VF?", "C?L?VC", "VC", "CVL?C?", "C?VL?C",
    "C?VLC?",
];

pub const NO_RESTRICTIONS: RestrictionSet = RestrictionSet {
    name: "None",
    patterns: &[],
};

pub const DOUBLE_SOUNDS: RestrictionSet = RestrictionSet {
    name: "Double sounds",
    patterns: &[r"(.)\1"],
};

pub const DOUBLES_AND_HARD_CLUSTERS: RestrictionSet = RestrictionSet {
    name: "Doubles and hard clusters",
    patterns: &[r"[sʃf][sʃ]", r"(.)\1", r"[rl][rl]"],
};

pub const RESTRICTION_SETS: &[RestrictionSet] =
    &[NO_RESTRICTIONS, DOUBLE_SOUNDS, DOUBLES_AND_HARD_CLUSTERS];

pub const CONSONANT_ORTHOGRAPHIES: &[OrthographySet] = &[
    OrthographySet {
        name: "Default",
        spellings: &[],
    },
    OrthographySet {
        name: "Slavic",
        spellings: &[('ʃ', "š"), ('ʒ', "ž"), ('ʧ', "č"), ('ʤ', "ǧ"), ('j', "j")],
    },
    OrthographySet {
        name: "German",
        spellings: &[
            ('ʃ', "sch"),
            ('ʒ', "zh"),
            ('ʧ', "tsch"),
            ('ʤ', "dz"),
            ('j', "j"),
            ('x', "ch"),
        ],
    },
    OrthographySet {
        name: "French",
        spellings: &[('ʃ', "ch"), ('ʒ', "j"), ('ʧ', "tch"), ('ʤ', "dj"), ('x', "kh")],
    },
    OrthographySet {
        name: "Chinese (pinyin)",
        spellings: &[('ʃ', "x"), ('ʧ', "q"), ('ʤ', "j")],
    },
];

pub const VOWEL_ORTHOGRAPHIES: &[OrthographySet] = &[
    OrthographySet {
        name: "Ácutes",
        spellings: &[],
    },
    OrthographySet {
        name: "Ümlauts",
        spellings: &[('A', "ä"), ('E', "ë"), ('I', "ï"), ('O', "ö"), ('U', "ü")],
    },
    OrthographySet {
        name: "Welsh",
        spellings: &[('A', "â"), ('E', "ê"), ('I', "y"), ('O', "ô"), ('U', "w")],
    },
    OrthographySet {
        name: "Diphthongs",
        spellings: &[('A', "au"), ('E', "ei"), ('I', "ie"), ('O', "ou"), ('U', "oo")],
    },
    OrthographySet {
        name: "Doubles",
        spellings: &[('A', "aa"), ('E', "ee"), ('I', "ii"), ('O', "oo"), ('U', "uu")],
    },
];

/// Joiners for multi-word names; a space three times as often as a hyphen.
const JOINERS: &[char] = &[' ', ' ', ' ', '-'];

/// The minimal language: one CVC syllable per word, no spelling rules,
/// no pooling.
pub fn basic() -> LanguageDef {
    let phonemes = [
        ('C', "ptkmnls"),
        ('V', "aeiou"),
        ('S', "s"),
        ('F', "mn"),
        ('L', "rl"),
    ]
    .iter()
    .map(|(tag, set)| (*tag, set.to_string()))
    .collect();

    LanguageDef {
        phonemes,
        structure: "CVC".to_string(),
        exponent: 2.0,
        restricts: Vec::new(),
        consonant_orthography: BTreeMap::new(),
        vowel_orthography: BTreeMap::new(),
        no_orthography: true,
        no_morpheme_pool: true,
        no_word_pool: true,
        min_syllables: 1,
        max_syllables: 1,
        joiner: " ".to_string(),
        min_name_length: 5,
        max_name_length: 12,
        limits: RetryLimits::default(),
    }
}

/// [`basic`] with the default orthography switched on.
pub fn ortho() -> LanguageDef {
    LanguageDef {
        no_orthography: false,
        ..basic()
    }
}

/// Assemble a random language from the preset tables.
///
/// Inventories and orthographies favour the front of their tables; each
/// chosen inventory is shuffled so the most common phonemes differ from
/// language to language. Pooling and spelling are on, and the strictest
/// restriction set applies.
pub fn random(rng: &mut StdRng) -> Result<LanguageDef, GenerationError> {
    let mut def = basic();
    def.no_orthography = false;
    def.no_morpheme_pool = false;
    def.no_word_pool = false;

    let inventories = [
        ('C', CONSONANT_SETS),
        ('V', VOWEL_SETS),
        ('L', LIQUID_SETS),
        ('S', SIBILANT_SETS),
        ('F', FINAL_SETS),
    ];
    for (tag, sets) in inventories {
        let mut phonemes: Vec<char> = choose(rng, sets, 2.0)?.phonemes.chars().collect();
        phonemes.shuffle(rng);
        def.phonemes.insert(tag, phonemes.into_iter().collect());
    }

    def.structure = choose(rng, SYLLABLE_STRUCTURES, 1.0)?.to_string();
    def.restricts = DOUBLES_AND_HARD_CLUSTERS
        .patterns
        .iter()
        .map(|p| p.to_string())
        .collect();
    def.consonant_orthography = choose(rng, CONSONANT_ORTHOGRAPHIES, 2.0)?.to_map();
    def.vowel_orthography = choose(rng, VOWEL_ORTHOGRAPHIES, 2.0)?.to_map();

    // Short templates need an extra syllable to make words of any length
    let mut min_syllables = rng.gen_range(1..3);
    if def.structure.chars().count() < 3 {
        min_syllables += 1;
    }
    def.min_syllables = min_syllables;
    def.max_syllables = rng.gen_range(min_syllables + 1..7);
    def.joiner = choose(rng, JOINERS, 1.0)?.to_string();

    Ok(def)
}

/// Look up a preset definition by name: `basic`, `ortho`, or `random`.
pub fn by_name(name: &str, rng: &mut StdRng) -> Option<Result<LanguageDef, GenerationError>> {
    match name {
        "basic" => Some(Ok(basic())),
        "ortho" => Some(Ok(ortho())),
        "random" => Some(random(rng)),
        _ => None,
    }
}

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: &[&str] = &["basic", "ortho", "random"];
