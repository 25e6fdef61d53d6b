/// Profile loading and validation integration tests.

use conlang_engine::presets;
use conlang_engine::schema::profile::{LanguageDef, LanguageProfile, ProfileError};
use std::path::Path;

#[test]
fn bundled_profiles_load() {
    let mut loaded = 0;
    for entry in std::fs::read_dir("profiles").unwrap() {
        let path = entry.unwrap().path();
        if path.extension().and_then(|s| s.to_str()) != Some("ron") {
            continue;
        }
        LanguageProfile::load_from_ron(&path)
            .unwrap_or_else(|e| panic!("{} failed to load: {}", path.display(), e));
        loaded += 1;
    }
    assert_eq!(loaded, 3);
}

#[test]
fn basic_profile_matches_basic_preset() {
    let def = LanguageDef::load_from_ron(Path::new("profiles/basic.ron")).unwrap();
    assert_eq!(def, presets::basic());
}

#[test]
fn slavic_profile_spells_its_sibilants() {
    let profile = LanguageProfile::load_from_ron(Path::new("profiles/slavic.ron")).unwrap();
    assert_eq!(profile.orthography().spelling('ʃ'), Some("š"));
    assert_eq!(profile.orthography().spelling('ʒ'), Some("ž"));
    // Falls through to the default table
    assert_eq!(profile.orthography().spelling('ŋ'), Some("ng"));
    assert_eq!(profile.restrictions().len(), 3);
    assert_eq!(profile.structure().to_string(), "S?CL?VC?");
}

#[test]
fn omitted_fields_take_defaults() {
    let def = LanguageDef::load_from_ron(Path::new("tests/fixtures/minimal.ron")).unwrap();
    assert_eq!(def.exponent, 1.0);
    assert_eq!(def.min_syllables, 1);
    assert_eq!(def.max_syllables, 1);
    assert_eq!(def.joiner, " ");
    assert_eq!(def.min_name_length, 5);
    assert_eq!(def.max_name_length, 12);
    assert!(def.restricts.is_empty());
}

#[test]
fn partial_retry_limits_keep_other_defaults() {
    let def = LanguageDef::parse_ron(
        r#"Language(
            phonemes: {'C': "p", 'V': "a"},
            structure: "CV",
            limits: (name: 20),
        )"#,
    )
    .unwrap();
    assert_eq!(def.limits.name, 20);
    assert_eq!(def.limits.syllable, 1_000);
}

#[test]
fn unknown_class_is_rejected() {
    let result = LanguageProfile::load_from_ron(Path::new("tests/fixtures/unknown_class.ron"));
    assert!(matches!(result, Err(ProfileError::UnknownClass('X'))));
}

#[test]
fn bad_pattern_is_rejected() {
    let result = LanguageProfile::load_from_ron(Path::new("tests/fixtures/bad_pattern.ron"));
    match result {
        Err(ProfileError::Pattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected pattern error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_structure_is_a_parse_error() {
    let result = LanguageDef::parse_ron(r#"Language(phonemes: {'C': "p"})"#);
    assert!(matches!(result, Err(ProfileError::Ron(_))));
}

#[test]
fn random_preset_survives_save_and_load() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(314);
    let def = presets::random(&mut rng).unwrap();

    let path = Path::new("target/test_random_preset.ron");
    def.save_ron(path).unwrap();
    let reloaded = LanguageDef::load_from_ron(path).unwrap();
    assert_eq!(reloaded, def);
    LanguageProfile::from_def(&reloaded).unwrap();
}
