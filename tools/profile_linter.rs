/// Profile Linter: validates language profiles and flags likely problems.
///
/// Usage: profile_linter <profile.ron | profile_dir>
///
/// Set `RUST_LOG=info` to list each file as it is checked.

use conlang_engine::core::orthography::default_spelling;
use conlang_engine::schema::profile::{LanguageDef, LanguageProfile};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: profile_linter <profile.ron | profile_dir>");
        process::exit(0);
    }

    let target = Path::new(&args[1]);
    let paths = if target.is_file() {
        vec![target.to_path_buf()]
    } else if target.is_dir() {
        let mut paths = Vec::new();
        collect_ron_files(target, &mut paths);
        paths.sort();
        paths
    } else {
        eprintln!("ERROR: Path '{}' does not exist", target.display());
        process::exit(1);
    };

    println!("Linting {} profile(s)", paths.len());

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for path in &paths {
        log::info!("linting {}", path.display());
        let def = match LanguageDef::load_from_ron(path) {
            Ok(def) => def,
            Err(e) => {
                errors.push(format!("{}: {}", path.display(), e));
                continue;
            }
        };
        let profile = match LanguageProfile::from_def(&def) {
            Ok(profile) => profile,
            Err(e) => {
                errors.push(format!("{}: {}", path.display(), e));
                continue;
            }
        };
        let found = lint_profile(&profile);
        log::debug!("{}: {} warning(s)", path.display(), found.len());
        for warning in found {
            warnings.push(format!("{}: {}", path.display(), warning));
        }
    }

    println!("\n=== Profile Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn collect_ron_files(dir: &Path, paths: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_ron_files(&path, paths);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                paths.push(path);
            }
        }
    }
}

fn lint_profile(profile: &LanguageProfile) -> Vec<String> {
    let mut warnings = Vec::new();
    let def = profile.def();

    // Classes nothing in the template can reach
    for tag in def.phonemes.keys() {
        if !profile.structure().classes().any(|class| class == *tag) {
            warnings.push(format!(
                "Phoneme class '{}' is never used by template {}",
                tag, profile.structure()
            ));
        }
    }

    // Symbols that would reach the page unspelled
    if profile.orthography().is_enabled() {
        let mut unspelled: Vec<char> = profile
            .structure()
            .classes()
            .flat_map(|class| profile.class(class).iter().copied())
            .filter(|p| !p.is_ascii() && profile.orthography().spelling(*p).is_none())
            .collect();
        unspelled.sort_unstable();
        unspelled.dedup();
        for phoneme in unspelled {
            warnings.push(format!(
                "Phoneme '{}' has no spelling and will be written as-is",
                phoneme
            ));
        }
    } else if has_special_symbols(profile) {
        warnings.push(
            "Orthography is disabled but the inventory uses non-ASCII symbols".to_string(),
        );
    }

    // Shortest possible word, assuming every spelling keeps its length
    let shortest_word = profile.min_syllables() * profile.structure().required_slots();
    if shortest_word > profile.max_name_length() {
        warnings.push(format!(
            "Shortest word has {} characters but names are capped at {}; no name can be made",
            shortest_word, profile.max_name_length()
        ));
    }

    if !def.no_morpheme_pool
        && profile.restrictions().is_empty()
        && profile.structure().len() < 2
    {
        warnings.push(
            "Single-slot template with morpheme pooling; keyed lookups may exhaust the inventory"
                .to_string(),
        );
    }

    warnings
}

fn has_special_symbols(profile: &LanguageProfile) -> bool {
    profile
        .structure()
        .classes()
        .flat_map(|class| profile.class(class).iter())
        .any(|p| !p.is_ascii() && default_spelling(*p).is_some())
}
