//! WASM bindings for conlang-engine: powers the interactive web demo.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use conlang_engine::core::language::Language;
use conlang_engine::presets;
use conlang_engine::schema::profile::LanguageDef;

// ---------------------------------------------------------------------------
// Embedded profiles: compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const SLAVIC: &str = include_str!("../../profiles/slavic.ron");
    pub const HAWAIIAN: &str = include_str!("../../profiles/hawaiian.ron");
}

const PRESETS: &[&str] = &["basic", "ortho", "random", "slavic", "hawaiian"];

#[derive(serde::Serialize)]
struct LexiconInfo {
    genitive: Option<String>,
    definite: Option<String>,
    morphemes: usize,
    words: usize,
    names: usize,
}

fn resolve_preset(preset: &str, seed: u64) -> Result<LanguageDef, JsError> {
    let def = match preset {
        "slavic" => LanguageDef::parse_ron(data::SLAVIC),
        "hawaiian" => LanguageDef::parse_ron(data::HAWAIIAN),
        other => {
            let mut rng = StdRng::seed_from_u64(seed);
            return match presets::by_name(other, &mut rng) {
                Some(def) => def.map_err(|e| JsError::new(&format!("Preset error: {e}"))),
                None => Err(JsError::new(&format!("Unknown preset: {other}"))),
            };
        }
    };
    def.map_err(|e| JsError::new(&format!("Profile parse error: {e}")))
}

fn build_language(def: LanguageDef, seed: u64) -> Result<Language, JsError> {
    Language::builder()
        .seed(seed)
        .with_def(def)
        .build()
        .map_err(|e| JsError::new(&format!("Language build error: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// LanguageDemo: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct LanguageDemo {
    language: Language,
    def: LanguageDef,
}

#[wasm_bindgen]
impl LanguageDemo {
    /// Create a demo session for a named preset and seed.
    #[wasm_bindgen(constructor)]
    pub fn new(preset: &str, seed: u64) -> Result<LanguageDemo, JsError> {
        let def = resolve_preset(preset, seed)?;
        let language = build_language(def.clone(), seed)?;
        Ok(LanguageDemo { language, def })
    }

    /// Create a demo session from a RON profile typed by the user.
    pub fn from_ron(source: &str, seed: u64) -> Result<LanguageDemo, JsError> {
        let def = LanguageDef::parse_ron(source)
            .map_err(|e| JsError::new(&format!("Profile parse error: {e}")))?;
        let language = build_language(def.clone(), seed)?;
        Ok(LanguageDemo { language, def })
    }

    /// One word for a semantic key (empty for generic).
    pub fn word(&mut self, key: &str) -> Result<String, JsError> {
        self.language
            .word(key)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))
    }

    /// One name for a semantic key (empty for generic).
    pub fn name(&mut self, key: &str) -> Result<String, JsError> {
        self.language
            .name(key)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))
    }

    /// Generate several words. Returns a JSON array of strings.
    pub fn words(&mut self, count: usize, key: &str) -> Result<String, JsError> {
        let words = self
            .language
            .words_for(key, count)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))?;
        to_json(&words)
    }

    /// Generate several names. Returns a JSON array of strings.
    pub fn names(&mut self, count: usize, key: &str) -> Result<String, JsError> {
        let names = self
            .language
            .names_for(key, count)
            .map_err(|e| JsError::new(&format!("Generation error: {e}")))?;
        to_json(&names)
    }

    /// The session's language definition as pretty RON.
    pub fn profile_ron(&self) -> Result<String, JsError> {
        self.def
            .to_ron_string()
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return a JSON summary of the particles and lexicon sizes.
    pub fn lexicon(&self) -> Result<String, JsError> {
        to_json(&LexiconInfo {
            genitive: self.language.genitive().map(str::to_string),
            definite: self.language.definite().map(str::to_string),
            morphemes: self.language.morphemes().len(),
            words: self.language.words().len(),
            names: self.language.names().len(),
        })
    }

    /// Start over with a new seed, keeping the same language definition.
    pub fn reset(&mut self, seed: u64) -> Result<(), JsError> {
        self.language = build_language(self.def.clone(), seed)?;
        Ok(())
    }

    /// Return JSON array of available preset identifiers.
    pub fn available_presets() -> String {
        serde_json::to_string(PRESETS).unwrap_or_else(|_| "[]".to_string())
    }
}
