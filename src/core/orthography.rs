/// Orthography: rendering phonemic strings into spelled text.

use rustc_hash::FxHashMap;

/// Built-in spellings for symbols that are awkward to read as-is.
///
/// Consulted after the profile's own consonant and vowel tables.
pub fn default_spelling(phoneme: char) -> Option<&'static str> {
    let spelled = match phoneme {
        'ʃ' => "sh",
        'ʒ' => "zh",
        'ʧ' => "ch",
        'ʤ' => "j",
        'ŋ' => "ng",
        'j' => "y",
        'x' => "kh",
        'ɣ' => "gh",
        'ʔ' => "‘",
        'A' => "á",
        'E' => "é",
        'I' => "í",
        'O' => "ó",
        'U' => "ú",
        _ => return None,
    };
    Some(spelled)
}

/// Layered per-character substitution tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Orthography {
    enabled: bool,
    consonants: FxHashMap<char, String>,
    vowels: FxHashMap<char, String>,
}

impl Orthography {
    pub fn new<C, V>(consonants: C, vowels: V) -> Self
    where
        C: IntoIterator<Item = (char, String)>,
        V: IntoIterator<Item = (char, String)>,
    {
        Self {
            enabled: true,
            consonants: consonants.into_iter().collect(),
            vowels: vowels.into_iter().collect(),
        }
    }

    /// An orthography that leaves phonemic strings untouched.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Spelling for one phoneme: consonant table, then vowel table, then
    /// the built-in defaults. `None` means the phoneme is written as itself.
    pub fn spelling(&self, phoneme: char) -> Option<&str> {
        self.consonants
            .get(&phoneme)
            .or_else(|| self.vowels.get(&phoneme))
            .map(String::as_str)
            .or_else(|| default_spelling(phoneme))
    }

    /// Render a phonemic string. Total: unmapped characters pass through.
    pub fn render(&self, phonemic: &str) -> String {
        if !self.enabled {
            return phonemic.to_string();
        }

        let mut spelled = String::with_capacity(phonemic.len());
        for phoneme in phonemic.chars() {
            match self.spelling(phoneme) {
                Some(s) => spelled.push_str(s),
                None => spelled.push(phoneme),
            }
        }
        spelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(char, &str)]) -> Vec<(char, String)> {
        entries.iter().map(|(c, s)| (*c, s.to_string())).collect()
    }

    #[test]
    fn disabled_returns_input_verbatim() {
        let orth = Orthography::disabled();
        assert_eq!(orth.render("ʃaŋ"), "ʃaŋ");
    }

    #[test]
    fn defaults_apply_without_tables() {
        let orth = Orthography::new(Vec::new(), Vec::new());
        assert_eq!(orth.render("ʃaŋ"), "shang");
        assert_eq!(orth.render("ʔAxO"), "‘ákhó");
    }

    #[test]
    fn consonant_table_overrides_default() {
        let orth = Orthography::new(table(&[('ʃ', "š"), ('ʧ', "č")]), Vec::new());
        assert_eq!(orth.render("ʃiʧ"), "šič");
        // Falls back to the defaults for anything the table misses
        assert_eq!(orth.render("ʒa"), "zha");
    }

    #[test]
    fn vowel_table_overrides_default() {
        let orth = Orthography::new(Vec::new(), table(&[('A', "ä"), ('U', "ü")]));
        assert_eq!(orth.render("kAtUrE"), "kätüré");
    }

    #[test]
    fn consonant_layer_wins_over_vowel_layer() {
        let orth = Orthography::new(table(&[('j', "j")]), table(&[('j', "i")]));
        assert_eq!(orth.spelling('j'), Some("j"));
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let orth = Orthography::new(Vec::new(), Vec::new());
        assert_eq!(orth.render("patek"), "patek");
        assert_eq!(orth.spelling('q'), None);
    }
}
