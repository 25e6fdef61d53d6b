/// Keyed token pools with global uniqueness: shared by the morpheme and word lexicons.

use rand::rngs::StdRng;
use rand::Rng;
use rustc_hash::FxHashMap;

use super::{GenerationError, Stage};

/// Tokens minted so far, grouped by semantic key.
///
/// A token is stored under at most one key, and never twice under the
/// same key. Pools only grow.
#[derive(Debug, Clone, Default)]
pub struct KeyedPool {
    entries: FxHashMap<String, Vec<String>>,
    /// Reverse index: token → owning key.
    owners: FxHashMap<String, String>,
}

impl KeyedPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens stored under `key`, oldest first.
    pub fn get(&self, key: &str) -> &[String] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Total tokens across every key.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.owners.contains_key(token)
    }

    /// The key a token was minted under.
    pub fn key_of(&self, token: &str) -> Option<&str> {
        self.owners.get(token).map(String::as_str)
    }

    /// Reuse a cached token for `key` or mint a fresh one.
    ///
    /// Draws an index in `0..cached + extra_slots`: an index inside the
    /// cached list is a hit, anything past it mints. A minted token that
    /// already lives under any key is discarded and the draw repeats, up
    /// to `attempts` times.
    pub(crate) fn reuse_or_mint<F>(
        &mut self,
        rng: &mut StdRng,
        key: &str,
        extra_slots: usize,
        attempts: u32,
        stage: Stage,
        mut mint: F,
    ) -> Result<String, GenerationError>
    where
        F: FnMut(&mut StdRng) -> Result<String, GenerationError>,
    {
        for _ in 0..attempts {
            let cached = self.get(key);
            let draw = rng.gen_range(0..cached.len() + extra_slots);
            if draw < cached.len() {
                return Ok(cached[draw].clone());
            }

            let token = mint(rng)?;
            if let Some(owner) = self.key_of(&token) {
                log::trace!(
                    "{} '{}' already minted under key '{}', redrawing",
                    stage,
                    token,
                    owner
                );
                continue;
            }

            log::debug!("minted {} '{}' for key '{}'", stage, token, key);
            self.insert(key, token.clone());
            return Ok(token);
        }

        log::warn!(
            "gave up finding a fresh {} for key '{}' after {} attempts",
            stage,
            key,
            attempts
        );
        Err(GenerationError::Exhausted { stage, attempts })
    }

    fn insert(&mut self, key: &str, token: String) {
        self.owners.insert(token.clone(), key.to_string());
        self.entries.entry(key.to_string()).or_default().push(token);
    }
}
