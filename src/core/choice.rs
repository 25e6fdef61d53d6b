/// Front-biased random selection.

use rand::rngs::StdRng;
use rand::Rng;

use super::GenerationError;

/// Pick an item, skewed toward the front of the sequence.
///
/// Draws `u` uniformly from `[0, 1)` and indexes at `floor(u^exponent * len)`.
/// An exponent of 1 is uniform; larger exponents make earlier items
/// progressively more common, so phoneme inventories list their most
/// frequent sounds first.
pub fn choose<'a, T>(
    rng: &mut StdRng,
    items: &'a [T],
    exponent: f64,
) -> Result<&'a T, GenerationError> {
    if items.is_empty() {
        return Err(GenerationError::EmptyChoice);
    }

    let u: f64 = rng.gen();
    let index = (u.powf(exponent) * items.len() as f64).floor() as usize;
    Ok(&items[index.min(items.len() - 1)])
}
