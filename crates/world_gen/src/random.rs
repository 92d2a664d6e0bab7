//! Draw primitives over the shared generation RNG stream.
//!
//! Every stochastic step of a run goes through these helpers with the single
//! [`RngCore`] owned by [`crate::generator::WorldGenerator`]. Each helper consumes
//! exactly one `u32` from the stream, which keeps the number and order of draws
//! easy to audit.
use rand::RngCore;

/// Generate a random float in the range [0, 1].
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Draw `-1.0` or `+1.0` with equal probability.
#[inline]
pub fn random_sign(rng: &mut dyn RngCore) -> f32 {
    if rng.next_u32() & 1 == 0 {
        -1.0
    } else {
        1.0
    }
}

/// Returns `true` with the given probability.
///
/// A probability of `0.0` never succeeds and `1.0` always does. One draw is
/// consumed either way.
#[inline]
pub fn chance(rng: &mut dyn RngCore, probability: f32) -> bool {
    let roll = rand01(rng);
    probability >= 1.0 || roll < probability
}

/// Draw a uniform index in `[0, len)`. Returns `0` when `len` is zero.
#[inline]
pub fn random_index(rng: &mut dyn RngCore, len: usize) -> usize {
    let i = (rand01(rng) * len as f32) as usize;
    i.min(len.saturating_sub(1))
}

/// Draw a uniform value in `[min, max]`.
#[inline]
pub fn random_in(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + rand01(rng) * (max - min)
}
