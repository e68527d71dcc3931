//! Uniform random choice among stored ids.

use rand::{seq::SliceRandom, Rng};

/// Pick one id from `ids`.
///
/// Returns `None` when `ids` is empty and the only element when there is
/// exactly one; otherwise every element is equally likely.
pub fn pick_random<'a, T, R>(ids: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    match ids {
        [] => None,
        [only] => Some(only),
        many => many.choose(rng),
    }
}
