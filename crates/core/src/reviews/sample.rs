//! Uniform random sampling of reviews for display.

use rand::Rng;
use rand::seq::SliceRandom;

/// Pick `count` items uniformly at random, in random order.
///
/// The whole input is shuffled (Fisher-Yates) and truncated, so every item is
/// equally likely to land in every output position. The caller's slice is left
/// untouched. Asking for more items than exist returns all of them, shuffled.
///
/// ```
/// let reviews = vec!["a", "b", "c", "d", "e", "f"];
/// let picked = eblen_core::sample(&reviews, 4);
/// assert_eq!(picked.len(), 4);
/// assert!(picked.iter().all(|r| reviews.contains(r)));
/// ```
#[must_use]
pub fn sample<T: Clone>(items: &[T], count: usize) -> Vec<T> {
    sample_with(&mut rand::rng(), items, count)
}

/// [`sample`] with a caller-supplied random source.
#[must_use]
pub fn sample_with<R, T>(rng: &mut R, items: &[T], count: usize) -> Vec<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}
