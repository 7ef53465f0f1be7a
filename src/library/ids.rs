//! Identifier allocation for tags and tag groups
//!
//! Tags and groups share one id namespace: a freshly allocated id must not
//! collide with any existing tag or group id. Ids are 4-digit decimal
//! strings drawn uniformly from 1000..=9999, redrawn on collision. With
//! 9000 values this converges quickly while the combined population stays
//! small; widening the space is a format change, not an algorithm change.

use rand::Rng;
use std::collections::HashSet;

/// Lowest id in the allocation space (inclusive)
const ID_MIN: u32 = 1000;
/// Highest id in the allocation space (exclusive)
const ID_MAX: u32 = 10000;

/// Draw a fresh identifier not present in `in_use`
///
/// # Panics
/// Panics if the entire id space is exhausted (9000 live ids), which the
/// manager never allows to happen silently in practice.
pub fn allocate<R: Rng>(rng: &mut R, in_use: &HashSet<String>) -> String {
    assert!(
        (in_use.len() as u32) < ID_MAX - ID_MIN,
        "tag id space exhausted"
    );
    loop {
        let candidate = rng.gen_range(ID_MIN..ID_MAX).to_string();
        if !in_use.contains(&candidate) {
            return candidate;
        }
    }
}

/// Draw a fresh identifier using the thread-local RNG
#[must_use]
pub fn allocate_id(in_use: &HashSet<String>) -> String {
    allocate(&mut rand::thread_rng(), in_use)
}
