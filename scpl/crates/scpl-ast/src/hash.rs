//! Semantic hashing for set membership.
//!
//! Sets store the hash of each member's semantic value, and `in` hashes
//! its left operand through an explicit cast node before the lookup.
//! Kinds never mix inside one set, so cross-kind hash collisions cannot
//! produce false membership.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

fn finish<T: Hash>(value: T) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

pub fn hash_integer(value: i64) -> u64 {
    finish(value)
}

/// Floats hash over their IEEE bit pattern; equality in a set is
/// bit-pattern equality.
pub fn hash_float(value: f64) -> u64 {
    finish(value.to_bits())
}

pub fn hash_string(value: &str) -> u64 {
    finish(value)
}

pub fn hash_ipv4(value: u32) -> u64 {
    finish(value)
}

pub fn hash_ipv6(value: u128) -> u64 {
    finish(value)
}
