//! Hashing utilities for trajectory comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of judged transitions.
//! These hashes are not cryptographically secure; they are used for
//! fast equality checks during replay verification.

use hearth_core::Transition;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

fn fold_transition(mut hash: u64, t: &Transition) -> u64 {
    hash = fnv1a_u64(hash, t.step as u64);
    // Length prefix so "Move"+"Ahead" and "MoveA"+"head" differ.
    let name = t.action.name().as_bytes();
    hash = fnv1a_u64(hash, name.len() as u64);
    hash = fnv1a_bytes(hash, name);
    hash = fnv1a_u64(hash, t.verdict.reward.to_bits());
    let flags = u8::from(t.verdict.terminal) | (u8::from(t.verdict.action_succeeded) << 1);
    fnv1a_byte(hash, flags)
}

/// Hash of a single transition.
pub fn transition_hash(transition: &Transition) -> u64 {
    fold_transition(FNV_OFFSET, transition)
}

/// Hash of a whole trajectory, order-sensitive.
///
/// Rewards are hashed by bit pattern, so `0.0` and `-0.0` differ.
/// Returns `FNV_OFFSET` for an empty trajectory.
pub fn trajectory_hash(transitions: &[Transition]) -> u64 {
    transitions.iter().fold(FNV_OFFSET, fold_transition)
}
