//! CRC-32 fingerprints of URL bytes and the probe sequence used to move past
//! fingerprint collisions.

/// Odd multiplier of the probe sequence (2^32 / golden ratio).
///
/// Being odd, it generates the whole `u32` ring: `probe(fp, k)` only repeats
/// after 2^32 attempts.
pub const PROBE_STEP: u32 = 0x9E37_79B9;

/// CRC-32 (IEEE polynomial) over the raw bytes.
///
/// Distinct inputs may share a fingerprint; callers that need unique codes
/// must resolve collisions themselves, see [`probe`].
pub fn fingerprint(bytes: impl AsRef<[u8]>) -> u32 {
    crc32fast::hash(bytes.as_ref())
}

/// Returns the `attempt`-th candidate for a fingerprint.
///
/// Attempt 0 is the fingerprint itself. Re-hashing the input with a salt
/// would not help here: CRC-32 is affine, so two equal-length inputs that
/// collide keep colliding under any common prefix or suffix.
pub fn probe(fingerprint: u32, attempt: u32) -> u32 {
    fingerprint.wrapping_add(attempt.wrapping_mul(PROBE_STEP))
}
