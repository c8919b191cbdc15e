//! Modular arithmetic for the virtual loop.

/// True (floored) modulo: the result is in `[0, len)` for any signed offset
/// when `len > 0`, and `0` when `len == 0`.
///
/// The `%` operator alone is a remainder and keeps the dividend's sign, which
/// is wrong for leftward (negative) offsets.
pub fn mod_floor(offset: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    offset.rem_euclid(len as i64) as usize
}

/// Index at which the visible ordering starts within the base sequence.
///
/// The visible sequence is `base[split..] ++ base[..split]`, i.e. the last
/// `effective_offset` elements move to the front. `effective_offset` must
/// already be normalized into `[0, len)`.
pub(crate) fn split_point(len: usize, effective_offset: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (len - effective_offset) % len
}
