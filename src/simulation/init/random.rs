//! Small deterministic RNG; no external entropy needed for a visual toy.

/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform f32 in [min, max).
pub(super) fn rand_range(state: &mut u32, min: f32, max: f32) -> f32 {
    let unit = (xorshift32(state) >> 8) as f32 / (1u32 << 24) as f32;
    min + unit * (max - min)
}

/// Random 0xRRGGBB color.
pub(super) fn rand_color(state: &mut u32) -> u32 {
    xorshift32(state) & 0x00FF_FFFF
}
