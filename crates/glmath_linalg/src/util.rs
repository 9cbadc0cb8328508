//! Small numeric helpers

/// Whether `value` is a power of two (texture sizes, mipmapping).
///
/// Zero is not a power of two and returns `false`; the bare
/// `value & (value - 1) == 0` test would accept it.
#[inline]
pub fn is_power_of_2(value: u32) -> bool {
    value != 0 && (value & (value - 1)) == 0
}
