//! Integer addition backing the `MainActivity.add` native method.

/// Adds two 32-bit signed integers.
///
/// Overflow wraps (two's complement), matching what the Java side gets from
/// `int` arithmetic. This never panics, even in debug builds.
#[inline]
pub fn add(x: i32, y: i32) -> i32 {
    x.wrapping_add(y)
}
