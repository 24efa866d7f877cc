#[inline]
#[cold]
const fn cold() {}

/// Hints at the compiler that the condition is likely `false`.
///
/// Used for the early returns on degenerate or suspicious input.
#[inline]
pub const fn unlikely(b: bool) -> bool {
    if b {
        cold();
    }

    b
}
