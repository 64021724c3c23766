//! Predicates for `skip_serializing_if`.
//!
//! Discord treats a missing key the same as its zero value, so every optional
//! scalar is left out of the payload while it holds that zero value.

/// Skips `false` booleans
pub const fn is_false(value: &bool) -> bool {
    !*value
}

/// Skips zero-valued dimensions
pub const fn is_zero(value: &u32) -> bool {
    *value == 0
}
