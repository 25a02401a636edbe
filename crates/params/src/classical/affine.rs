//! Constants for the Affine cipher

/// Values of `a` that are coprime with 26, i.e. invertible mod 26
pub const VALID_A_VALUES: [i64; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

/// Smallest valid shift `b`
pub const B_MIN: i64 = 0;

/// Largest valid shift `b`
pub const B_MAX: i64 = 25;

/// Default key shown to new users
pub const DEFAULT_A: i64 = 5;

/// Default shift shown to new users
pub const DEFAULT_B: i64 = 8;
