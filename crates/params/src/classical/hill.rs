//! Constants for the Hill cipher

/// Supported key matrix dimensions
pub const MATRIX_SIZES: [usize; 4] = [2, 3, 4, 5];

/// Smallest supported dimension
pub const MIN_MATRIX_SIZE: usize = 2;

/// Largest supported dimension
pub const MAX_MATRIX_SIZE: usize = 5;

/// Default 2×2 key, row-major
pub const DEFAULT_MATRIX_2: [i64; 4] = [3, 3, 2, 5];

/// Default 3×3 key, row-major
pub const DEFAULT_MATRIX_3: [i64; 9] = [6, 24, 1, 13, 16, 10, 20, 17, 15];

/// Default 4×4 key, row-major
pub const DEFAULT_MATRIX_4: [i64; 16] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3];

/// Default 5×5 key, row-major
pub const DEFAULT_MATRIX_5: [i64; 25] = [
    2, 4, 5, 0, 1, 9, 2, 1, 0, 6, 3, 5, 8, 1, 11, 1, 0, 3, 21, 2, 4, 7, 2, 1, 6,
];

/// Default key for a dimension, row-major
pub fn default_matrix_values(n: usize) -> Option<&'static [i64]> {
    match n {
        2 => Some(&DEFAULT_MATRIX_2),
        3 => Some(&DEFAULT_MATRIX_3),
        4 => Some(&DEFAULT_MATRIX_4),
        5 => Some(&DEFAULT_MATRIX_5),
        _ => None,
    }
}
