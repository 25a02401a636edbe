//! Constants for the Vigenère cipher

/// Number of tableau rows shown when the caller does not ask for a count
pub const DEFAULT_TABLEAU_ROWS: usize = 6;
