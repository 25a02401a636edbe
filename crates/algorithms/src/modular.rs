//! Modular arithmetic over small moduli

/// Multiplicative inverse of `a` modulo `m`, if one exists
///
/// Searches `1..m` directly, so the cost is linear in `m`. Callers pass the
/// alphabet modulus; public entry points cap `m` at 26.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 1 {
        return None;
    }
    let a = a.rem_euclid(m);
    (1..m).find(|x| (a * x) % m == 1)
}

/// Greatest common divisor
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Whether `a` is invertible modulo `m`
#[inline]
pub fn is_unit(a: i64, m: i64) -> bool {
    mod_inverse(a, m).is_some()
}
