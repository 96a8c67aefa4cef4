// src/integer_math/modular.rs

use num::{BigInt, Integer, One, Zero};

/// Extended Euclidean algorithm.
///
/// Returns (gcd, x, y) such that a*x + b*y = gcd.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (gcd, x1, y1) = extended_gcd(&b.mod_floor(a), a);

    let x = &y1 - (b / a) * &x1;
    let y = x1;

    (gcd, x, y)
}

/// Modular inverse a⁻¹ mod m, or None when gcd(a, m) != 1.
///
/// The returned inverse is the canonical representative in [0, m).
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    if m.is_one() {
        return Some(BigInt::zero());
    }

    let (gcd, x, _) = extended_gcd(a, m);
    if !gcd.is_one() {
        return None;
    }

    Some(x.mod_floor(m))
}

/// Number of 64-bit words in the magnitude of `n`; zero occupies no words.
pub fn word_count(n: &BigInt) -> u64 {
    if n.is_zero() {
        0
    } else {
        (n.bits() + 63) / 64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 ≡ 1 (mod 7)
        let a = BigInt::from(3);
        let m = BigInt::from(7);
        let inv = mod_inverse(&a, &m).unwrap();
        assert_eq!(inv, BigInt::from(5));
        assert_eq!((&a * &inv).mod_floor(&m), BigInt::one());
    }

    #[test]
    fn test_mod_inverse_rejects_shared_factor() {
        assert_eq!(mod_inverse(&BigInt::from(6), &BigInt::from(9)), None);
    }

    #[test]
    fn test_extended_gcd() {
        let a = BigInt::from(35);
        let b = BigInt::from(15);
        let (gcd, x, y) = extended_gcd(&a, &b);

        assert_eq!(gcd, BigInt::from(5));
        assert_eq!(&a * &x + &b * &y, gcd);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(&BigInt::zero()), 0);
        assert_eq!(word_count(&BigInt::from(1024)), 1);
        assert_eq!(word_count(&(BigInt::one() << 64)), 2);
        assert_eq!(word_count(&(BigInt::one() << 250)), 4);
    }
}
