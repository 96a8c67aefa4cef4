// src/integer_math/gcd.rs

use num::BigInt;
use num::Integer;
use num::Signed;
use num::Zero;

pub struct GCD;

impl GCD {
    pub fn find_gcd_pair(left: &BigInt, right: &BigInt) -> BigInt {
        left.gcd(right)
    }

    /// Reduces `numerator/denominator` by their gcd and normalizes the sign
    /// onto the numerator, so the returned denominator is non-negative.
    pub fn reduce_ratio(numerator: BigInt, denominator: BigInt) -> (BigInt, BigInt) {
        let divisor = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = if divisor.is_zero() {
            (numerator, denominator)
        } else {
            (&numerator / &divisor, &denominator / &divisor)
        };
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        (numerator, denominator)
    }
}
