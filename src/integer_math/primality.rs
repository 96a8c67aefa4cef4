// src/integer_math/primality.rs

use num::{BigInt, Integer, One, Zero};

pub struct Primality;

impl Primality {
    // Deterministic for every input below 3.3 * 10^24.
    const WITNESS_BASES: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    /// Miller-Rabin probable-prime test over the fixed witness bases.
    pub fn is_probable_prime(input: &BigInt) -> bool {
        if input == &BigInt::from(2) || input == &BigInt::from(3) {
            return true;
        }
        if input < &BigInt::from(2) || input.is_even() {
            return false;
        }

        let minus_one = input - BigInt::one();
        let mut d = minus_one.clone();
        let mut s = 0;
        while d.is_even() {
            d /= 2;
            s += 1;
        }

        let two = BigInt::from(2);
        for &base in &Self::WITNESS_BASES {
            let witness = BigInt::from(base).mod_floor(input);
            if witness.is_zero() {
                // the base is a multiple of the input, which tells us nothing
                continue;
            }
            let mut x = witness.modpow(&d, input);
            if x.is_one() || x == minus_one {
                continue;
            }
            let mut r = 1;
            while r < s {
                x = x.modpow(&two, input);
                if x.is_one() {
                    return false;
                }
                if x == minus_one {
                    break;
                }
                r += 1;
            }
            if x != minus_one {
                return false;
            }
        }
        true
    }
}
