// src/attacks/wiener.rs
//
// Wiener's attack on RSA with a small private exponent, in two
// formulations. Both are soft probes: iteration caps and non-square
// discriminants end the attempt silently, and a factorisation is only
// reported once p * q has been checked against n.

use log::debug;
use num::integer::Roots;
use num::{BigInt, Integer, One, Signed, Zero};

use crate::core::report::ReportSink;
use crate::integer_math::modular;

/// Continued-fraction Wiener attack on `(n, e)`.
///
/// Expands `e/n` with the Euclidean algorithm, maintaining the convergent
/// numerators and denominators. For a small private exponent, one
/// convergent `k/d` satisfies `e*d - 1 == k*phi(n)`; at each step with
/// `(e*d - 1)` divisible by `k`, the candidate `phi` turns the factors of
/// `n` into the roots of `x² - (n - phi + 1)x + n`, which are integers
/// exactly when the discriminant is a perfect square.
///
/// # Arguments
/// * `n` - the suspected RSA modulus
/// * `e` - the suspected public exponent
/// * `max_iterations` - convergent cap; exhaustion is a silent failure
///
/// # Returns
/// true when a factorisation of `n` was found and reported
pub fn wiener_continued_fraction(
    n: &BigInt,
    e: &BigInt,
    max_iterations: usize,
    report: &mut ReportSink,
) -> bool {
    let mut hi = e.clone();
    let mut lo = n.clone();

    let mut num_prev = BigInt::zero();
    let mut den_prev = BigInt::one();
    let mut num = BigInt::one();
    let mut den = BigInt::zero();

    for iteration in 0..max_iterations {
        if lo.is_zero() {
            break;
        }
        let quotient = &hi / &lo;
        let remainder = &hi % &lo;

        let num_next = &num_prev + &num * &quotient;
        let den_next = &den_prev + &den * &quotient;
        num_prev = std::mem::replace(&mut num, num_next);
        den_prev = std::mem::replace(&mut den, den_next);

        hi = std::mem::replace(&mut lo, remainder);

        if !num.is_positive() {
            continue;
        }

        let k = &num;
        let d = &den;
        if !(e * d - BigInt::one()).mod_floor(k).is_zero() {
            continue;
        }

        let phi = (e * d - BigInt::one()) / k;
        let half_trace = &phi - BigInt::one() - n;
        let discriminant = &half_trace * &half_trace - BigInt::from(4) * n;
        if discriminant.is_negative() {
            continue;
        }

        let root = discriminant.sqrt();
        if &root * &root != discriminant {
            continue;
        }

        let p = (BigInt::one() - &phi - &root + n) / BigInt::from(2);
        let q = (BigInt::one() - &phi + &root + n) / BigInt::from(2);
        if &p * &q != *n {
            continue;
        }

        report.line("Wiener attack with");
        report.line(format!("n:{}", n));
        report.line(format!("e:{}", e));
        report.line("factorisation is:");
        report.line(format!("c:{}", iteration + 1));
        report.line(format!("d:{}", d));
        report.line(format!("p:{}", p));
        report.line(format!("q:{}", q));
        return true;
    }

    debug!("continued-fraction attack exhausted without a factorisation");
    false
}

/// Wiener attack assuming `d < n^(1/4) / 3`, walking the continued
/// fraction of `n/e` directly.
///
/// Each convergent's numerator is a private-exponent candidate; a
/// candidate past the bound ends the walk. From the convergent the probe
/// derives `p + q` and `p - q` and accepts once the reassembled product
/// matches `n`.
pub fn wiener_bounded_search(n: &BigInt, e: &BigInt, report: &mut ReportSink) -> bool {
    if n <= &BigInt::one() || e.is_zero() || e.is_negative() {
        return false;
    }

    let bound = n.nth_root(4) / BigInt::from(3);

    // convergents h/k of n/e; h is the private-exponent candidate
    let mut k_prev = BigInt::zero();
    let mut k_cur = BigInt::one();
    let mut h_prev = BigInt::one();
    let mut h_cur = n / e;

    let mut crt = e.clone();
    let mut rest = n.mod_floor(e);

    loop {
        if rest.is_zero() {
            // the fraction terminated without reaching the bound
            return false;
        }
        let quotient = &crt / &rest;
        let remainder = &crt % &rest;
        crt = std::mem::replace(&mut rest, remainder);

        let k_next = &quotient * &k_cur + &k_prev;
        let h_next = &quotient * &h_cur + &h_prev;

        if h_next > bound {
            return false;
        }

        let phi = (&h_next * e - BigInt::one()) / &k_next;
        let sum = n - &phi + BigInt::one();
        let half = &sum / BigInt::from(2);
        let quarter_square = &half * &half - n;
        if quarter_square.is_negative() {
            return false;
        }
        let difference = quarter_square.sqrt() * BigInt::from(2);
        let p = (&sum + &difference) / BigInt::from(2);
        let q = (&sum - &difference) / BigInt::from(2);
        if &p * &q == *n {
            report.line("factorisation is:");
            if let Some(d) = modular::mod_inverse(e, &((&p - BigInt::one()) * (&q - BigInt::one())))
            {
                report.line(format!("d:{}", d));
            }
            report.line(format!("p:{}", p));
            report.line(format!("q:{}", q));
            return true;
        }

        k_prev = std::mem::replace(&mut k_cur, k_next);
        h_prev = std::mem::replace(&mut h_cur, h_next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A modulus with a deliberately small private exponent: d = 101 is
    /// far below n^(1/4) / 3.
    fn small_exponent_key() -> (BigInt, BigInt, BigInt, BigInt) {
        let p = BigInt::from(104729);
        let q = BigInt::from(105529);
        let n = &p * &q;
        let phi = (&p - BigInt::one()) * (&q - BigInt::one());
        let d = BigInt::from(101);
        let e = modular::mod_inverse(&d, &phi).expect("101 is coprime to phi");
        (n, e, p, q)
    }

    #[test]
    fn test_continued_fraction_recovers_factors() {
        let (n, e, p, q) = small_exponent_key();
        let mut report = ReportSink::new();

        assert!(wiener_continued_fraction(&n, &e, 5000, &mut report));
        let text = report.into_string();
        assert!(text.contains(&format!("p:{}", p)));
        assert!(text.contains(&format!("q:{}", q)));
        assert!(text.contains("d:101"));
    }

    #[test]
    fn test_bounded_search_recovers_factors() {
        let (n, e, p, q) = small_exponent_key();
        let mut report = ReportSink::new();

        assert!(wiener_bounded_search(&n, &e, &mut report));
        let text = report.into_string();
        assert!(text.contains(&format!("p:{}", p)));
        assert!(text.contains(&format!("q:{}", q)));
    }

    #[test]
    fn test_healthy_exponent_is_not_factored() {
        // e = 65537 implies a large d, out of reach for both formulations
        let p = BigInt::from(104729);
        let q = BigInt::from(105529);
        let n = &p * &q;
        let e = BigInt::from(65537);

        let mut report = ReportSink::new();
        assert!(!wiener_continued_fraction(&n, &e, 5000, &mut report));
        assert!(!wiener_bounded_search(&n, &e, &mut report));
        assert!(report.is_empty());
    }
}
