// src/attacks/rsa.rs

use log::debug;
use num::{BigInt, Integer, One, ToPrimitive, Zero};

use crate::attacks::wiener::wiener_continued_fraction;
use crate::core::report::ReportSink;
use crate::core::static_random::StaticRandom;
use crate::integer_math::modular;

/// Tests whether `m^d mod n` looks like a decrypted RSA message.
///
/// The signal is purely a length heuristic: a ciphertext is as wide as the
/// modulus, while real plaintext is usually much shorter, so a power that
/// comes out several machine words narrower than `n` is worth reporting.
/// On a hit the residue is also decoded as a big-endian base-256 ASCII
/// string; the decode is abandoned as soon as any byte exceeds 127.
pub fn rsa_decryption_consistency(
    m: &BigInt,
    d: &BigInt,
    n: &BigInt,
    report: &mut ReportSink,
) -> bool {
    if n <= &BigInt::one() || d <= &BigInt::one() {
        return false;
    }
    if m < &BigInt::from(2) {
        return false;
    }
    if n < m || n < d {
        return false;
    }

    let p = m.modpow(d, n);

    if (modular::word_count(&p) as i64) >= (modular::word_count(n) as i64) - 2 {
        return false;
    }

    report.line("possible decrypted rsa message:");
    report.line(format!("m: {}", m));
    report.line(format!("n: {}", n));
    report.line(format!("d: {}", d));
    report.line(format!("p: {}", p));

    let mut plain = String::new();
    let mut rest = p;
    let mut printable = true;
    while !rest.is_zero() {
        let byte = rest.mod_floor(&BigInt::from(256));
        let code = byte.to_u32().unwrap_or(u32::MAX);
        if code > 127 {
            printable = false;
            break;
        }
        plain.insert(0, code as u8 as char);
        rest /= 256;
    }
    if printable {
        report.line(format!("p2: {}", plain));
    }

    true
}

/// Tests whether `(n, e, d)` behaves like an RSA key triple, by checking
/// that raising to `e` and then to `d` round-trips both exponents.
///
/// `e > d` is rejected: the public exponent is almost always the small
/// one, and the enumeration tries every ordering anyway.
pub fn rsa_key_consistency(n: &BigInt, e: &BigInt, d: &BigInt) -> bool {
    if n <= &BigInt::one() || e <= &BigInt::zero() || e.is_one() || d <= &BigInt::zero() {
        return false;
    }
    if n < e || n < d {
        return false;
    }
    if e > d {
        return false;
    }

    e.modpow(e, n).modpow(d, n) == *e && d.modpow(e, n).modpow(d, n) == *d
}

/// Reports a confirmed key triple and probes the private exponent with the
/// continued-fraction Wiener attack, which factors `n` on the spot when
/// `d` happens to be small.
pub fn rsa_key_info(
    n: &BigInt,
    e: &BigInt,
    d: &BigInt,
    wiener_max_iterations: usize,
    report: &mut ReportSink,
) {
    report.line("rsa magic numbers:");
    report.line(format!("n: {}", n));
    report.line(format!("e: {}", e));
    report.line(format!("d: {}", d));
    report.blank();
    wiener_continued_fraction(n, d, wiener_max_iterations, report);
}

/// Factors `n` from a confirmed key triple via the classic square-root-of-1
/// search over `u = e*d - 1`.
///
/// Writes `u = 2^c * odd`, draws a random base, raises it to the odd part
/// and squares until the result is 1; the last value before that is a
/// square root of 1, and a nontrivial one yields a factor through
/// `gcd(root - 1, n)`. A square-root chain longer than `c + 1` squarings
/// means the base was a bad draw (not coprime to n, for instance); that
/// and trivial roots both trigger a redraw, bounded by `max_retries` so
/// an adversarial triple cannot spin forever.
pub fn rsa_factor_recovery(
    n: &BigInt,
    e: &BigInt,
    d: &BigInt,
    max_retries: usize,
    report: &mut ReportSink,
) -> bool {
    let mut u = e * d - BigInt::one();

    report.line(format!("e*d-1: {}", u));

    if u.is_zero() || n <= &BigInt::one() {
        return false;
    }

    let mut c = 0u32;
    while u.is_even() {
        u /= 2;
        c += 1;
    }

    let mut random = StaticRandom::new();
    let two = BigInt::from(2);
    let upper = n - BigInt::one();

    'redraw: for _ in 0..max_retries {
        let base = random.next_bigint(&BigInt::zero(), &upper);
        let mut z = base.modpow(&u, n);
        let mut z2 = z.modpow(&two, n);

        let mut squarings = 0u32;
        while !z2.is_one() {
            z = z2;
            z2 = z.modpow(&two, n);
            squarings += 1;
            if squarings > c {
                debug!(
                    "factor recovery: square root search exceeded its bound after {} squarings",
                    squarings
                );
                continue 'redraw;
            }
        }

        let divisor = (&z - BigInt::one()).gcd(n);
        if divisor.is_one() || &divisor == n {
            continue;
        }

        report.line(format!("{} = {} * {}", n, divisor, n / &divisor));
        report.blank();
        return true;
    }

    report.line("factor recovery: no factor within the retry bound");

    debug!(
        "factor recovery: no nontrivial square root of 1 after {} draws",
        max_retries
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_consistency_rejects_swapped_exponents() {
        // same toy key with e and d exchanged
        let n = BigInt::from(3233);
        assert!(!rsa_key_consistency(&n, &BigInt::from(413), &BigInt::from(17)));
    }

    #[test]
    fn test_key_consistency_rejects_degenerates() {
        let n = BigInt::from(3233);
        assert!(!rsa_key_consistency(&BigInt::zero(), &BigInt::from(17), &BigInt::from(413)));
        assert!(!rsa_key_consistency(&n, &BigInt::zero(), &BigInt::from(413)));
        assert!(!rsa_key_consistency(&n, &BigInt::one(), &BigInt::from(413)));
        assert!(!rsa_key_consistency(&n, &BigInt::from(-17), &BigInt::from(413)));
        assert!(!rsa_key_consistency(&n, &BigInt::from(17), &BigInt::from(9999)));
    }

    #[test]
    fn test_decryption_consistency_rejects_wide_residue() {
        // n is a single machine word here, so no residue can be two words
        // narrower and the heuristic must not fire
        let mut report = ReportSink::new();
        assert!(!rsa_decryption_consistency(
            &BigInt::from(2),
            &BigInt::from(10),
            &BigInt::from(2000),
            &mut report,
        ));
        assert!(report.is_empty());
    }

    #[test]
    fn test_factor_recovery_on_toy_key() {
        // n = 3233 = 53 * 61, e = 17, d = 413
        let mut report = ReportSink::new();
        assert!(rsa_factor_recovery(
            &BigInt::from(3233),
            &BigInt::from(17),
            &BigInt::from(413),
            64,
            &mut report,
        ));

        let text = report.into_string();
        assert!(text.contains("e*d-1: 7020"));
        assert!(text.contains("3233 = "));
        assert!(text.contains("53"));
        assert!(text.contains("61"));
    }

    #[test]
    fn test_factor_recovery_rejects_zero_exponent_product() {
        // e * d == 1 leaves nothing to work with
        let mut report = ReportSink::new();
        assert!(!rsa_factor_recovery(
            &BigInt::from(3233),
            &BigInt::one(),
            &BigInt::one(),
            64,
            &mut report,
        ));
    }
}
