// tests/attack_tests.rs
//
// Scenario tests for the RSA and Wiener probes, driven the way the
// search driver invokes them.

use num::{BigInt, One};
use relation_guesser::attacks::rsa::{
    rsa_decryption_consistency, rsa_factor_recovery, rsa_key_consistency,
};
use relation_guesser::attacks::wiener::{wiener_bounded_search, wiener_continued_fraction};
use relation_guesser::core::report::ReportSink;
use relation_guesser::integer_math::modular;

#[test]
fn test_toy_key_round_trip() {
    // n = 3233 = 53 * 61, e = 17, d = 413
    let n = BigInt::from(3233);
    let e = BigInt::from(17);
    let d = BigInt::from(413);

    assert!(rsa_key_consistency(&n, &e, &d));

    let mut report = ReportSink::new();
    assert!(rsa_factor_recovery(&n, &e, &d, 64, &mut report));
    let text = report.into_string();
    assert!(text.contains("3233 = 53 * 61") || text.contains("3233 = 61 * 53"));
}

#[test]
fn test_key_consistency_is_order_sensitive() {
    let n = BigInt::from(3233);
    // a mangled triple must not be confirmed
    assert!(!rsa_key_consistency(&BigInt::from(17), &n, &BigInt::from(413)));
    assert!(!rsa_key_consistency(&n, &BigInt::from(413), &BigInt::from(17)));
}

#[test]
fn test_decryption_consistency_decodes_ascii() {
    // m^d mod n = 2^10 = 1024 = [0x04, 0x00] in base 256, far narrower
    // than a 251-bit modulus
    let n = (BigInt::one() << 250) + BigInt::from(7);
    let m = BigInt::from(2);
    let d = BigInt::from(10);

    let mut report = ReportSink::new();
    assert!(rsa_decryption_consistency(&m, &d, &n, &mut report));
    let text = report.into_string();
    assert!(text.contains("possible decrypted rsa message:"));
    assert!(text.contains("p: 1024"));
    assert!(text.contains("p2: "));
}

#[test]
fn test_wiener_scenario_recovers_both_ways() {
    // deliberately small private exponent: d = 101 < n^(1/4) / 3
    let p = BigInt::from(104729);
    let q = BigInt::from(105529);
    let n = &p * &q;
    let phi = (&p - BigInt::one()) * (&q - BigInt::one());
    let d = BigInt::from(101);
    let e = modular::mod_inverse(&d, &phi).expect("d is coprime to phi");

    let mut report = ReportSink::new();
    assert!(wiener_continued_fraction(&n, &e, 5000, &mut report));
    let text = report.into_string();
    assert!(text.contains("p:104729"));
    assert!(text.contains("q:105529"));

    let mut report = ReportSink::new();
    assert!(wiener_bounded_search(&n, &e, &mut report));
    let text = report.into_string();
    assert!(text.contains("p:104729"));
    assert!(text.contains("q:105529"));
}

#[test]
fn test_wiener_does_not_invent_factorisations() {
    // a healthy public exponent has a private exponent far past the
    // small-d bound, so both formulations must fail silently
    let n = BigInt::from(104729) * BigInt::from(105529);
    let e = BigInt::from(65537);

    let mut report = ReportSink::new();
    assert!(!wiener_continued_fraction(&n, &e, 5000, &mut report));
    assert!(!wiener_bounded_search(&n, &e, &mut report));
    assert!(report.is_empty());
}

#[test]
fn test_wiener_iteration_cap_fails_soft() {
    let p = BigInt::from(104729);
    let q = BigInt::from(105529);
    let n = &p * &q;
    let phi = (&p - BigInt::one()) * (&q - BigInt::one());
    let e = modular::mod_inverse(&BigInt::from(101), &phi).unwrap();

    // a cap of 1 convergent is too tight for any recovery
    let mut report = ReportSink::new();
    assert!(!wiener_continued_fraction(&n, &e, 1, &mut report));
    assert!(report.is_empty());
}
