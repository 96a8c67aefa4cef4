// tests/end_to_end_tests.rs
//
// End-to-end tests for the complete relation search. These drive the
// public entry point the way the binary does and only look at the
// returned report.

use num::BigInt;
use relation_guesser::config::GuesserConfig;
use relation_guesser::core::cancellation_token::CancellationToken;
use relation_guesser::core::report::DIVIDER;
use relation_guesser::{guess_relations, guess_relations_with_config};

fn numbers_from(values: &[i64]) -> Vec<BigInt> {
    values.iter().map(|&v| BigInt::from(v)).collect()
}

#[test]
fn test_input_cap_is_enforced() {
    let too_many = numbers_from(&[1; 21]);
    let report = guess_relations(&too_many, &CancellationToken::new());
    assert_eq!(report, "too many numbers");
}

#[test]
fn test_twenty_numbers_are_searched() {
    let at_cap = numbers_from(&[
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 23,
    ]);
    let report = guess_relations(&at_cap, &CancellationToken::new());

    assert_ne!(report, "too many numbers");
    // the search ran all the way to the summary blocks
    assert!(report.contains(DIVIDER));
    assert!(report.contains("1 + 2 == 3"));
}

#[test]
fn test_report_structure() {
    let report = guess_relations(&numbers_from(&[2, 3, 5]), &CancellationToken::new());

    // findings, divider, scalar block, divider, primality block
    assert_eq!(report.matches(DIVIDER).count(), 2);
    assert!(report.contains("2 + 3 == 5"));
    assert!(report.contains("2 is prime (2 bits)."));
    assert!(report.contains("3 is prime (2 bits)."));
    assert!(report.contains("5 is prime (3 bits)."));
}

#[test]
fn test_rsa_triple_is_recognized_and_factored() {
    // toy key: n = 3233 = 53 * 61, e = 17, d = 413
    let report = guess_relations(&numbers_from(&[3233, 17, 413]), &CancellationToken::new());

    assert!(report.contains("rsa magic numbers:"));
    assert!(report.contains("n: 3233"));
    assert!(report.contains("e: 17"));
    assert!(report.contains("d: 413"));
    assert!(report.contains("e*d-1: 7020"));
    assert!(report.contains("3233 = "));
    assert!(report.contains("53"));
    assert!(report.contains("61"));
}

#[test]
fn test_curve_fit_consumes_its_numbers() {
    // (3, 6) lies on y² = x³ + 2x + 3 (mod 97)
    let report = guess_relations(&numbers_from(&[3, 6, 2, 3, 97]), &CancellationToken::new());

    assert!(report.contains("short Weierstrass curve: 0"));
    assert!(report.contains("discriminant= -4400"));
    assert!(report.contains("j-invariant = 55296/275"));
    // every input was consumed by the fit, so the primality summary is
    // empty: no "is prime" line for 2, 3 or 97
    assert!(!report.contains("is prime"));
}

#[test]
fn test_powmod_relation_is_reported() {
    // 2^3 mod 5 == 3
    let report = guess_relations(&numbers_from(&[2, 3, 5, 3]), &CancellationToken::new());

    assert!(report.contains("x^e mod n == y where"));
    assert!(report.contains("pow(2, 3, 5)==3"));
}

#[test]
fn test_precancelled_search_reports_nothing() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let report = guess_relations(&numbers_from(&[3233, 17, 413]), &cancel);
    assert!(report.is_empty());
}

#[test]
fn test_search_is_idempotent() {
    // no RSA triple here, so no randomized probe can vary the output
    let numbers = numbers_from(&[2, 3, 5, 7, 11]);
    let cancel = CancellationToken::new();

    let first = guess_relations(&numbers, &cancel);
    let second = guess_relations(&numbers, &cancel);
    assert_eq!(first, second);
}

#[test]
fn test_config_knobs_are_honored() {
    let config = GuesserConfig {
        wiener_max_iterations: 1,
        factor_recovery_max_retries: 1,
        ..GuesserConfig::default()
    };

    // still a valid search; the caps only bound the attack internals
    let report = guess_relations_with_config(
        &numbers_from(&[2, 3, 5]),
        &CancellationToken::new(),
        &config,
    );
    assert!(report.contains("2 + 3 == 5"));
}

#[test]
fn test_empty_input_produces_empty_findings() {
    let report = guess_relations(&[], &CancellationToken::new());

    // nothing to relate, nothing prime: just the two dividers
    assert_eq!(report, format!("{}\n{}\n", DIVIDER, DIVIDER));
}
