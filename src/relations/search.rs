// src/relations/search.rs
//
// The tuple enumerator. Three index-distinct enumeration sections (3-, 4-
// and 5-tuples) share nothing but the input slice, so they run as
// independent tasks; each writes a private report sink and the sinks are
// merged in section order after the join, which keeps the output
// deterministic no matter how the tasks are scheduled. Only the 5-tuple
// section writes the used-index flags, and the registry scan that reads
// them runs strictly after the join.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::{debug, error, info};
use num::BigInt;

use crate::attacks::rsa::{
    rsa_decryption_consistency, rsa_factor_recovery, rsa_key_consistency, rsa_key_info,
};
use crate::attacks::wiener::{wiener_bounded_search, wiener_continued_fraction};
use crate::config::GuesserConfig;
use crate::core::cancellation_token::CancellationToken;
use crate::core::report::ReportSink;
use crate::relations::curve_fit::{
    edwards_report, fit_edwards, fit_short_weierstrass, fit_twisted_edwards,
    short_weierstrass_report, twisted_edwards_report,
};
use crate::relations::registry::CurveRegistry;
use crate::relations::testers::{powmod_test, QUATERNARY_TESTERS, TERNARY_TESTERS};

/// Hard cap on the input size; anything larger is rejected outright. The
/// 5-tuple section is O(N^5), so this bound is what keeps the worst case
/// below ~1.9M tuple evaluations.
pub const MAX_NUMBERS: usize = 20;

const TOO_MANY_NUMBERS: &str = "too many numbers";

/// Searches the input numbers for algebraic, modular, RSA and
/// elliptic-curve relations and returns the findings as a newline
/// delimited report.
///
/// # Examples
/// ```
/// use num::BigInt;
/// use relation_guesser::core::cancellation_token::CancellationToken;
/// use relation_guesser::guess_relations;
///
/// let numbers: Vec<BigInt> = [2, 3, 5].iter().map(|&n| BigInt::from(n)).collect();
/// let report = guess_relations(&numbers, &CancellationToken::new());
/// assert!(report.contains("2 + 3 == 5"));
/// ```
pub fn guess_relations(numbers: &[BigInt], cancel: &CancellationToken) -> String {
    guess_relations_with_config(numbers, cancel, &GuesserConfig::default())
}

/// Same as [`guess_relations`], with explicit tuning knobs.
pub fn guess_relations_with_config(
    numbers: &[BigInt],
    cancel: &CancellationToken,
    config: &GuesserConfig,
) -> String {
    if numbers.len() > MAX_NUMBERS {
        return TOO_MANY_NUMBERS.to_string();
    }

    // The bignum layer is the only thing that can blow up mid-search;
    // contain it here so the caller always gets a String back.
    match catch_unwind(AssertUnwindSafe(|| run_search(numbers, cancel, config))) {
        Ok(report) => report,
        Err(_) => {
            error!("relation search aborted by an internal panic; findings were lost");
            String::new()
        }
    }
}

fn run_search(numbers: &[BigInt], cancel: &CancellationToken, config: &GuesserConfig) -> String {
    info!("guessing relations between {} numbers", numbers.len());

    let (triples, (quadruples, quintuples)) = rayon::join(
        || search_triples(numbers, cancel, config),
        || {
            rayon::join(
                || search_quadruples(numbers, cancel, config),
                || search_quintuples(numbers, cancel),
            )
        },
    );

    let mut report = triples;
    report.merge(quadruples);
    report.merge(quintuples.report);

    if cancel.is_cancellation_requested() {
        debug!("search cancelled; skipping the registry scan");
        return report.into_string();
    }

    quintuples
        .registry
        .scan(numbers, &quintuples.used, &mut report);
    report.into_string()
}

/// Ordered triples (a, b, c): elementary 3-ary relations plus the RSA
/// triple probes.
fn search_triples(
    numbers: &[BigInt],
    cancel: &CancellationToken,
    config: &GuesserConfig,
) -> ReportSink {
    let mut report = ReportSink::new();
    if numbers.len() < 3 {
        return report;
    }

    for j in 0..numbers.len() {
        if cancel.is_cancellation_requested() {
            debug!("triple section cancelled at outer index {}", j);
            return report;
        }
        for k in 0..numbers.len() {
            if k == j {
                continue;
            }
            for l in 0..numbers.len() {
                if l == j || l == k {
                    continue;
                }
                let (a, b, c) = (&numbers[j], &numbers[k], &numbers[l]);

                rsa_decryption_consistency(a, b, c, &mut report);

                if rsa_key_consistency(a, b, c) {
                    rsa_key_info(a, b, c, config.wiener_max_iterations, &mut report);
                    rsa_factor_recovery(
                        a,
                        b,
                        c,
                        config.factor_recovery_max_retries,
                        &mut report,
                    );
                }

                for tester in TERNARY_TESTERS {
                    if (tester.test)(a, b, c) {
                        report.line(format!("{} {} {} == {}", a, tester.symbol, b, c));
                    }
                }
            }
        }
    }
    report
}

/// Ordered 4-tuples (x, e, n, y): elementary modular relations plus the
/// powmod gate that unleashes both Wiener formulations on (n, e).
fn search_quadruples(
    numbers: &[BigInt],
    cancel: &CancellationToken,
    config: &GuesserConfig,
) -> ReportSink {
    let mut report = ReportSink::new();
    if numbers.len() < 4 {
        return report;
    }

    for j in 0..numbers.len() {
        if cancel.is_cancellation_requested() {
            debug!("quadruple section cancelled at outer index {}", j);
            return report;
        }
        for k in 0..numbers.len() {
            if k == j {
                continue;
            }
            for l in 0..numbers.len() {
                if l == j || l == k {
                    continue;
                }
                for m in 0..numbers.len() {
                    if m == j || m == k || m == l {
                        continue;
                    }
                    let (x, e, n, y) = (&numbers[j], &numbers[k], &numbers[l], &numbers[m]);

                    for tester in QUATERNARY_TESTERS {
                        if (tester.test)(x, e, n, y) {
                            report.line((tester.render)(x, e, n, y));
                        }
                    }

                    if powmod_test(x, e, n, y) {
                        report.line("x^e mod n == y where");
                        report.line(format!("x: {}", x));
                        report.line(format!("e: {}", e));
                        report.line(format!("n: {}", n));
                        report.line(format!("y: {}", y));
                        wiener_continued_fraction(
                            n,
                            e,
                            config.wiener_max_iterations,
                            &mut report,
                        );
                        wiener_bounded_search(n, e, &mut report);
                    }
                }
            }
        }
    }
    report
}

/// Result of the 5-tuple section: its findings, the curves it registered
/// and the input indices those curves consumed.
struct QuintupleOutcome {
    report: ReportSink,
    registry: CurveRegistry,
    used: Vec<bool>,
}

/// Ordered 5-tuples (x, y, p1, p2, n): curve-equation fits. A successful
/// fit consumes all five indices, and consumed indices are skipped for
/// the rest of the section.
fn search_quintuples(numbers: &[BigInt], cancel: &CancellationToken) -> QuintupleOutcome {
    let mut report = ReportSink::new();
    let mut registry = CurveRegistry::new();
    let mut used = vec![false; numbers.len()];

    if numbers.len() < 5 {
        return QuintupleOutcome {
            report,
            registry,
            used,
        };
    }

    for j in 0..numbers.len() {
        if cancel.is_cancellation_requested() {
            debug!("quintuple section cancelled at outer index {}", j);
            return QuintupleOutcome {
                report,
                registry,
                used,
            };
        }
        if used[j] {
            continue;
        }
        for k in 0..numbers.len() {
            if k == j || used[k] {
                continue;
            }
            for l in 0..numbers.len() {
                if l == j || l == k || used[l] {
                    continue;
                }
                for m in 0..numbers.len() {
                    if m == j || m == k || m == l || used[m] {
                        continue;
                    }
                    for i in 0..numbers.len() {
                        if i == j || i == k || i == l || i == m {
                            continue;
                        }
                        // a fit deeper in this walk may have consumed an
                        // outer index since its loop head was checked
                        if used[j] || used[k] || used[l] || used[m] || used[i] {
                            continue;
                        }

                        let (x, y) = (&numbers[j], &numbers[k]);
                        let (pa, pb, modn) = (&numbers[l], &numbers[m], &numbers[i]);

                        if let Some((curve, point)) = fit_short_weierstrass(x, y, pa, pb, modn) {
                            mark_used(&mut used, [j, k, l, m, i]);
                            let id = registry.register(curve, point);
                            short_weierstrass_report(id, x, y, pa, pb, modn, &mut report);
                        }
                        if let Some((curve, point)) = fit_edwards(x, y, pa, pb, modn) {
                            mark_used(&mut used, [j, k, l, m, i]);
                            let id = registry.register(curve, point);
                            edwards_report(id, x, y, pa, pb, modn, &mut report);
                        }
                        if let Some((curve, point)) = fit_twisted_edwards(x, y, pa, pb, modn) {
                            mark_used(&mut used, [j, k, l, m, i]);
                            let id = registry.register(curve, point);
                            twisted_edwards_report(id, x, y, pa, pb, modn, &mut report);
                        }
                    }
                }
            }
        }
    }

    QuintupleOutcome {
        report,
        registry,
        used,
    }
}

fn mark_used(used: &mut [bool], indices: [usize; 5]) {
    for index in indices {
        used[index] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers_from(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_elementary_relations_are_found() {
        let numbers = numbers_from(&[2, 3, 5]);
        let report = guess_relations(&numbers, &CancellationToken::new());

        assert!(report.contains("2 + 3 == 5"));
        assert!(report.contains("5 - 3 == 2"));
    }

    #[test]
    fn test_quintuple_section_registers_curve() {
        // (3, 6) lies on y² = x³ + 2x + 3 (mod 97)
        let numbers = numbers_from(&[3, 6, 2, 3, 97]);
        let report = guess_relations(&numbers, &CancellationToken::new());

        assert!(report.contains("short Weierstrass curve: 0"));
        assert!(report.contains("discriminant="));
    }

    #[test]
    fn test_cancelled_search_returns_no_findings() {
        let numbers = numbers_from(&[2, 3, 5]);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let report = guess_relations(&numbers, &cancel);
        assert!(report.is_empty());
    }
}
