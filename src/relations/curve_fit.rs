// src/relations/curve_fit.rs
//
// Curve-equation fits over an ordered 5-tuple (x, y, param, param, n),
// plus the report blocks written when a fit succeeds. The guards reject
// moduli below 5 and coordinates or parameters outside the modulus, which
// keeps the noise from tuples that could "fit" any equation mod 1 or 2.

use num::{BigInt, Zero};

use crate::core::report::ReportSink;
use crate::curve::elliptic::EllipticCurve;
use crate::curve::point::EcPoint;
use crate::integer_math::gcd::GCD;

/// Smallest modulus a fit will consider.
const MIN_MODULUS: i64 = 5;

/// Fits y² = x³ + a·x + b (mod n).
pub fn fit_short_weierstrass(
    x: &BigInt,
    y: &BigInt,
    a: &BigInt,
    b: &BigInt,
    n: &BigInt,
) -> Option<(EllipticCurve, EcPoint)> {
    if n < &BigInt::from(MIN_MODULUS) {
        return None;
    }
    if n < a || n < b || n < x || n < y {
        return None;
    }

    let curve = EllipticCurve::ShortWeierstrass {
        a: a.clone(),
        b: b.clone(),
        n: n.clone(),
    };
    let point = EcPoint::new(x.clone(), y.clone());
    if curve.contains(&point) {
        Some((curve, point))
    } else {
        None
    }
}

/// Fits x² + y² = c²·(1 + d·x²·y²) (mod n).
pub fn fit_edwards(
    x: &BigInt,
    y: &BigInt,
    c: &BigInt,
    d: &BigInt,
    n: &BigInt,
) -> Option<(EllipticCurve, EcPoint)> {
    if n < &BigInt::from(MIN_MODULUS) {
        return None;
    }
    let minus_one = BigInt::from(-1);
    if x == &minus_one || y == &minus_one {
        return None;
    }
    if x >= n || y >= n {
        return None;
    }

    let curve = EllipticCurve::Edwards {
        c: c.clone(),
        d: d.clone(),
        n: n.clone(),
    };
    let point = EcPoint::new(x.clone(), y.clone());
    if curve.contains(&point) {
        Some((curve, point))
    } else {
        None
    }
}

/// Fits a·x² + y² = 1 + d·x²·y² (mod n).
pub fn fit_twisted_edwards(
    x: &BigInt,
    y: &BigInt,
    a: &BigInt,
    d: &BigInt,
    n: &BigInt,
) -> Option<(EllipticCurve, EcPoint)> {
    if n < &BigInt::from(MIN_MODULUS) {
        return None;
    }
    let one = BigInt::from(1);
    if x == &one || y == &one {
        return None;
    }
    if x >= n || y >= n {
        return None;
    }

    let curve = EllipticCurve::TwistedEdwards {
        a: a.clone(),
        d: d.clone(),
        n: n.clone(),
    };
    let point = EcPoint::new(x.clone(), y.clone());
    if curve.contains(&point) {
        Some((curve, point))
    } else {
        None
    }
}

/// Report block for a Short-Weierstrass hit: the parameters, the curve
/// discriminant, and the j-invariant as a reduced rational.
pub fn short_weierstrass_report(
    id: usize,
    x: &BigInt,
    y: &BigInt,
    a: &BigInt,
    b: &BigInt,
    n: &BigInt,
    report: &mut ReportSink,
) {
    report.line(format!("short Weierstrass curve: {}", id));
    report.line(format!("x: {}", x));
    report.line(format!("y: {}", y));
    report.line(format!("a: {}", a));
    report.line(format!("b: {}", b));
    report.line(format!("p: {}", n));
    report.blank();

    let discriminant =
        BigInt::from(-16) * (BigInt::from(4) * a * a * a + BigInt::from(27) * b * b);
    report.line(format!("discriminant= {}", discriminant));

    if discriminant.is_zero() {
        report.line("curve is singular");
        return;
    }

    let four_a = BigInt::from(4) * a;
    let j = BigInt::from(-1728) * &four_a * &four_a * &four_a;
    let (j, denominator) = GCD::reduce_ratio(j, discriminant);
    if denominator > BigInt::from(1) {
        report.line(format!("j-invariant = {}/{}", j, denominator));
    } else {
        report.line(format!("j-invariant = {}", j));
    }
    if j.is_zero() || j == BigInt::from(1728) {
        report.line("Curve is anomalous.");
    }
}

/// Report block for an Edwards hit.
pub fn edwards_report(
    id: usize,
    x: &BigInt,
    y: &BigInt,
    c: &BigInt,
    d: &BigInt,
    n: &BigInt,
    report: &mut ReportSink,
) {
    report.line(format!("Edwards curve: {}", id));
    report.line("x^2 + y^2 = c^2*(1 + d*x^2*y^2)");
    report.line(format!("x: {}", x));
    report.line(format!("y: {}", y));
    report.line(format!("c: {}", c));
    report.line(format!("d: {}", d));
    report.line(format!("p: {}", n));
    report.blank();
}

/// Report block for a twisted-Edwards hit.
pub fn twisted_edwards_report(
    id: usize,
    x: &BigInt,
    y: &BigInt,
    a: &BigInt,
    d: &BigInt,
    n: &BigInt,
    report: &mut ReportSink,
) {
    report.line(format!("twisted Edwards curve: {}", id));
    report.line("a*x^2 + y^2 = 1 + d*x^2*y^2");
    report.line(format!("x: {}", x));
    report.line(format!("y: {}", y));
    report.line(format!("a: {}", a));
    report.line(format!("d: {}", d));
    report.line(format!("p: {}", n));
    report.blank();
}
