// src/curve/elliptic.rs
//
// Group law for the three curve families the guesser can fit, over the
// integers modulo n. The modulus comes from untrusted input and need not
// be prime: a modular inverse that fails inside `add` degrades to a zero
// sentinel instead of failing the whole operation, so a bogus curve guess
// merely produces points that never match anything.
//
// Addition formulas follow https://hyperelliptic.org/EFD/

use num::{BigInt, Integer, One, Signed, Zero};

use crate::curve::point::EcPoint;
use crate::integer_math::modular;

/// A curve family together with its parameters and modulus.
///
/// A closed enum with one arm per family keeps every operation an
/// exhaustive `match`, so adding a family cannot silently miss a spot.
#[derive(Debug, Clone)]
pub enum EllipticCurve {
    /// y² = x³ + a·x + b (mod n)
    ShortWeierstrass { a: BigInt, b: BigInt, n: BigInt },
    /// a·x² + y² = 1 + d·x²·y² (mod n), neutral point (0, 1)
    TwistedEdwards { a: BigInt, d: BigInt, n: BigInt },
    /// x² + y² = c²·(1 + d·x²·y²) (mod n), neutral point (0, c)
    Edwards { c: BigInt, d: BigInt, n: BigInt },
}

/// Modular inverse with the zero sentinel for non-invertible values.
fn invert_mod(value: &BigInt, n: &BigInt) -> BigInt {
    modular::mod_inverse(value, n).unwrap_or_else(BigInt::zero)
}

impl EllipticCurve {
    pub fn modulus(&self) -> &BigInt {
        match self {
            EllipticCurve::ShortWeierstrass { n, .. } => n,
            EllipticCurve::TwistedEdwards { n, .. } => n,
            EllipticCurve::Edwards { n, .. } => n,
        }
    }

    /// Adds two points under the family's group law.
    pub fn add(&self, p: &EcPoint, q: &EcPoint) -> EcPoint {
        match self {
            EllipticCurve::ShortWeierstrass { a, n, .. } => {
                if p.infinity {
                    return q.clone();
                }
                if q.infinity {
                    return p.clone();
                }

                let slope;
                if p.x.mod_floor(n) != q.x.mod_floor(n) {
                    // chord through two distinct x coordinates
                    let denominator = (&p.x - &q.x).mod_floor(n);
                    slope = ((&p.y - &q.y) * invert_mod(&denominator, n)).mod_floor(n);
                } else if p.y.mod_floor(n) == (-&q.y).mod_floor(n) {
                    // P and -P
                    return self.identity();
                } else {
                    // tangent at a doubled point
                    let denominator = (&p.y + &p.y).mod_floor(n);
                    slope = ((BigInt::from(3) * &p.x * &p.x + a) * invert_mod(&denominator, n))
                        .mod_floor(n);
                }
                let x3 = (&slope * &slope - &p.x - &q.x).mod_floor(n);
                let y3 = (-(&p.y + &slope * (&x3 - &p.x))).mod_floor(n);
                EcPoint::new(x3, y3)
            }
            EllipticCurve::TwistedEdwards { a, d, n } => {
                let t = (d * &p.x * &q.x * &p.y * &q.y).mod_floor(n);
                let d1 = invert_mod(&(BigInt::one() + &t).mod_floor(n), n);
                let d2 = invert_mod(&(BigInt::one() - &t).mod_floor(n), n);

                let x3 = ((&p.x * &q.y + &p.y * &q.x) * d1).mod_floor(n);
                let y3 = ((&p.y * &q.y - a * &p.x * &q.x) * d2).mod_floor(n);

                let neutral = x3.is_zero() && y3.is_one();
                EcPoint {
                    x: x3,
                    y: y3,
                    infinity: neutral,
                }
            }
            EllipticCurve::Edwards { c, d, n } => {
                let t = (d * &p.x * &q.x * &p.y * &q.y).mod_floor(n);
                let d1 = invert_mod(&((BigInt::one() + &t) * c).mod_floor(n), n);
                let d2 = invert_mod(&((BigInt::one() - &t) * c).mod_floor(n), n);

                let x3 = ((&p.x * &q.y + &p.y * &q.x) * d1).mod_floor(n);
                let y3 = ((&p.y * &q.y - &p.x * &q.x) * d2).mod_floor(n);

                let neutral = x3.is_zero() && y3 == c.mod_floor(n);
                EcPoint {
                    x: x3,
                    y: y3,
                    infinity: neutral,
                }
            }
        }
    }

    /// The neutral element of the family's addition group.
    pub fn identity(&self) -> EcPoint {
        match self {
            EllipticCurve::ShortWeierstrass { .. } => EcPoint::at_infinity(),
            EllipticCurve::TwistedEdwards { .. } => {
                EcPoint::infinite(BigInt::zero(), BigInt::one())
            }
            EllipticCurve::Edwards { c, .. } => EcPoint::infinite(BigInt::zero(), c.clone()),
        }
    }

    /// The additive inverse of `p`, so that add(P, invert(P)) == identity().
    pub fn invert(&self, p: &EcPoint) -> EcPoint {
        if p.infinity {
            return p.clone();
        }
        match self {
            EllipticCurve::ShortWeierstrass { n, .. } => {
                EcPoint::new(p.x.clone(), (-&p.y).mod_floor(n))
            }
            EllipticCurve::TwistedEdwards { n, .. } | EllipticCurve::Edwards { n, .. } => {
                EcPoint::new((-&p.x).mod_floor(n), p.y.clone())
            }
        }
    }

    /// Whether `p` satisfies the family's defining equation modulo n.
    pub fn contains(&self, p: &EcPoint) -> bool {
        match self {
            EllipticCurve::ShortWeierstrass { a, b, n } => {
                let lhs = (&p.y * &p.y).mod_floor(n);
                let rhs = (&p.x * &p.x * &p.x + a * &p.x + b).mod_floor(n);
                lhs == rhs
            }
            EllipticCurve::TwistedEdwards { a, d, n } => {
                let lhs = (a * &p.x * &p.x + &p.y * &p.y).mod_floor(n);
                let rhs = (BigInt::one() + d * &p.x * &p.x * &p.y * &p.y).mod_floor(n);
                lhs == rhs
            }
            EllipticCurve::Edwards { c, d, n } => {
                let lhs = (&p.x * &p.x + &p.y * &p.y).mod_floor(n);
                let rhs =
                    (c * c * (BigInt::one() + d * &p.x * &p.x * &p.y * &p.y)).mod_floor(n);
                lhs == rhs
            }
        }
    }

    /// Structural equality: same family and all parameters, modulus
    /// included. This is the sole notion of "the same curve" used when
    /// grouping discovered points for scalar-relation testing.
    pub fn same_parameters(&self, other: &EllipticCurve) -> bool {
        match (self, other) {
            (
                EllipticCurve::ShortWeierstrass { a, b, n },
                EllipticCurve::ShortWeierstrass {
                    a: a2,
                    b: b2,
                    n: n2,
                },
            ) => a == a2 && b == b2 && n == n2,
            (
                EllipticCurve::TwistedEdwards { a, d, n },
                EllipticCurve::TwistedEdwards {
                    a: a2,
                    d: d2,
                    n: n2,
                },
            ) => a == a2 && d == d2 && n == n2,
            (
                EllipticCurve::Edwards { c, d, n },
                EllipticCurve::Edwards {
                    c: c2,
                    d: d2,
                    n: n2,
                },
            ) => c == c2 && d == d2 && n == n2,
            _ => false,
        }
    }

    /// Binary double-and-add, least significant bit first.
    ///
    /// The scalar is itself an unbounded input number, so the walk must be
    /// logarithmic in `m`. A negative scalar multiplies the inverse point.
    pub fn scalar_multiply(&self, m: &BigInt, p: &EcPoint) -> EcPoint {
        if m.is_zero() {
            return self.identity();
        }
        if m.is_one() {
            return p.clone();
        }
        if m.is_negative() {
            return self.scalar_multiply(&-m, &self.invert(p));
        }

        let mut accumulator = self.identity();
        let mut doubled = p.clone();
        let mut remaining = m.clone();
        while remaining.is_positive() {
            if remaining.is_odd() {
                accumulator = self.add(&accumulator, &doubled);
            }
            doubled = self.add(&doubled, &doubled);
            remaining >>= 1;
        }
        accumulator
    }
}
