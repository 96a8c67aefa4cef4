// src/relations/testers.rs
//
// The fixed table of elementary relation predicates the enumerator throws
// at every candidate tuple. Each predicate guards its own degenerate
// inputs (division or modulus by 0 or 1, trivial equalities) so a noisy
// number list does not flood the report with tautologies.

use num::{BigInt, One, Signed, Zero};

use crate::integer_math::modular;

/// 3-ary predicate together with the operator symbol used to report it.
pub struct TernaryTester {
    pub test: fn(&BigInt, &BigInt, &BigInt) -> bool,
    pub symbol: &'static str,
}

/// 4-ary predicate together with its report renderer.
pub struct QuaternaryTester {
    pub test: fn(&BigInt, &BigInt, &BigInt, &BigInt) -> bool,
    pub render: fn(&BigInt, &BigInt, &BigInt, &BigInt) -> String,
}

fn sum_matches(a: &BigInt, b: &BigInt, c: &BigInt) -> bool {
    a + b == *c
}

fn difference_matches(a: &BigInt, b: &BigInt, c: &BigInt) -> bool {
    a - b == *c
}

fn product_matches(a: &BigInt, b: &BigInt, c: &BigInt) -> bool {
    a * b == *c
}

fn quotient_matches(a: &BigInt, b: &BigInt, c: &BigInt) -> bool {
    if b.is_zero() || b.is_one() || c.is_one() {
        return false;
    }
    if a < b {
        return false;
    }
    a / b == *c
}

fn remainder_matches(a: &BigInt, b: &BigInt, c: &BigInt) -> bool {
    if b.is_zero() || b.is_one() {
        return false;
    }
    if a == c {
        return false;
    }
    a % b == *c
}

fn inverse_matches(a: &BigInt, b: &BigInt, c: &BigInt) -> bool {
    if b < &BigInt::from(2) {
        return false;
    }
    if a.is_zero() || a.is_one() {
        return false;
    }
    match modular::mod_inverse(a, b) {
        Some(inverse) => inverse == *c,
        None => false,
    }
}

pub const TERNARY_TESTERS: &[TernaryTester] = &[
    TernaryTester {
        test: sum_matches,
        symbol: "+",
    },
    TernaryTester {
        test: difference_matches,
        symbol: "-",
    },
    TernaryTester {
        test: product_matches,
        symbol: "*",
    },
    TernaryTester {
        test: quotient_matches,
        symbol: "/",
    },
    TernaryTester {
        test: remainder_matches,
        symbol: "%",
    },
    TernaryTester {
        test: inverse_matches,
        symbol: "^-1 mod",
    },
];

fn sum_mod_matches(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> bool {
    if c.is_zero() || c.is_one() {
        return false;
    }
    (a + b) % c == *d
}

fn difference_mod_matches(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> bool {
    if c.is_zero() || c.is_one() {
        return false;
    }
    (a - b) % c == *d
}

fn quotient_mod_matches(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> bool {
    if c.is_zero() || c.is_one() || b.is_zero() {
        return false;
    }
    (a / b) % c == *d
}

fn product_mod_matches(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> bool {
    if c.is_zero() || c.is_one() {
        return false;
    }
    (a * b) % c == *d
}

fn power_mod_matches(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> bool {
    if b.is_zero() || b.is_negative() {
        return false;
    }
    if c < &BigInt::from(2) {
        return false;
    }
    if a.is_zero() {
        return false;
    }
    a.modpow(b, c) == *d
}

fn render_sum_mod(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> String {
    format!("({}+{}) mod {} == {}", a, b, c, d)
}

fn render_difference_mod(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> String {
    format!("({}-{}) mod {} == {}", a, b, c, d)
}

fn render_quotient_mod(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> String {
    format!("({}/{}) mod {} == {}", a, b, c, d)
}

fn render_product_mod(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> String {
    format!("({}*{}) mod {} == {}", a, b, c, d)
}

fn render_power_mod(a: &BigInt, b: &BigInt, c: &BigInt, d: &BigInt) -> String {
    format!("pow({}, {}, {})=={}", a, b, c, d)
}

pub const QUATERNARY_TESTERS: &[QuaternaryTester] = &[
    QuaternaryTester {
        test: sum_mod_matches,
        render: render_sum_mod,
    },
    QuaternaryTester {
        test: difference_mod_matches,
        render: render_difference_mod,
    },
    QuaternaryTester {
        test: quotient_mod_matches,
        render: render_quotient_mod,
    },
    QuaternaryTester {
        test: product_mod_matches,
        render: render_product_mod,
    },
    QuaternaryTester {
        test: power_mod_matches,
        render: render_power_mod,
    },
];

/// Guarded modular-exponentiation match, the gate for the Wiener probes.
///
/// Stricter than the table predicate: the base must lie within the
/// modulus and trivial bases and fixed points are rejected, since those
/// would fire on almost any tuple.
pub fn powmod_test(x: &BigInt, e: &BigInt, n: &BigInt, y: &BigInt) -> bool {
    if n <= &BigInt::one() {
        return false;
    }
    if e.is_zero() || e.is_negative() {
        return false;
    }
    if x > n || y > n {
        return false;
    }
    if x == &BigInt::from(-1) || x.is_one() {
        return false;
    }
    if x == y {
        return false;
    }
    x.modpow(e, n) == *y
}
