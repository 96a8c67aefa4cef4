// src/relations/registry.rs

use num::{BigInt, Zero};

use crate::core::report::{ReportSink, DIVIDER};
use crate::curve::elliptic::EllipticCurve;
use crate::curve::point::EcPoint;
use crate::integer_math::primality::Primality;

/// A discovered (curve, point) pair. The id is only used to label the
/// pair in the report.
pub struct CurveInfo {
    pub curve: EllipticCurve,
    pub point: EcPoint,
    pub id: usize,
}

/// Arena of every curve discovered during one search invocation.
///
/// The registry owns its curves outright and ids are assigned
/// monotonically from zero per invocation, so nothing persists from one
/// search to the next. Entries registered on curves with equal parameters
/// form one algebraic group for the post-enumeration scalar scan.
pub struct CurveRegistry {
    entries: Vec<CurveInfo>,
}

/// Entries the registry is sized for up front; the input cap keeps the
/// real count far below this.
const PRESIZED_ENTRIES: usize = 100;

impl CurveRegistry {
    pub fn new() -> Self {
        CurveRegistry {
            entries: Vec::with_capacity(PRESIZED_ENTRIES),
        }
    }

    pub fn register(&mut self, curve: EllipticCurve, point: EcPoint) -> usize {
        let id = self.entries.len();
        self.entries.push(CurveInfo { curve, point, id });
        id
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CurveInfo] {
        &self.entries
    }

    /// Post-enumeration scan: scalar relations between points sharing a
    /// curve, order hints against the neutral element, and the primality
    /// summary of every number no fit consumed.
    pub fn scan(&self, numbers: &[BigInt], used: &[bool], report: &mut ReportSink) {
        report.line(DIVIDER);

        for source in &self.entries {
            for target in &self.entries {
                if source.id == target.id {
                    continue;
                }
                if !source.curve.same_parameters(&target.curve) {
                    continue;
                }
                for (index, scalar) in numbers.iter().enumerate() {
                    if used[index] {
                        continue;
                    }
                    let multiple = source.curve.scalar_multiply(scalar, &source.point);
                    if multiple == target.point {
                        report.line(format!("{} * [{}] == [{}]", scalar, source.id, target.id));
                    }
                }
            }

            for (index, scalar) in numbers.iter().enumerate() {
                if used[index] || scalar.is_zero() {
                    continue;
                }
                let multiple = source.curve.scalar_multiply(scalar, &source.point);
                if multiple.is_infinity() {
                    report.line(format!("{} * [{}] == [inf]", scalar, source.id));
                }
            }
        }

        report.line(DIVIDER);

        for (index, number) in numbers.iter().enumerate() {
            if used[index] {
                continue;
            }
            if Primality::is_probable_prime(number) {
                report.line(format!("{} is prime ({} bits).", number, number.bits()));
            }
        }
    }
}

impl Default for CurveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
