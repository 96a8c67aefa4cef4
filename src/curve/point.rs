// src/curve/point.rs

use num::BigInt;
use num::Zero;

/// Affine point on an elliptic curve, with an explicit marker for the
/// neutral element.
///
/// The point at infinity carries no meaningful coordinates (the Edwards
/// families store their neutral-point coordinates so the unified addition
/// formula can consume them directly). Two points are equal when both are
/// infinite, or when neither is and the coordinates match.
#[derive(Debug, Clone)]
pub struct EcPoint {
    pub x: BigInt,
    pub y: BigInt,
    pub infinity: bool,
}

impl EcPoint {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        EcPoint {
            x,
            y,
            infinity: false,
        }
    }

    /// Neutral element carrying the coordinates the owning curve family
    /// assigns to it.
    pub fn infinite(x: BigInt, y: BigInt) -> Self {
        EcPoint {
            x,
            y,
            infinity: true,
        }
    }

    pub fn at_infinity() -> Self {
        Self::infinite(BigInt::zero(), BigInt::zero())
    }

    pub fn is_infinity(&self) -> bool {
        self.infinity
    }
}

impl PartialEq for EcPoint {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity || other.infinity {
            return self.infinity && other.infinity;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for EcPoint {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_points_compare_equal() {
        let a = EcPoint::at_infinity();
        let b = EcPoint::infinite(BigInt::from(0), BigInt::from(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_finite_point_never_equals_infinity() {
        let finite = EcPoint::new(BigInt::from(0), BigInt::from(0));
        assert_ne!(finite, EcPoint::at_infinity());
    }

    #[test]
    fn test_coordinate_equality() {
        let a = EcPoint::new(BigInt::from(3), BigInt::from(6));
        let b = EcPoint::new(BigInt::from(3), BigInt::from(6));
        let c = EcPoint::new(BigInt::from(3), BigInt::from(7));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
