use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Dimensioned scalar: energy (kWh), length (m), mass (t CO₂e), time (a), cost (¥10k).
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<
    T,
    const ENERGY: isize,
    const LENGTH: isize,
    const MASS: isize,
    const TIME: isize,
    const COST: isize,
>(pub T);

impl<
    T,
    const ENERGY: isize,
    const LENGTH: isize,
    const MASS: isize,
    const TIME: isize,
    const COST: isize,
> Quantity<T, ENERGY, LENGTH, MASS, TIME, COST>
where
    Self: PartialOrd,
{
    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }

    pub fn clamp(mut self, min: Self, max: Self) -> Self {
        if self < min {
            self = min;
        }
        if self > max {
            self = max;
        }
        self
    }
}

impl<
    const ENERGY: isize,
    const LENGTH: isize,
    const MASS: isize,
    const TIME: isize,
    const COST: isize,
> Quantity<f64, ENERGY, LENGTH, MASS, TIME, COST>
{
    pub const ZERO: Self = Self(0.0);
}

impl<
    T: Mul<T>,
    const ENERGY: isize,
    const LENGTH: isize,
    const MASS: isize,
    const TIME: isize,
    const COST: isize,
> Mul<T> for Quantity<T, ENERGY, LENGTH, MASS, TIME, COST>
{
    type Output = Quantity<T::Output, ENERGY, LENGTH, MASS, TIME, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<
    T: Div<T>,
    const ENERGY: isize,
    const LENGTH: isize,
    const MASS: isize,
    const TIME: isize,
    const COST: isize,
> Div<T> for Quantity<T, ENERGY, LENGTH, MASS, TIME, COST>
{
    type Output = Quantity<T::Output, ENERGY, LENGTH, MASS, TIME, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub type Bare<T> = Quantity<T, 0, 0, 0, 0, 0>;

    #[test]
    fn test_min() {
        assert_eq!(Bare::from(1).min(Bare::from(2)), Bare::from(1));
        assert_eq!(Bare::from(2).min(Bare::from(1)), Bare::from(1));
    }

    #[test]
    fn test_max() {
        assert_eq!(Bare::from(1).max(Bare::from(2)), Bare::from(2));
        assert_eq!(Bare::from(2).max(Bare::from(1)), Bare::from(2));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Bare::from(1).clamp(Bare::from(2), Bare::from(3)), Bare::from(2));
        assert_eq!(Bare::from(4).clamp(Bare::from(2), Bare::from(3)), Bare::from(3));
        assert_eq!(Bare::from(2).clamp(Bare::from(1), Bare::from(3)), Bare::from(2));
    }
}
