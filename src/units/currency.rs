use std::{
    fmt::{Display, Formatter},
    ops::Div,
};

use crate::units::{Quantity, Years};

/// Construction budget in **ten-thousand yuan** (万元), the customary unit
/// for rural construction quotes.
pub type Cost = Quantity<f64, 0, 0, 0, 0, 1>;

/// Yearly cash flow in **yuan per year**.
pub type AnnualCost = Quantity<f64, 0, 0, 0, -1, 1>;

impl Div<AnnualCost> for Cost {
    type Output = Years;

    fn div(self, rhs: AnnualCost) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} 万元", self.0)
    }
}

impl Display for AnnualCost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} 元/a", self.0)
    }
}
