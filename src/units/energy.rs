use std::{
    fmt::{Display, Formatter},
    ops::Div,
};

use crate::units::{EnergyIntensity, Quantity, SquareMetres};

/// Annual energy flow in **kilowatt-hours per year**.
pub type AnnualEnergy = Quantity<f64, 1, 0, 0, -1, 0>;

impl Div<SquareMetres> for AnnualEnergy {
    type Output = EnergyIntensity;

    fn div(self, rhs: SquareMetres) -> Self::Output {
        Quantity(self.0 / rhs.0)
    }
}

impl Display for AnnualEnergy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} kWh/a", self.0)
    }
}
