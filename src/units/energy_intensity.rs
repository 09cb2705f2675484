use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::units::{AnnualEnergy, Quantity, SquareMetres};

/// [Energy use intensity][1] measured in **kilowatt-hours per square metre per year**.
///
/// [1]: https://en.wikipedia.org/wiki/Energy_intensity
pub type EnergyIntensity = Quantity<f64, 1, -2, 0, -1, 0>;

impl Mul<SquareMetres> for EnergyIntensity {
    type Output = AnnualEnergy;

    fn mul(self, rhs: SquareMetres) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Display for EnergyIntensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} kWh/m²·a", self.0)
    }
}
