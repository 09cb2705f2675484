use std::fmt::{Display, Formatter};

use crate::units::Quantity;

/// Life-cycle greenhouse-gas mass in **tonnes of CO₂ equivalent**.
pub type TonnesCo2 = Quantity<f64, 0, 0, 1, 0, 0>;

impl Display for TonnesCo2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} tCO₂e", self.0)
    }
}
