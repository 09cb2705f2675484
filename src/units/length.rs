use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::units::{Quantity, SquareMetres};

pub type Metres = Quantity<f64, 0, 1, 0, 0, 0>;

impl Mul<Metres> for Metres {
    type Output = SquareMetres;

    fn mul(self, rhs: Metres) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}

impl Display for Metres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} m", self.0)
    }
}
