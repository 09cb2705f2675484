use std::fmt::{Display, Formatter};

use crate::units::Quantity;

pub type SquareMetres = Quantity<f64, 0, 2, 0, 0, 0>;

impl Display for SquareMetres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} m²", self.0)
    }
}
