use std::fmt::{Display, Formatter};

use crate::units::Quantity;

pub type Years = Quantity<f64, 0, 0, 0, 1, 0>;

impl Display for Years {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} a", self.0)
    }
}
