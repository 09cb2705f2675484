mod area;
mod carbon;
mod currency;
mod energy;
mod energy_intensity;
mod length;
mod quantity;
mod time;

pub use self::{
    area::SquareMetres,
    carbon::TonnesCo2,
    currency::{AnnualCost, Cost},
    energy::AnnualEnergy,
    energy_intensity::EnergyIntensity,
    length::Metres,
    quantity::Quantity,
    time::Years,
};
