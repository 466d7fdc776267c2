pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, AspectCalculator};
pub use types::{Aspect, AspectDefinition, AspectMatch, AspectTable, PlanetRef};
