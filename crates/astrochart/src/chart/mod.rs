pub mod controller;
pub mod data;
pub mod scene;

pub use controller::ChartController;
pub use data::{ChartData, Planet};
pub use scene::{AspectLine, ChartScene, CuspRay, PlacedPoint};
