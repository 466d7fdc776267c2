pub mod collision;

pub use collision::{CollisionResolver, Placement};
