pub mod generators;
pub mod network;
pub mod traits;

pub use network::{Point, RoadNetwork};
pub use traits::Graph;
