pub mod traits;
pub mod pairs;
pub mod weighted;
pub mod fixture;
pub mod generators;

pub use traits::{Graph, Vertex};
pub use weighted::WeightedGraph;
