//! Proximity graphs over samples and the rules used to build them.

mod _graph;
pub mod connectivity;

pub use _graph::{Edge, EdgeKind, ProximityGraph};
pub use connectivity::{Connectivity, RuleParams};
