pub mod follow_graph;

pub use follow_graph::{FollowGraph, FollowGraphError};
