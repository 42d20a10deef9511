//! Director/actor collaboration network.
//!
//! ```text
//!   MovieTable ──▶ builder (top-N selection, pair counts) ──▶ layout ──▶ CollaborationGraph
//! ```

pub mod builder;
pub mod layout;

use serde::Serialize;

pub use builder::{build_graph, build_graph_with};
pub use layout::{spring_layout, LayoutParams};

/// Which side of the bipartite graph a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Director,
    Actor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub name: String,
    pub role: Role,
    /// Layout coordinates in `[-1, 1]²`.
    pub position: [f64; 2],
    /// Sum of the weights of the node's edges.
    pub strength: u32,
}

/// Undirected edge between a director node and an actor node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    /// Index into [`CollaborationGraph::nodes`] of the director.
    pub source: usize,
    /// Index into [`CollaborationGraph::nodes`] of the actor.
    pub target: usize,
    /// Number of movies the two made together.
    pub weight: u32,
}

/// Nodes are identified by `(role, name)`: someone who both directs and
/// acts within the selection appears once per role.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CollaborationGraph {
    /// Directors first, then actors, each in ranking order.
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl CollaborationGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_index(&self, role: Role, name: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.role == role && n.name == name)
    }

    /// Weight of the edge between `director` and `actor`, if any.
    pub fn edge_weight(&self, director: &str, actor: &str) -> Option<u32> {
        let source = self.node_index(Role::Director, director)?;
        let target = self.node_index(Role::Actor, actor)?;
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
            .map(|e| e.weight)
    }

    pub fn nodes_with_role(&self, role: Role) -> impl Iterator<Item = &GraphNode> + '_ {
        self.nodes.iter().filter(move |n| n.role == role)
    }

    /// Edge endpoints as coordinate pairs, ready for drawing.
    pub fn segments(&self) -> impl Iterator<Item = ([f64; 2], [f64; 2], u32)> + '_ {
        self.edges.iter().map(|e| {
            (
                self.nodes[e.source].position,
                self.nodes[e.target].position,
                e.weight,
            )
        })
    }
}
