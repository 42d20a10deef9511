use std::collections::{HashMap, HashSet};

use super::layout::{spring_layout, LayoutParams};
use super::{CollaborationGraph, GraphEdge, GraphNode, Role};
use crate::data::model::{ListColumn, MovieTable};
use crate::data::query::{appearance_counts, pair_counts};

/// Build the collaboration graph with the default layout parameters.
pub fn build_graph(
    table: &MovieTable,
    top_n_directors: usize,
    top_n_actors: usize,
) -> CollaborationGraph {
    build_graph_with(table, top_n_directors, top_n_actors, &LayoutParams::default())
}

/// Build the graph of the `top_n_directors` most frequent directors and the
/// `top_n_actors` most frequent actors, with one weighted edge per pair
/// that shares at least one movie.
///
/// Selected people without any shared movie are still nodes, just without
/// edges. An empty selection gives an empty graph.
pub fn build_graph_with(
    table: &MovieTable,
    top_n_directors: usize,
    top_n_actors: usize,
    layout: &LayoutParams,
) -> CollaborationGraph {
    let directors = top_names(table, ListColumn::Director, top_n_directors);
    let actors = top_names(table, ListColumn::Cast, top_n_actors);

    let director_set: HashSet<&str> = directors.iter().map(String::as_str).collect();
    let actor_set: HashSet<&str> = actors.iter().map(String::as_str).collect();
    let pairs = pair_counts(
        table,
        |d| director_set.contains(d),
        |a| actor_set.contains(a),
    );

    let mut nodes: Vec<GraphNode> = Vec::with_capacity(directors.len() + actors.len());
    let mut index: HashMap<(Role, &str), usize> = HashMap::new();
    for (role, names) in [(Role::Director, &directors), (Role::Actor, &actors)] {
        for name in names {
            index.insert((role, name.as_str()), nodes.len());
            nodes.push(GraphNode {
                name: name.clone(),
                role,
                position: [0.0, 0.0],
                strength: 0,
            });
        }
    }

    let mut edges = Vec::with_capacity(pairs.len());
    for ((director, actor), weight) in pairs.entries() {
        let (Some(&source), Some(&target)) = (
            index.get(&(Role::Director, director.as_str())),
            index.get(&(Role::Actor, actor.as_str())),
        ) else {
            continue;
        };
        edges.push(GraphEdge {
            source,
            target,
            weight: *weight,
        });
    }

    for edge in &edges {
        nodes[edge.source].strength += edge.weight;
        nodes[edge.target].strength += edge.weight;
    }

    let positions = spring_layout(nodes.len(), &edges, layout);
    for (node, position) in nodes.iter_mut().zip(positions) {
        node.position = position;
    }

    log::debug!(
        "Collaboration graph: {} directors, {} actors, {} edges",
        directors.len(),
        actors.len(),
        edges.len()
    );

    CollaborationGraph { nodes, edges }
}

/// The `n` most frequent names of a list column, ties in first-seen order.
fn top_names(table: &MovieTable, column: ListColumn, n: usize) -> Vec<String> {
    appearance_counts(table, column)
        .top(n)
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}
