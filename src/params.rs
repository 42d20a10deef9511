//! Tunable parameters and their allowed ranges.
//!
//! The viewer owns one [`ExplorerParams`] and passes the relevant values
//! into each query; nothing in the library reads hidden state.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::graph::layout::MAX_ITERATIONS;
use crate::graph::LayoutParams;

/// Bounds and default for a top-N slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopNRange {
    pub min: usize,
    pub max: usize,
    pub default: usize,
}

impl TopNRange {
    pub fn range(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn clamp(&self, n: usize) -> usize {
        n.clamp(self.min, self.max)
    }
}

/// Actor rankings (duration, count, gross).
pub const ACTOR_TOP_N: TopNRange = TopNRange {
    min: 5,
    max: 30,
    default: 10,
};

/// Directors kept in the collaboration graph.
pub const GRAPH_DIRECTORS: TopNRange = TopNRange {
    min: 3,
    max: 15,
    default: 5,
};

/// Actors kept in the collaboration graph.
pub const GRAPH_ACTORS: TopNRange = TopNRange {
    min: 10,
    max: 50,
    default: 20,
};

pub const DEFAULT_DIRECTOR: &str = "Steven Spielberg";

/// Every value the user can adjust, one field per slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerParams {
    pub director: String,
    pub top_by_duration: usize,
    pub top_by_count: usize,
    pub top_by_gross: usize,
    pub graph_directors: usize,
    pub graph_actors: usize,
    pub layout: LayoutParams,
}

impl Default for ExplorerParams {
    fn default() -> Self {
        Self {
            director: DEFAULT_DIRECTOR.to_string(),
            top_by_duration: ACTOR_TOP_N.default,
            top_by_count: ACTOR_TOP_N.default,
            top_by_gross: ACTOR_TOP_N.default,
            graph_directors: GRAPH_DIRECTORS.default,
            graph_actors: GRAPH_ACTORS.default,
            layout: LayoutParams::default(),
        }
    }
}

impl ExplorerParams {
    /// Pull every top-N value and the layout iteration count back into
    /// their allowed ranges.
    pub fn clamped(mut self) -> Self {
        self.top_by_duration = ACTOR_TOP_N.clamp(self.top_by_duration);
        self.top_by_count = ACTOR_TOP_N.clamp(self.top_by_count);
        self.top_by_gross = ACTOR_TOP_N.clamp(self.top_by_gross);
        self.graph_directors = GRAPH_DIRECTORS.clamp(self.graph_directors);
        self.graph_actors = GRAPH_ACTORS.clamp(self.graph_actors);
        self.layout.iterations = self.layout.iterations.min(MAX_ITERATIONS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_sit_inside_their_ranges() {
        for r in [ACTOR_TOP_N, GRAPH_DIRECTORS, GRAPH_ACTORS] {
            assert!(r.range().contains(&r.default));
        }
        let params = ExplorerParams::default();
        assert_eq!(params.clone().clamped(), params);
    }

    #[test]
    fn clamping_pulls_values_into_range() {
        let params = ExplorerParams {
            top_by_duration: 0,
            top_by_gross: 99,
            graph_directors: 1,
            graph_actors: 500,
            layout: LayoutParams {
                iterations: usize::MAX,
                ..Default::default()
            },
            ..Default::default()
        }
        .clamped();
        assert_eq!(params.layout.iterations, MAX_ITERATIONS);
        assert_eq!(params.top_by_duration, 5);
        assert_eq!(params.top_by_gross, 30);
        assert_eq!(params.graph_directors, 3);
        assert_eq!(params.graph_actors, 50);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let params: ExplorerParams = serde_json::from_str(r#"{"graph_actors": 30}"#).unwrap();
        assert_eq!(params.graph_actors, 30);
        assert_eq!(params.director, DEFAULT_DIRECTOR);
        assert_eq!(params.layout, LayoutParams::default());
    }
}
