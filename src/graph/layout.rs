use serde::{Deserialize, Serialize};

use super::GraphEdge;
use crate::rng::SeededRng;

/// Stop early once the mean step per node falls below this.
const CONVERGENCE_THRESHOLD: f64 = 1e-4;
/// Closest two nodes are allowed to be when computing forces.
const MIN_DISTANCE: f64 = 0.01;
/// Upper bound on `LayoutParams::iterations`.
pub const MAX_ITERATIONS: usize = 1000;

/// Knobs of the spring layout. Same params and graph → same coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub iterations: usize,
    /// Optimal distance between nodes; `<= 0` means `1/sqrt(n)`.
    pub k: f64,
    pub seed: u64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            iterations: 30,
            k: 0.4,
            seed: 42,
        }
    }
}

/// Fruchterman–Reingold placement of `node_count` nodes.
///
/// Every pair of nodes repels with `k²/d`, every edge attracts with
/// `weight·d²/k`. Nodes start uniformly in the unit square, the step size
/// ("temperature") starts at a tenth of the layout's extent and cools
/// linearly to zero. The result is centred on the origin and scaled so the
/// largest coordinate magnitude is 1.
pub fn spring_layout(
    node_count: usize,
    edges: &[GraphEdge],
    params: &LayoutParams,
) -> Vec<[f64; 2]> {
    let n = node_count;
    match n {
        0 => return Vec::new(),
        1 => return vec![[0.0, 0.0]],
        _ => {}
    }

    let mut rng = SeededRng::new(params.seed);
    let mut pos: Vec<[f64; 2]> = (0..n).map(|_| [rng.next_f64(), rng.next_f64()]).collect();

    // Dense weighted adjacency; graphs here have at most a few dozen nodes.
    let mut adjacency = vec![0.0f64; n * n];
    for edge in edges {
        let (s, t) = (edge.source, edge.target);
        if s >= n || t >= n || s == t {
            continue;
        }
        adjacency[s * n + t] += f64::from(edge.weight);
        adjacency[t * n + s] += f64::from(edge.weight);
    }

    let k = if params.k > 0.0 {
        params.k
    } else {
        (1.0 / n as f64).sqrt()
    };
    let mut temperature = extent(&pos) * 0.1;
    let iterations = params.iterations.min(MAX_ITERATIONS);
    let cooling = temperature / (iterations + 1) as f64;

    let mut displacement = vec![[0.0f64; 2]; n];
    for _ in 0..iterations {
        for (i, disp) in displacement.iter_mut().enumerate() {
            *disp = [0.0, 0.0];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let dx = pos[i][0] - pos[j][0];
                let dy = pos[i][1] - pos[j][1];
                let distance = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / (distance * distance) - adjacency[i * n + j] * distance / k;
                disp[0] += dx * force;
                disp[1] += dy * force;
            }
        }

        let mut moved_sq = 0.0;
        for (p, disp) in pos.iter_mut().zip(&displacement) {
            let length = (disp[0] * disp[0] + disp[1] * disp[1]).sqrt();
            let length = if length < MIN_DISTANCE { 0.1 } else { length };
            let step = [disp[0] * temperature / length, disp[1] * temperature / length];
            p[0] += step[0];
            p[1] += step[1];
            moved_sq += step[0] * step[0] + step[1] * step[1];
        }

        temperature -= cooling;
        if moved_sq.sqrt() / (n as f64) < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    rescale(&mut pos);
    pos
}

/// Largest span along either axis.
fn extent(pos: &[[f64; 2]]) -> f64 {
    let span = |axis: usize| {
        let (lo, hi) = pos.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p[axis]), hi.max(p[axis]))
        });
        hi - lo
    };
    span(0).max(span(1))
}

/// Centre on the origin and scale into `[-1, 1]`.
fn rescale(pos: &mut [[f64; 2]]) {
    let n = pos.len() as f64;
    let mean = pos
        .iter()
        .fold([0.0, 0.0], |acc, p| [acc[0] + p[0] / n, acc[1] + p[1] / n]);
    let mut limit = 0.0f64;
    for p in pos.iter_mut() {
        p[0] -= mean[0];
        p[1] -= mean[1];
        limit = limit.max(p[0].abs()).max(p[1].abs());
    }
    if limit > 0.0 {
        for p in pos.iter_mut() {
            p[0] /= limit;
            p[1] /= limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_iteration_count_is_capped() {
        let capped = LayoutParams {
            iterations: usize::MAX,
            ..Default::default()
        };
        let limit = LayoutParams {
            iterations: MAX_ITERATIONS,
            ..Default::default()
        };
        let edges = star(3);
        assert_eq!(spring_layout(4, &edges, &capped), spring_layout(4, &edges, &limit));
    }

    fn star(leaves: usize) -> Vec<GraphEdge> {
        (1..=leaves)
            .map(|t| GraphEdge {
                source: 0,
                target: t,
                weight: t as u32,
            })
            .collect()
    }

    #[test]
    fn identical_inputs_identical_coordinates() {
        let edges = star(6);
        let params = LayoutParams::default();
        let a = spring_layout(7, &edges, &params);
        let b = spring_layout(7, &edges, &params);
        assert_eq!(a, b);
    }

    #[test]
    fn seed_changes_the_placement() {
        let edges = star(6);
        let a = spring_layout(7, &edges, &LayoutParams::default());
        let b = spring_layout(7, &edges, &LayoutParams { seed: 7, ..Default::default() });
        assert_ne!(a, b);
    }

    #[test]
    fn coordinates_are_centred_and_bounded() {
        let pos = spring_layout(10, &star(8), &LayoutParams::default());
        assert_eq!(pos.len(), 10);
        let mut max = 0.0f64;
        let mut sum = [0.0, 0.0];
        for p in &pos {
            assert!(p[0].is_finite() && p[1].is_finite());
            assert!(p[0].abs() <= 1.0 + 1e-9 && p[1].abs() <= 1.0 + 1e-9);
            max = max.max(p[0].abs()).max(p[1].abs());
            sum[0] += p[0];
            sum[1] += p[1];
        }
        assert!((max - 1.0).abs() < 1e-9);
        assert!(sum[0].abs() < 1e-9 && sum[1].abs() < 1e-9);
    }

    #[test]
    fn trivial_graphs() {
        assert!(spring_layout(0, &[], &LayoutParams::default()).is_empty());
        assert_eq!(spring_layout(1, &[], &LayoutParams::default()), vec![[0.0, 0.0]]);
    }

    #[test]
    fn zero_iterations_keeps_the_seeded_start() {
        let params = LayoutParams {
            iterations: 0,
            ..Default::default()
        };
        let pos = spring_layout(3, &[], &params);
        assert_eq!(pos, spring_layout(3, &[], &params));
        assert_eq!(pos.len(), 3);
    }
}
