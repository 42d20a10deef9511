use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Points, Text};
use top250_explorer::data::query::ActorTotal;
use top250_explorer::graph::{CollaborationGraph, Role};

use crate::color;

// ---------------------------------------------------------------------------
// Actor ranking bars
// ---------------------------------------------------------------------------

/// Horizontal bars, best-ranked actor on top.
pub fn ranking_chart<V>(
    ui: &mut Ui,
    id: &str,
    ranking: &[ActorTotal<V>],
    unit: &str,
    value_of: impl Fn(&V) -> f64,
) {
    let palette = color::generate_palette(ranking.len());
    let n = ranking.len();
    let bars: Vec<Bar> = ranking
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (r, fill))| {
            Bar::new((n - i) as f64, value_of(&r.total))
                .name(&r.actor)
                .fill(fill)
                .width(0.7)
        })
        .collect();

    Plot::new(id)
        .x_axis_label(unit)
        .show_y(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// Collaboration network
// ---------------------------------------------------------------------------

/// Draw the collaboration graph: grey edges, blue directors, orange actors,
/// each node labelled above its marker.
pub fn network_plot(ui: &mut Ui, graph: &CollaborationGraph) {
    let max_weight = graph.edges.iter().map(|e| e.weight).max().unwrap_or(1);

    Plot::new("collaboration_network")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (from, to, weight) in graph.segments() {
                let line = Line::new(PlotPoints::from(vec![from, to]))
                    .color(color::edge_color(weight, max_weight))
                    .width(0.5 + weight as f32 * 0.5);
                plot_ui.line(line);
            }

            for (role, series) in [(Role::Director, "Directors"), (Role::Actor, "Actors")] {
                let positions: PlotPoints = graph
                    .nodes_with_role(role)
                    .map(|n| n.position)
                    .collect();
                plot_ui.points(
                    Points::new(positions)
                        .name(series)
                        .color(color::role_color(role))
                        .radius(6.0)
                        .filled(true),
                );
            }

            for node in &graph.nodes {
                let [x, y] = node.position;
                let label = Text::new(
                    PlotPoint::new(x, y + 0.04),
                    RichText::new(&node.name).size(11.0),
                )
                .anchor(Align2::CENTER_BOTTOM)
                .color(color::NODE_OUTLINE);
                plot_ui.text(label);
            }
        });
}
