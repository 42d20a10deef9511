use eframe::egui::{self, RichText, Slider, Ui};
use top250_explorer::data::query::{
    self, actors_by_movie_count, actors_by_total_duration, actors_by_total_gross, filmography,
    long_movies, LONG_RUNTIME_MINUTES,
};
use top250_explorer::params::{ACTOR_TOP_N, GRAPH_ACTORS, GRAPH_DIRECTORS};

use super::plot::{network_plot, ranking_chart};
use super::tables::{self, format_amount, text_table};
use crate::color;
use crate::state::{AppState, Tab};

/// Render whichever tab is selected.
pub fn active_tab(ui: &mut Ui, state: &mut AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV or JSON file to start  (File → Open…, or drop it here)");
        });
        return;
    }

    match state.tab {
        Tab::Preview => preview(ui, state),
        Tab::Patience => patience(ui, state),
        Tab::Marathon => marathon(ui, state),
        Tab::ScreenTime => screen_time(ui, state),
        Tab::Workhorse => workhorse(ui, state),
        Tab::CashHorse => cash_horse(ui, state),
        Tab::Network => network(ui, state),
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

fn preview(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else { return };
    ui.heading("Data preview");
    ui.label(format!(
        "First {} of {} movies",
        tables::PREVIEW_ROWS.min(table.len()),
        table.len()
    ));
    ui.separator();
    let rows = tables::preview_rows(&table.movies);
    text_table(ui, "preview", tables::PREVIEW_HEADERS, &rows);
}

fn patience(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else { return };
    let long = long_movies(table);
    ui.heading(format!("Epic-length movies (≥ {LONG_RUNTIME_MINUTES} minutes)"));
    ui.label(format!("{} movies", long.len()));
    ui.separator();
    text_table(ui, "patience", tables::LONG_MOVIE_HEADERS, &tables::long_movie_rows(&long));
}

fn marathon(ui: &mut Ui, state: &mut AppState) {
    ui.heading(format!("{} marathon", state.params.director));

    egui::ComboBox::from_id_salt("marathon_director")
        .selected_text(state.params.director.as_str())
        .width(260.0)
        .show_ui(ui, |ui: &mut Ui| {
            for director in &state.directors {
                ui.selectable_value(
                    &mut state.params.director,
                    director.clone(),
                    director.as_str(),
                );
            }
        });

    let Some(table) = &state.table else { return };
    let films = filmography(table, &state.params.director);
    ui.add_space(8.0);
    ui.label("Total runtime of all movies");
    ui.label(
        RichText::new(format!("{} minutes", films.total_duration))
            .size(28.0)
            .strong(),
    );
    ui.separator();
    text_table(
        ui,
        "marathon",
        tables::FILMOGRAPHY_HEADERS,
        &tables::filmography_rows(&films.movies),
    );
}

fn top_n_slider(ui: &mut Ui, value: &mut usize) {
    ui.add(Slider::new(value, ACTOR_TOP_N.range()).text("actors shown"));
}

fn screen_time(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Top actors by total runtime");
    top_n_slider(ui, &mut state.params.top_by_duration);
    let Some(table) = &state.table else { return };
    let ranking = actors_by_total_duration(table, state.params.top_by_duration);
    let rows = tables::ranking_rows(&ranking, |total| total.to_string());
    ui.columns(2, |cols| {
        text_table(&mut cols[0], "screen_time", &["#", "Actor", "Total duration (min)"], &rows);
        ranking_chart(&mut cols[1], "screen_time_chart", &ranking, "minutes", |v| *v as f64);
    });
}

fn workhorse(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Top actors by number of movies");
    top_n_slider(ui, &mut state.params.top_by_count);
    let Some(table) = &state.table else { return };
    let ranking = actors_by_movie_count(table, state.params.top_by_count);
    let rows = tables::ranking_rows(&ranking, |count| count.to_string());
    ui.columns(2, |cols| {
        text_table(&mut cols[0], "workhorse", &["#", "Actor", "Number of movies"], &rows);
        ranking_chart(&mut cols[1], "workhorse_chart", &ranking, "movies", |v| f64::from(*v));
    });
}

fn cash_horse(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Top actors by total gross");
    top_n_slider(ui, &mut state.params.top_by_gross);
    let Some(table) = &state.table else { return };
    let ranking = actors_by_total_gross(table, state.params.top_by_gross);
    let rows = tables::ranking_rows(&ranking, |gross| format_amount(*gross));
    ui.columns(2, |cols| {
        text_table(&mut cols[0], "cash_horse", &["#", "Actor", "Total gross"], &rows);
        ranking_chart(&mut cols[1], "cash_horse_chart", &ranking, "gross", |v| *v);
    });
}

fn network(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Collaboration network of directors and actors");
    ui.label("Who worked with whom most often?");

    ui.horizontal(|ui: &mut Ui| {
        ui.add(
            Slider::new(&mut state.params.graph_directors, GRAPH_DIRECTORS.range())
                .text("top directors"),
        );
        ui.add(
            Slider::new(&mut state.params.graph_actors, GRAPH_ACTORS.range()).text("top actors"),
        );
    });
    state.refresh_graph();

    let Some(table) = &state.table else { return };
    let graph = &state.graph;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("● director").color(color::DIRECTOR));
        ui.label(RichText::new("● actor").color(color::ACTOR));
        ui.separator();
        ui.label(format!(
            "{} people, {} collaborations",
            graph.nodes.len(),
            graph.edges.len()
        ));
    });

    let strongest = query::collaborations(table)
        .into_iter()
        .find(|c| graph.edge_weight(&c.director, &c.actor).is_some());
    if let Some(c) = strongest {
        ui.label(format!(
            "Strongest pairing shown: {} & {} ({} movies)",
            c.director, c.actor, c.movies
        ));
    }

    network_plot(ui, graph);
}
