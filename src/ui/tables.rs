use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};
use top250_explorer::data::query::ActorTotal;
use top250_explorer::data::Movie;

/// Rows shown in the data preview.
pub const PREVIEW_ROWS: usize = 20;

// ---------------------------------------------------------------------------
// Generic text table
// ---------------------------------------------------------------------------

/// Render a striped, resizable table of pre-formatted cells.
pub fn text_table(ui: &mut Ui, id: &str, headers: &[&str], rows: &[Vec<String>]) {
    ui.push_id(id, |ui: &mut Ui| {
        let Some((last, leading)) = headers.split_last() else {
            return;
        };
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(Column::auto().at_least(48.0).clip(true), leading.len())
            .column(Column::remainder().clip(true))
            .header(20.0, |mut header| {
                for title in leading.iter().chain(std::iter::once(last)) {
                    header.col(|ui| {
                        ui.strong(*title);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let cells = &rows[row.index()];
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Row formatting
// ---------------------------------------------------------------------------

fn join(names: &[String]) -> String {
    names.join(", ")
}

fn minutes(movie: &Movie) -> String {
    movie
        .duration
        .map(|d| d.to_string())
        .unwrap_or_else(|| "–".into())
}

fn money(value: Option<f64>) -> String {
    value.map(format_amount).unwrap_or_else(|| "–".into())
}

/// `1234567.0` → `"1,234,567"`.
pub fn format_amount(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0.0 {
        out.insert(0, '-');
    }
    out
}

pub const PREVIEW_HEADERS: &[&str] = &[
    "url", "title", "ratingValue", "ratingCount", "year", "description", "budget", "gross",
    "duration", "genreList", "countryList", "castList", "characterList", "directorList",
];

pub fn preview_rows(movies: &[Movie]) -> Vec<Vec<String>> {
    movies
        .iter()
        .take(PREVIEW_ROWS)
        .map(|m| {
            vec![
                m.url.clone().unwrap_or_default(),
                m.title.clone(),
                format!("{:.1}", m.rating_value),
                m.rating_count.to_string(),
                m.year.to_string(),
                m.description.clone().unwrap_or_default(),
                money(m.budget),
                money(m.gross),
                minutes(m),
                join(&m.genre_list),
                join(&m.country_list),
                join(&m.cast_list),
                join(&m.character_list),
                join(&m.director_list),
            ]
        })
        .collect()
}

pub const LONG_MOVIE_HEADERS: &[&str] =
    &["title", "year", "duration", "ratingValue", "directorList"];

pub fn long_movie_rows(movies: &[&Movie]) -> Vec<Vec<String>> {
    movies
        .iter()
        .map(|m| {
            vec![
                m.title.clone(),
                m.year.to_string(),
                minutes(m),
                format!("{:.1}", m.rating_value),
                join(&m.director_list),
            ]
        })
        .collect()
}

pub const FILMOGRAPHY_HEADERS: &[&str] = &["title", "year", "duration", "ratingValue"];

pub fn filmography_rows(movies: &[&Movie]) -> Vec<Vec<String>> {
    movies
        .iter()
        .map(|m| {
            vec![
                m.title.clone(),
                m.year.to_string(),
                minutes(m),
                format!("{:.1}", m.rating_value),
            ]
        })
        .collect()
}

pub fn ranking_rows<V>(
    ranking: &[ActorTotal<V>],
    format_total: impl Fn(&V) -> String,
) -> Vec<Vec<String>> {
    ranking
        .iter()
        .enumerate()
        .map(|(i, r)| vec![(i + 1).to_string(), r.actor.clone(), format_total(&r.total)])
        .collect()
}
