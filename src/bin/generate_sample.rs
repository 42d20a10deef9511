use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use top250_explorer::data::list_literal;
use top250_explorer::data::Movie;
use top250_explorer::rng::SeededRng;

const MOVIE_COUNT: usize = 250;

const DIRECTORS: &[&str] = &[
    "Ada Lindqvist", "Bruno Castellane", "Chiara Ventimiglia", "Dmitri Orlov", "Eun-ji Park",
    "Farid Haddad", "Greta Holm", "Hiroshi Tanabe", "Inès Duval", "Jonah Whitaker",
    "Kofi Mensah", "Lucía Ferrer",
];

const ACTORS: &[&str] = &[
    "Aaron Blake", "Beatrix Kane", "Cyrus Vale", "Delia Frost", "Emil Novak", "Fiona Reyes",
    "Gideon Shaw", "Hana Sato", "Ivan Petrov", "Jade O'Connor", "Kurt Lindgren", "Lena Moreau",
    "Marcus Hale", "Nadia Karim", "Owen Pryce", "Priya Raman", "Quentin Ash", "Rosa Delgado",
    "Samuel Okoye", "Tessa Wright", "Umar Siddiqui", "Vera Lund", "Wes Calloway", "Xiomara Cruz",
    "Yusuf Demir", "Zoë Hartmann", "Arlo Finch", "Bianca Rossi", "Conrad Weiss", "Daphne Lowe",
    "Elias Brandt", "Freya Nilsen", "Gustavo Lima", "Helena Voss", "Isaac Mbeki", "Juno Park",
    "Kasimir Wolff", "Lorna McBride", "Mateo Silva", "Nora Quinn",
];

const GENRES: &[&str] = &[
    "Drama", "Crime", "Adventure", "Comedy", "Thriller", "War", "Western", "Romance", "Sci-Fi",
    "Mystery", "Animation", "Biography",
];

const COUNTRIES: &[&str] = &[
    "USA", "UK", "France", "Italy", "Japan", "Germany", "South Korea", "India", "Spain", "Sweden",
];

const TITLE_WORDS: &[&str] = &[
    "Silent", "River", "Empire", "Midnight", "Glass", "Harvest", "Shadow", "Northern", "Last",
    "Golden", "Iron", "Winter", "Garden", "Storm", "Lanterns", "Horizon", "Echoes", "Kingdom",
];

/// Draw `count` distinct items, biased towards the front of `pool` so some
/// names recur much more often than others.
fn draw_distinct(rng: &mut SeededRng, pool: &[&str], count: usize) -> Vec<String> {
    let mut picked: Vec<String> = Vec::with_capacity(count);
    while picked.len() < count.min(pool.len()) {
        let skewed = rng.next_f64().powi(2);
        let name = pool[(skewed * pool.len() as f64) as usize % pool.len()];
        if !picked.iter().any(|p| p == name) {
            picked.push(name.to_string());
        }
    }
    picked
}

fn generate_movie(rng: &mut SeededRng, rank: usize) -> Movie {
    let title = format!(
        "{} {} {}",
        rng.pick(&["The", "A", "Beyond the", "Under the"]),
        rng.pick(TITLE_WORDS),
        rng.pick(TITLE_WORDS)
    );

    let duration = rng.gauss(130.0, 35.0).clamp(70.0, 260.0).round() as u32;
    let cast_size = 3 + rng.below(4);
    let cast_list = draw_distinct(rng, ACTORS, cast_size);
    let character_list = (0..cast_list.len())
        .map(|i| format!("Character {}", i + 1))
        .collect();
    let director_count = if rng.next_f64() < 0.1 { 2 } else { 1 };

    // Older productions often have no recorded budget or gross.
    let budget = (rng.next_f64() > 0.2).then(|| (rng.next_f64() * 150.0 + 1.0).round() * 1.0e6);
    let gross = (rng.next_f64() > 0.15).then(|| (rng.next_f64() * 900.0).round() * 1.0e6);

    let genre_count = 1 + rng.below(3);
    let country_count = 1 + rng.below(2);

    Movie {
        url: Some(format!("/title/tt{:07}/", 100_000 + rank * 37)),
        title,
        year: 1930 + rng.below(95) as i32,
        rating_value: (rng.gauss(8.3, 0.25).clamp(7.9, 9.3) * 10.0).round() / 10.0,
        rating_count: 25_000 + rng.below(2_500_000) as u64,
        description: Some(format!("Synthetic movie number {}.", rank + 1)),
        duration: Some(duration),
        budget,
        gross,
        genre_list: draw_distinct(rng, GENRES, genre_count),
        country_list: draw_distinct(rng, COUNTRIES, country_count),
        cast_list,
        character_list,
        director_list: draw_distinct(rng, DIRECTORS, director_count),
    }
}

fn write_csv(path: &str, movies: &[Movie]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record([
        "url", "title", "ratingValue", "ratingCount", "year", "description", "budget", "gross",
        "duration", "genreList", "countryList", "castList", "characterList", "directorList",
    ])?;

    let optional = |v: Option<f64>| v.map(|x| format!("{x:.1}")).unwrap_or_default();
    for m in movies {
        writer.write_record([
            m.url.clone().unwrap_or_default(),
            m.title.clone(),
            m.rating_value.to_string(),
            m.rating_count.to_string(),
            m.year.to_string(),
            m.description.clone().unwrap_or_default(),
            optional(m.budget),
            optional(m.gross),
            m.duration.map(|d| d.to_string()).unwrap_or_default(),
            list_literal::format(&m.genre_list),
            list_literal::format(&m.country_list),
            list_literal::format(&m.cast_list),
            list_literal::format(&m.character_list),
            list_literal::format(&m.director_list),
        ])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_json(path: &str, movies: &[Movie]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    serde_json::to_writer_pretty(BufWriter::new(file), movies).context("writing JSON")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SeededRng::new(42);
    let movies: Vec<Movie> = (0..MOVIE_COUNT).map(|rank| generate_movie(&mut rng, rank)).collect();

    write_csv("sample_movies.csv", &movies)?;
    write_json("sample_movies.json", &movies)?;

    println!(
        "Wrote {} movies to sample_movies.csv and sample_movies.json",
        movies.len()
    );
    Ok(())
}
