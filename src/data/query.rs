//! Aggregation queries over a [`MovieTable`].
//!
//! Every function here is a pure function of the table and its explicit
//! parameters. None of them fail: an empty table gives empty results.

use serde::Serialize;

use super::model::{ListColumn, Movie, MovieTable};
use super::tally::Tally;

/// Movies at least this long (in minutes) count as epics.
pub const LONG_RUNTIME_MINUTES: u32 = 220;

// ---------------------------------------------------------------------------
// Runtime queries
// ---------------------------------------------------------------------------

/// All movies with a runtime of at least [`LONG_RUNTIME_MINUTES`], longest
/// first. Movies of equal length keep their table order.
pub fn long_movies(table: &MovieTable) -> Vec<&Movie> {
    let mut long: Vec<&Movie> = table
        .iter()
        .filter(|m| m.runtime() >= LONG_RUNTIME_MINUTES)
        .collect();
    long.sort_by(|a, b| b.runtime().cmp(&a.runtime()));
    long
}

/// Every movie of one director and how long it takes to watch them all.
#[derive(Debug, Clone, Serialize)]
pub struct Filmography<'a> {
    pub director: String,
    pub movies: Vec<&'a Movie>,
    /// Sum of runtimes in minutes; missing runtimes count as zero.
    pub total_duration: u64,
}

/// Movies whose director list contains `director` exactly (case-sensitive).
pub fn filmography<'a>(table: &'a MovieTable, director: &str) -> Filmography<'a> {
    let movies: Vec<&Movie> = table.iter().filter(|m| m.is_directed_by(director)).collect();
    let total_duration = movies.iter().map(|m| u64::from(m.runtime())).sum();
    Filmography {
        director: director.to_string(),
        movies,
        total_duration,
    }
}

/// Every director in the table, in order of first appearance.
pub fn distinct_directors(table: &MovieTable) -> Vec<String> {
    appearance_counts(table, ListColumn::Director)
        .entries()
        .iter()
        .map(|(name, _)| name.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Actor rankings
// ---------------------------------------------------------------------------

/// One row of an actor ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorTotal<V> {
    pub actor: String,
    pub total: V,
}

/// Shared accumulation for all actor rankings: walk movies in table order
/// and each cast in list order, crediting every cast member with the
/// movie's full value, then keep the `top_n` largest totals.
fn rank_cast<V, F>(table: &MovieTable, top_n: usize, value_of: F) -> Vec<ActorTotal<V>>
where
    V: Copy + Default + std::ops::AddAssign + PartialOrd,
    F: Fn(&Movie) -> V,
{
    let mut tally = Tally::new();
    for movie in table.iter() {
        let value = value_of(movie);
        for actor in &movie.cast_list {
            tally.add(actor.clone(), value);
        }
    }
    tally
        .top(top_n)
        .into_iter()
        .map(|(actor, total)| ActorTotal { actor, total })
        .collect()
}

/// Actors by total screen time (minutes) across their movies.
pub fn actors_by_total_duration(table: &MovieTable, top_n: usize) -> Vec<ActorTotal<u64>> {
    rank_cast(table, top_n, |m| u64::from(m.runtime()))
}

/// Actors by number of movies they appear in.
pub fn actors_by_movie_count(table: &MovieTable, top_n: usize) -> Vec<ActorTotal<u32>> {
    rank_cast(table, top_n, |_| 1)
}

/// Actors by summed box-office gross; missing gross counts as zero.
pub fn actors_by_total_gross(table: &MovieTable, top_n: usize) -> Vec<ActorTotal<f64>> {
    rank_cast(table, top_n, Movie::gross_or_zero)
}

// ---------------------------------------------------------------------------
// Director / actor co-occurrence
// ---------------------------------------------------------------------------

/// How many movies a director and an actor made together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaboration {
    pub director: String,
    pub actor: String,
    pub movies: u32,
}

/// Number of movies in which each name of `column` appears, in order of
/// first appearance.
pub fn appearance_counts(table: &MovieTable, column: ListColumn) -> Tally<String, u32> {
    let mut tally = Tally::new();
    for movie in table.iter() {
        for name in movie.list(column) {
            tally.add(name.clone(), 1);
        }
    }
    tally
}

/// Count movies per (director, actor) pair, considering only the people the
/// two predicates keep.
pub fn pair_counts<D, A>(
    table: &MovieTable,
    keep_director: D,
    keep_actor: A,
) -> Tally<(String, String), u32>
where
    D: Fn(&str) -> bool,
    A: Fn(&str) -> bool,
{
    let mut tally = Tally::new();
    for movie in table.iter() {
        for director in movie.director_list.iter().filter(|d| keep_director(d)) {
            for actor in movie.cast_list.iter().filter(|a| keep_actor(a)) {
                tally.add((director.clone(), actor.clone()), 1);
            }
        }
    }
    tally
}

/// Every director/actor pairing, most frequent first.
pub fn collaborations(table: &MovieTable) -> Vec<Collaboration> {
    pair_counts(table, |_| true, |_| true)
        .ranked()
        .into_iter()
        .map(|((director, actor), movies)| Collaboration {
            director,
            actor,
            movies,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, duration: Option<u32>, directors: &[&str], cast: &[&str]) -> Movie {
        Movie {
            title: title.into(),
            duration,
            director_list: directors.iter().map(|s| s.to_string()).collect(),
            cast_list: cast.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn scenario() -> MovieTable {
        MovieTable::from_iter([
            movie("First", Some(230), &["A"], &["X", "Y"]),
            movie("Second", Some(100), &["A"], &["X"]),
        ])
    }

    #[test]
    fn long_movies_only_keeps_epics() {
        let table = scenario();
        let long = long_movies(&table);
        assert_eq!(long.len(), 1);
        assert_eq!(long[0].title, "First");
    }

    #[test]
    fn long_movies_sorted_with_stable_ties() {
        let table = MovieTable::from_iter([
            movie("a", Some(220), &[], &[]),
            movie("b", Some(238), &[], &[]),
            movie("c", None, &[], &[]),
            movie("d", Some(220), &[], &[]),
            movie("e", Some(219), &[], &[]),
        ]);
        let titles: Vec<_> = long_movies(&table).iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a", "d"]);
    }

    #[test]
    fn filmography_matches_exact_names() {
        let table = MovieTable::from_iter([
            movie("Jaws", Some(124), &["Steven Spielberg"], &[]),
            movie("E.T.", None, &["Steven Spielberg"], &[]),
            movie("Other", Some(90), &["steven spielberg"], &[]),
            movie("Co", Some(100), &["Someone", "Steven Spielberg"], &[]),
        ]);
        let films = filmography(&table, "Steven Spielberg");
        let titles: Vec<_> = films.movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Jaws", "E.T.", "Co"]);
        assert_eq!(films.total_duration, 224);

        let none = filmography(&table, "Spielberg");
        assert!(none.movies.is_empty());
        assert_eq!(none.total_duration, 0);
    }

    #[test]
    fn actor_rankings_for_scenario() {
        let table = scenario();
        let by_duration = actors_by_total_duration(&table, 10);
        assert_eq!(
            by_duration,
            vec![
                ActorTotal { actor: "X".into(), total: 330 },
                ActorTotal { actor: "Y".into(), total: 230 },
            ]
        );
        let by_count = actors_by_movie_count(&table, 10);
        assert_eq!(
            by_count,
            vec![
                ActorTotal { actor: "X".into(), total: 2 },
                ActorTotal { actor: "Y".into(), total: 1 },
            ]
        );
    }

    #[test]
    fn gross_treats_missing_as_zero() {
        let mut first = movie("First", Some(100), &[], &["X", "Y"]);
        first.gross = Some(1_000.0);
        let second = movie("Second", Some(100), &[], &["Y", "Z"]);
        let table = MovieTable::from_iter([first, second]);

        let ranking = actors_by_total_gross(&table, 10);
        let totals: Vec<_> = ranking.iter().map(|r| (r.actor.as_str(), r.total)).collect();
        assert_eq!(totals, vec![("X", 1_000.0), ("Y", 1_000.0), ("Z", 0.0)]);
    }

    #[test]
    fn rankings_truncate_and_break_ties_by_first_appearance() {
        let table = MovieTable::from_iter([
            movie("1", Some(100), &[], &["P", "Q", "R"]),
            movie("2", Some(100), &[], &["S", "R"]),
        ]);
        let top: Vec<_> = actors_by_movie_count(&table, 3)
            .into_iter()
            .map(|r| r.actor)
            .collect();
        assert_eq!(top, vec!["R", "P", "Q"]);
        assert!(actors_by_movie_count(&table, 0).is_empty());
    }

    #[test]
    fn collaborations_count_shared_movies() {
        let table = scenario();
        let pairs = collaborations(&table);
        assert_eq!(
            pairs,
            vec![
                Collaboration { director: "A".into(), actor: "X".into(), movies: 2 },
                Collaboration { director: "A".into(), actor: "Y".into(), movies: 1 },
            ]
        );
    }

    #[test]
    fn directors_listed_once_in_first_seen_order() {
        let table = MovieTable::from_iter([
            movie("1", None, &["B", "A"], &[]),
            movie("2", None, &["A", "C"], &[]),
        ]);
        assert_eq!(distinct_directors(&table), vec!["B", "A", "C"]);
    }

    #[test]
    fn empty_table_gives_empty_results() {
        let table = MovieTable::default();
        assert!(long_movies(&table).is_empty());
        assert!(filmography(&table, "Anyone").movies.is_empty());
        assert!(actors_by_total_duration(&table, 10).is_empty());
        assert!(actors_by_movie_count(&table, 10).is_empty());
        assert!(actors_by_total_gross(&table, 10).is_empty());
        assert!(collaborations(&table).is_empty());
        assert!(distinct_directors(&table).is_empty());
    }
}
