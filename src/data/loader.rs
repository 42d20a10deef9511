use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::error::{ParseError, Result};
use super::list_literal;
use super::model::{self, ListColumn, Movie, MovieTable};

type Row = Map<String, JsonValue>;

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// The two tabular formats an upload may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Json,
}

impl FileFormat {
    /// Pick the format from a file name's extension.
    pub fn from_name(name: &str) -> Option<Self> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(FileFormat::Csv),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    /// Guess the format from the content: a leading `[` or `{` means JSON.
    pub fn sniff(bytes: &[u8]) -> Self {
        match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
            Some(b'[') | Some(b'{') => FileFormat::Json,
            _ => FileFormat::Csv,
        }
    }
}

/// Load a movie table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, list columns hold list literals (`['A', 'B']`)
/// * `.json` – records (`[{...}, ...]`) or columns (`{"title": {"0": ...}}`)
pub fn load_file(path: &Path) -> Result<MovieTable> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    load_bytes(name, &bytes)
}

/// Load a movie table from an in-memory upload, e.g. a dropped file.
pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<MovieTable> {
    let format = FileFormat::from_name(name).unwrap_or_else(|| FileFormat::sniff(bytes));
    log::debug!("Reading '{name}' as {format:?} ({} bytes)", bytes.len());
    match format {
        FileFormat::Csv => load_csv(bytes),
        FileFormat::Json => load_json(bytes),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one movie per line.
/// Empty cells are missing values.
pub fn load_csv(bytes: &[u8]) -> Result<MovieTable> {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, cell)| {
                let value = if cell.is_empty() {
                    JsonValue::Null
                } else {
                    JsonValue::String(cell.to_string())
                };
                (h.clone(), value)
            })
            .collect();
        rows.push(row);
    }

    table_from_rows(rows, headers)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Accepts the records orientation
///
/// ```json
/// [{ "title": "Heat", "castList": ["Al Pacino", "Robert De Niro"], ... }]
/// ```
///
/// and the columns orientation (the default of dataframe `to_json`)
///
/// ```json
/// { "title": { "0": "Heat" }, "castList": { "0": "['Al Pacino']" } }
/// ```
pub fn load_json(bytes: &[u8]) -> Result<MovieTable> {
    let root: JsonValue = serde_json::from_slice(bytes)?;
    let (rows, columns) = match root {
        JsonValue::Array(records) => rows_from_records(records)?,
        JsonValue::Object(columns) => rows_from_columns(columns)?,
        other => {
            return Err(ParseError::NotTabular(format!(
                "expected an array or object at top level, found {}",
                json_kind(&other)
            )))
        }
    };
    table_from_rows(rows, columns)
}

fn rows_from_records(records: Vec<JsonValue>) -> Result<(Vec<Row>, Vec<String>)> {
    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.into_iter().enumerate() {
        let JsonValue::Object(obj) = rec else {
            return Err(ParseError::NotTabular(format!("row {i} is not a JSON object")));
        };
        for key in obj.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        rows.push(obj);
    }

    Ok((rows, columns))
}

fn rows_from_columns(table: Map<String, JsonValue>) -> Result<(Vec<Row>, Vec<String>)> {
    let mut row_keys: Vec<String> = Vec::new();
    let mut row_index: HashMap<String, usize> = HashMap::new();
    let mut cells: Vec<(String, String, JsonValue)> = Vec::new();
    let mut columns = Vec::with_capacity(table.len());

    for (column, values) in table {
        let entries: Vec<(String, JsonValue)> = match values {
            JsonValue::Object(by_key) => by_key.into_iter().collect(),
            JsonValue::Array(by_pos) => by_pos
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            other => {
                return Err(ParseError::NotTabular(format!(
                    "column '{column}' holds {} instead of an object or array",
                    json_kind(&other)
                )))
            }
        };
        for (key, value) in entries {
            if !row_index.contains_key(&key) {
                row_index.insert(key.clone(), row_keys.len());
                row_keys.push(key.clone());
            }
            cells.push((key, column.clone(), value));
        }
        columns.push(column);
    }

    // Numeric row keys follow their numeric order ("2" before "10").
    let numeric: Option<Vec<usize>> = row_keys.iter().map(|k| k.parse().ok()).collect();
    let mut order: Vec<usize> = (0..row_keys.len()).collect();
    if let Some(numbers) = numeric {
        order.sort_by_key(|&i| numbers[i]);
    }
    let mut position = vec![0; row_keys.len()];
    for (pos, &i) in order.iter().enumerate() {
        position[i] = pos;
    }

    let mut rows = vec![Row::new(); row_keys.len()];
    for (key, column, value) in cells {
        rows[position[row_index[&key]]].insert(column, value);
    }

    Ok((rows, columns))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Row → Movie
// ---------------------------------------------------------------------------

fn table_from_rows(rows: Vec<Row>, columns: Vec<String>) -> Result<MovieTable> {
    if !rows.is_empty() && !columns.iter().any(|c| c == model::TITLE) {
        return Err(ParseError::MissingColumn(model::TITLE));
    }
    for column in ListColumn::ALL {
        if !rows.is_empty() && !columns.iter().any(|c| c == column.name()) {
            log::warn!("Column '{}' is absent; treating it as empty", column.name());
        }
    }

    let movies = rows
        .iter()
        .enumerate()
        .map(|(i, row)| movie_from_row(i, row))
        .collect::<Result<Vec<_>>>()?;

    Ok(MovieTable::new(movies, columns))
}

fn movie_from_row(row_no: usize, row: &Row) -> Result<Movie> {
    let title = text_cell(row.get(model::TITLE)).ok_or_else(|| ParseError::InvalidValue {
        row: row_no,
        column: model::TITLE,
        message: "missing title".into(),
    })?;

    let mut movie = Movie {
        url: text_cell(row.get(model::URL)),
        title,
        year: integer_cell(row_no, row, model::YEAR)?.unwrap_or(0),
        rating_value: float_cell(row_no, row, model::RATING_VALUE)?.unwrap_or(0.0),
        rating_count: integer_cell(row_no, row, model::RATING_COUNT)?.unwrap_or(0),
        description: text_cell(row.get(model::DESCRIPTION)),
        duration: integer_cell(row_no, row, model::DURATION)?,
        budget: float_cell(row_no, row, model::BUDGET)?,
        gross: float_cell(row_no, row, model::GROSS)?,
        ..Default::default()
    };

    for column in ListColumn::ALL {
        *movie.list_mut(column) = list_cell(row_no, row.get(column.name()), column.name())?;
    }

    Ok(movie)
}

fn text_cell(val: Option<&JsonValue>) -> Option<String> {
    match val? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Missing-value markers written by dataframe exports.
fn is_missing(s: &str) -> bool {
    matches!(s, "" | "nan" | "NaN" | "NA" | "null" | "None")
}

fn float_cell(row: usize, cells: &Row, column: &'static str) -> Result<Option<f64>> {
    let invalid = |message: String| ParseError::InvalidValue {
        row,
        column,
        message,
    };
    match cells.get(column) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => Ok(n.as_f64()),
        Some(JsonValue::String(s)) => {
            let s = s.trim();
            if is_missing(s) {
                return Ok(None);
            }
            s.parse::<f64>()
                .map(Some)
                .map_err(|_| invalid(format!("'{s}' is not a number")))
        }
        Some(other) => Err(invalid(format!("expected a number, found {}", json_kind(other)))),
    }
}

/// Integer columns also accept integral floats (`142.0`), since a column
/// with missing values is exported as floats.
fn integer_cell<T: TryFrom<i64>>(
    row: usize,
    cells: &Row,
    column: &'static str,
) -> Result<Option<T>> {
    let invalid = |message: String| ParseError::InvalidValue {
        row,
        column,
        message,
    };
    let Some(value) = float_or_int(cells.get(column)) else {
        return match cells.get(column) {
            None | Some(JsonValue::Null) => Ok(None),
            Some(JsonValue::String(s)) if is_missing(s.trim()) => Ok(None),
            Some(JsonValue::String(s)) => Err(invalid(format!("'{}' is not an integer", s.trim()))),
            Some(other) => Err(invalid(format!("expected an integer, found {}", json_kind(other)))),
        };
    };
    let int = match value {
        Number::Int(i) => i,
        Number::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => f as i64,
        Number::Float(f) => return Err(invalid(format!("{f} is not an integer"))),
    };
    T::try_from(int)
        .map(Some)
        .map_err(|_| invalid(format!("{int} is out of range")))
}

enum Number {
    Int(i64),
    Float(f64),
}

fn float_or_int(val: Option<&JsonValue>) -> Option<Number> {
    match val? {
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Some(Number::Int(i)),
            None => n.as_f64().map(Number::Float),
        },
        JsonValue::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Some(Number::Int(i))
            } else {
                s.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::Float)
            }
        }
        _ => None,
    }
}

/// A list cell is either a native JSON array of strings or a list literal.
/// Anything else rejects the whole file.
fn list_cell(row: usize, val: Option<&JsonValue>, column: &'static str) -> Result<Vec<String>> {
    let malformed = |reason: String| ParseError::MalformedList {
        row,
        column,
        reason,
    };
    match val {
        None | Some(JsonValue::Null) => Ok(Vec::new()),
        Some(JsonValue::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(j, item)| match item {
                JsonValue::String(s) => Ok(s.clone()),
                other => Err(malformed(format!("item {j} is {}, not a string", json_kind(other)))),
            })
            .collect(),
        Some(JsonValue::String(s)) if s.trim().is_empty() => Ok(Vec::new()),
        Some(JsonValue::String(s)) => list_literal::parse(s).map_err(|e| malformed(e.to_string())),
        Some(other) => Err(malformed(format!("expected a list, found {}", json_kind(other)))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
url,title,ratingValue,ratingCount,year,description,budget,gross,duration,genreList,countryList,castList,characterList,directorList
/title/tt0068646/,The Godfather,9.2,1900000,1972,Mafia saga,6000000,134966411,175,\"['Crime', 'Drama']\",['USA'],\"['Marlon Brando', 'Al Pacino']\",\"['Don Vito Corleone', 'Michael Corleone']\",['Francis Ford Coppola']
/title/tt0050083/,12 Angry Men,9.0,800000,1957,Jury,,,96.0,['Drama'],['USA'],\"['Henry Fonda', \"\"Lee J. Cobb\"\"]\",\"['Juror 8', 'Juror 3']\",['Sidney Lumet']
";

    #[test]
    fn csv_rows_become_movies() {
        let table = load_csv(CSV.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);

        let godfather = &table.movies[0];
        assert_eq!(godfather.title, "The Godfather");
        assert_eq!(godfather.year, 1972);
        assert_eq!(godfather.rating_count, 1_900_000);
        assert_eq!(godfather.duration, Some(175));
        assert_eq!(godfather.gross, Some(134_966_411.0));
        assert_eq!(godfather.cast_list, vec!["Marlon Brando", "Al Pacino"]);
        assert_eq!(godfather.director_list, vec!["Francis Ford Coppola"]);
        assert_eq!(godfather.url.as_deref(), Some("/title/tt0068646/"));

        let angry = &table.movies[1];
        assert_eq!(angry.duration, Some(96));
        assert_eq!(angry.gross, None);
        assert_eq!(angry.budget, None);
        assert_eq!(angry.cast_list, vec!["Henry Fonda", "Lee J. Cobb"]);
        assert!(table.column_names.iter().any(|c| c == "characterList"));
    }

    #[test]
    fn json_records_accept_native_lists_and_literals() {
        let json = r#"[
            {"title": "Heat", "year": 1995, "duration": 170, "gross": null,
             "castList": ["Al Pacino", "Robert De Niro"], "directorList": "['Michael Mann']"}
        ]"#;
        let table = load_json(json.as_bytes()).unwrap();
        let heat = &table.movies[0];
        assert_eq!(heat.cast_list, vec!["Al Pacino", "Robert De Niro"]);
        assert_eq!(heat.director_list, vec!["Michael Mann"]);
        assert_eq!(heat.gross, None);
        assert!(heat.genre_list.is_empty());
    }

    #[test]
    fn json_columns_orientation_keeps_numeric_row_order() {
        let mut titles = Map::new();
        let mut durations = Map::new();
        for i in 0..12 {
            titles.insert(i.to_string(), JsonValue::String(format!("Movie {i}")));
            durations.insert(i.to_string(), JsonValue::from(100 + i));
        }
        let mut root = Map::new();
        root.insert("title".into(), JsonValue::Object(titles));
        root.insert("duration".into(), JsonValue::Object(durations));
        let bytes = serde_json::to_vec(&JsonValue::Object(root)).unwrap();

        let table = load_json(&bytes).unwrap();
        assert_eq!(table.len(), 12);
        for (i, movie) in table.iter().enumerate() {
            assert_eq!(movie.title, format!("Movie {i}"));
            assert_eq!(movie.duration, Some(100 + i as u32));
        }
    }

    #[test]
    fn json_keeps_file_order_of_rows_and_columns() {
        let json = r#"{"title": {"tt9": "First", "tt1": "Second"},
                       "castList": {"tt9": ["B"], "tt1": ["A"]}}"#;
        let table = load_json(json.as_bytes()).unwrap();
        let titles: Vec<&str> = table.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
        let top = crate::data::query::actors_by_movie_count(&table, 1);
        assert_eq!(top[0].actor, "B");

        let json = r#"[{"title": "Heat", "year": 1995, "castList": []}]"#;
        let table = load_json(json.as_bytes()).unwrap();
        assert_eq!(table.column_names, ["title", "year", "castList"]);
    }

    #[test]
    fn malformed_list_rejects_the_file() {
        let json = r#"[{"title": "Heat", "castList": "Al Pacino"}]"#;
        let err = load_json(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedList { row: 0, column: "castList", .. }
        ));

        let json = r#"[{"title": "Heat", "castList": ["Al Pacino", 7]}]"#;
        assert!(matches!(
            load_json(json.as_bytes()),
            Err(ParseError::MalformedList { .. })
        ));

        let json = r#"[{"title": "Heat", "directorList": 3}]"#;
        assert!(matches!(
            load_json(json.as_bytes()),
            Err(ParseError::MalformedList { column: "directorList", .. })
        ));
    }

    #[test]
    fn bad_numbers_name_row_and_column() {
        let csv = "title,duration\nA,120\nB,long\n";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { row: 1, column: "duration", .. }
        ));

        let csv = "title,duration\nA,120.5\n";
        assert!(load_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn missing_title_column_is_an_error() {
        let csv = "name,duration\nA,120\n";
        assert!(matches!(
            load_csv(csv.as_bytes()),
            Err(ParseError::MissingColumn("title"))
        ));
    }

    #[test]
    fn undecodable_input_is_an_error() {
        assert!(matches!(load_bytes("movies.json", b"{not json"), Err(ParseError::Json(_))));
        assert!(matches!(load_bytes("movies.json", b"42"), Err(ParseError::NotTabular(_))));
        assert!(matches!(
            load_bytes("movies.json", b"[1, 2]"),
            Err(ParseError::NotTabular(_))
        ));
    }

    #[test]
    fn empty_inputs_give_empty_tables() {
        assert!(load_json(b"[]").unwrap().is_empty());
        assert!(load_csv(b"title,duration\n").unwrap().is_empty());
    }

    #[test]
    fn format_from_name_or_content() {
        assert_eq!(FileFormat::from_name("top250.CSV"), Some(FileFormat::Csv));
        assert_eq!(FileFormat::from_name("top250.json"), Some(FileFormat::Json));
        assert_eq!(FileFormat::from_name("top250"), None);
        assert_eq!(FileFormat::sniff(b"  \n[{}]"), FileFormat::Json);
        assert_eq!(FileFormat::sniff(b"title,year"), FileFormat::Csv);
    }
}
