use serde::Serialize;

// ---------------------------------------------------------------------------
// Column names – as they appear in the uploaded file
// ---------------------------------------------------------------------------

pub const URL: &str = "url";
pub const TITLE: &str = "title";
pub const RATING_VALUE: &str = "ratingValue";
pub const RATING_COUNT: &str = "ratingCount";
pub const YEAR: &str = "year";
pub const DESCRIPTION: &str = "description";
pub const BUDGET: &str = "budget";
pub const GROSS: &str = "gross";
pub const DURATION: &str = "duration";

/// The five columns whose cells hold sequences of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListColumn {
    Genre,
    Country,
    Cast,
    Character,
    Director,
}

impl ListColumn {
    pub const ALL: [ListColumn; 5] = [
        ListColumn::Genre,
        ListColumn::Country,
        ListColumn::Cast,
        ListColumn::Character,
        ListColumn::Director,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ListColumn::Genre => "genreList",
            ListColumn::Country => "countryList",
            ListColumn::Cast => "castList",
            ListColumn::Character => "characterList",
            ListColumn::Director => "directorList",
        }
    }
}

// ---------------------------------------------------------------------------
// Movie – one row of the table
// ---------------------------------------------------------------------------

/// A single movie record.
///
/// `cast_list` and `character_list` are positionally aligned: the i-th
/// character is played by the i-th cast member.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub url: Option<String>,
    pub title: String,
    pub year: i32,
    pub rating_value: f64,
    pub rating_count: u64,
    pub description: Option<String>,
    /// Runtime in minutes.
    pub duration: Option<u32>,
    pub budget: Option<f64>,
    pub gross: Option<f64>,
    pub genre_list: Vec<String>,
    pub country_list: Vec<String>,
    pub cast_list: Vec<String>,
    pub character_list: Vec<String>,
    pub director_list: Vec<String>,
}

impl Movie {
    /// Runtime in minutes, with a missing value counted as zero.
    pub fn runtime(&self) -> u32 {
        self.duration.unwrap_or(0)
    }

    /// Box-office gross, with a missing value counted as zero.
    pub fn gross_or_zero(&self) -> f64 {
        self.gross.unwrap_or(0.0)
    }

    pub fn list(&self, column: ListColumn) -> &[String] {
        match column {
            ListColumn::Genre => &self.genre_list,
            ListColumn::Country => &self.country_list,
            ListColumn::Cast => &self.cast_list,
            ListColumn::Character => &self.character_list,
            ListColumn::Director => &self.director_list,
        }
    }

    pub fn list_mut(&mut self, column: ListColumn) -> &mut Vec<String> {
        match column {
            ListColumn::Genre => &mut self.genre_list,
            ListColumn::Country => &mut self.country_list,
            ListColumn::Cast => &mut self.cast_list,
            ListColumn::Character => &mut self.character_list,
            ListColumn::Director => &mut self.director_list,
        }
    }

    /// Exact, case-sensitive membership in `director_list`.
    pub fn is_directed_by(&self, director: &str) -> bool {
        self.director_list.iter().any(|d| d == director)
    }
}

// ---------------------------------------------------------------------------
// MovieTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// All movies of one upload, in file order.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    pub movies: Vec<Movie>,
    /// Column names present in the source file, in file order.
    pub column_names: Vec<String>,
}

impl MovieTable {
    pub fn new(movies: Vec<Movie>, column_names: Vec<String>) -> Self {
        MovieTable {
            movies,
            column_names,
        }
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }
}

impl FromIterator<Movie> for MovieTable {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        MovieTable::new(iter.into_iter().collect(), Vec::new())
    }
}
