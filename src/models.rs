use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One row of the source dataset. Every field is optional because the CSV
/// leaves cells empty rather than carrying sentinel values.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Cast")]
    pub cast: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "Duration (min)")]
    pub duration_min: Option<u32>,
    #[serde(rename = "Rating")]
    pub rating: Option<f64>,
    #[serde(rename = "Metascore")]
    pub metascore: Option<f64>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Review")]
    pub review: Option<String>,
}

impl MovieRecord {
    /// True when every column has a value. First/last-film statistics only
    /// consider complete rows.
    pub fn is_complete(&self) -> bool {
        self.title.is_some()
            && self.cast.is_some()
            && self.genre.is_some()
            && self.director.is_some()
            && self.year.is_some()
            && self.duration_min.is_some()
            && self.rating.is_some()
            && self.metascore.is_some()
            && self.description.is_some()
            && self.review.is_some()
    }
}

/// Scalar summary of the filtered filmography.
///
/// `highest_metascore_movie` is the title at the maximum **Rating** and
/// `highest_rating_movie` the title at the maximum **Metascore**. The source
/// dashboard shipped with these labels crossed; the computed semantics and
/// the wire names are both kept so the consumer contract is unchanged.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub movie_count: usize,
    pub total_minutes: u64,
    pub first_movie: Option<String>,
    pub first_year: Option<i32>,
    pub last_movie: Option<String>,
    pub last_year: Option<i32>,
    pub highest_metascore_movie: Option<String>,
    pub highest_rating_movie: Option<String>,
}

/// Per-genre performance over the exploded genre rows. A record with two
/// identical genre slots contributes twice to that genre's count and means.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreAggregate {
    pub genre: String,
    pub count: usize,
    pub rating: Option<f64>,
    pub metascore: Option<f64>,
}

/// One bucket of the trend table. `genres` lists the dominant genre(s) of
/// the bucket, comma-joined; it is forced to `None` whenever `metascore`
/// is `None`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTrend {
    pub period: String,
    pub metascore: Option<f64>,
    pub genres: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectorAggregate {
    pub director: String,
    pub rating: Option<f64>,
    pub metascore: Option<f64>,
}

/// Which free-text column a word-frequency product was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Description,
    Review,
}

impl TextField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Review => "review",
        }
    }
}

/// Normalized-token occurrence counts for one (genre, text field) corpus.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFrequency {
    pub genre: String,
    pub field: TextField,
    pub counts: HashMap<String, u32>,
}

/// Everything the pipeline produces. Built once at startup, immutable
/// thereafter, shared with the HTTP layer behind an `Arc`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateBundle {
    pub summary: SummaryStats,
    pub genres: Vec<GenreAggregate>,
    pub trend: Vec<PeriodTrend>,
    pub directors: Vec<DirectorAggregate>,
    pub word_frequencies: Vec<WordFrequency>,
}
