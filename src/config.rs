use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::Result;

const DEFAULT_SUBJECT: &str = "Nicolas Cage";

const DEFAULT_DOMAIN_STOPWORDS: &str = "movie,film,would,could,character,great,good,many,much,best,first,little,excellent";

const DEFAULT_DIRECTOR_GENRES: &str = "Comedy,Drama,Romance";
const DEFAULT_TEXT_GENRES: &str = "Drama,Comedy";
const DEFAULT_NOUN_TAGS: &str = "NN,NNS,NNP,NNPS";
const DEFAULT_ADJECTIVE_TAGS: &str = "JJ,JJR,JJS";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub dataset_path: PathBuf,
    pub analysis: AnalysisConfig,
}

/// The subset of configuration the aggregation pipeline consumes. Kept
/// separate from the server settings so tests can construct it directly.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Substring matched case-sensitively against the Cast column.
    pub subject: String,
    /// Domain-specific stopwords added to the standard English list. The
    /// subject's forename and surname are appended automatically.
    pub domain_stopwords: Vec<String>,
    /// Genres qualifying a record for the director aggregate (substring
    /// match against the raw Genre string).
    pub director_genres: Vec<String>,
    /// Exploded-genre labels that get word-frequency products.
    pub text_genres: Vec<String>,
    pub noun_tags: Vec<String>,
    pub adjective_tags: Vec<String>,
    /// Width of the trend buckets in years.
    pub bin_years: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_raw = env::var("FILMOGRAPHY_BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let bind_addr = bind_raw
            .trim()
            .trim_matches('"')
            .trim_matches('\'')
            .parse::<SocketAddr>()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let dataset_path = PathBuf::from(
            env::var("FILMOGRAPHY_DATASET_PATH")
                .unwrap_or_else(|_| "imdb-movies-dataset.csv".to_string()),
        );

        let subject = env::var("FILMOGRAPHY_SUBJECT_ACTOR")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SUBJECT.to_string());

        let domain_stopwords = list_var("FILMOGRAPHY_DOMAIN_STOPWORDS", DEFAULT_DOMAIN_STOPWORDS);
        let director_genres = list_var("FILMOGRAPHY_DIRECTOR_GENRES", DEFAULT_DIRECTOR_GENRES);
        let text_genres = list_var("FILMOGRAPHY_TEXT_GENRES", DEFAULT_TEXT_GENRES);
        let noun_tags = list_var("FILMOGRAPHY_NOUN_TAGS", DEFAULT_NOUN_TAGS);
        let adjective_tags = list_var("FILMOGRAPHY_ADJECTIVE_TAGS", DEFAULT_ADJECTIVE_TAGS);

        let bin_years = env::var("FILMOGRAPHY_PERIOD_BIN_YEARS")
            .ok()
            .and_then(|v| v.trim().parse::<i32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(5);

        Ok(Self {
            bind_addr,
            dataset_path,
            analysis: AnalysisConfig {
                subject,
                domain_stopwords,
                director_genres,
                text_genres,
                noun_tags,
                adjective_tags,
                bin_years,
            },
        })
    }
}

impl AnalysisConfig {
    /// Defaults matching the original Nicolas Cage analysis. Used by tests;
    /// `Config::from_env` builds the same thing from the environment.
    pub fn default_subject(subject: &str) -> Self {
        Self {
            subject: subject.to_string(),
            domain_stopwords: split_list(DEFAULT_DOMAIN_STOPWORDS),
            director_genres: split_list(DEFAULT_DIRECTOR_GENRES),
            text_genres: split_list(DEFAULT_TEXT_GENRES),
            noun_tags: split_list(DEFAULT_NOUN_TAGS),
            adjective_tags: split_list(DEFAULT_ADJECTIVE_TAGS),
            bin_years: 5,
        }
    }
}

fn list_var(name: &str, default: &str) -> Vec<String> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    let parsed = split_list(&raw);
    if parsed.is_empty() {
        split_list(default)
    } else {
        parsed
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
