//! Word-frequency pipeline over the free-text columns.
//!
//! Per corpus: concatenate -> tokenize -> lowercase -> filter-alphabetic ->
//! filter-stopwords -> POS-tag -> filter-by-tag-class -> count. Each stage
//! is a pure function; descriptions keep noun tags, reviews keep adjective
//! tags.

use std::collections::{HashMap, HashSet};

use crate::{
    config::AnalysisConfig,
    genres::genre_slots,
    models::{MovieRecord, TextField, WordFrequency},
    tagger,
};

/// Standard English stopword list. Apostrophe contractions are omitted
/// because the tokenizer never produces them.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
    "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "couldn", "didn",
    "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn", "needn", "shan",
    "shouldn", "wasn", "weren", "won", "wouldn",
];

/// Builds the word-frequency products for every configured text genre, one
/// per free-text column: nouns out of descriptions, adjectives out of
/// reviews.
pub fn build_word_frequencies(
    records: &[MovieRecord],
    config: &AnalysisConfig,
) -> Vec<WordFrequency> {
    let stopwords = stopword_set(config);
    let mut products = Vec::new();
    for genre in &config.text_genres {
        for field in [TextField::Description, TextField::Review] {
            products.push(WordFrequency {
                genre: genre.clone(),
                field,
                counts: corpus_frequencies(records, genre, field, config, &stopwords),
            });
        }
    }
    products
}

/// The full stopword set: standard English list, configured domain
/// exclusions, and the subject's name parts, all lowercased.
pub fn stopword_set(config: &AnalysisConfig) -> HashSet<String> {
    let mut set: HashSet<String> = ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect();
    set.extend(config.domain_stopwords.iter().map(|w| w.to_lowercase()));
    set.extend(
        config
            .subject
            .split_whitespace()
            .map(|part| part.to_lowercase()),
    );
    set
}

fn corpus_frequencies(
    records: &[MovieRecord],
    genre: &str,
    field: TextField,
    config: &AnalysisConfig,
    stopwords: &HashSet<String>,
) -> HashMap<String, u32> {
    let text = concatenate(records, genre, field);
    let tokens = tokenize(&text);
    let tokens = lowercase(&tokens);
    let tokens = retain_alphabetic(tokens);
    let tokens = remove_stopwords(tokens, stopwords);
    let tagged = tagger::pos_tag(&tokens);
    let wanted = match field {
        TextField::Description => &config.noun_tags,
        TextField::Review => &config.adjective_tags,
    };
    let kept = retain_tag_classes(tagged, wanted);
    count_frequencies(kept)
}

/// Joins the chosen text column across all exploded rows whose genre slot
/// equals `genre` exactly. A record listing the genre in two slots
/// contributes its text twice, matching the exploded-table semantics.
fn concatenate(records: &[MovieRecord], genre: &str, field: TextField) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for record in records {
        for slot in genre_slots(record) {
            if slot == genre {
                let text = match field {
                    TextField::Description => record.description.as_deref(),
                    TextField::Review => record.review.as_deref(),
                };
                if let Some(text) = text {
                    parts.push(text);
                }
            }
        }
    }
    parts.join(" ")
}

/// Maximal runs of alphabetic characters. Digits, punctuation and
/// whitespace all separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphabetic())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn lowercase(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| t.to_lowercase()).collect()
}

pub fn retain_alphabetic(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !t.is_empty() && t.chars().all(char::is_alphabetic))
        .collect()
}

pub fn remove_stopwords(tokens: Vec<String>, stopwords: &HashSet<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !stopwords.contains(t))
        .collect()
}

fn retain_tag_classes(
    tagged: Vec<(String, &'static str)>,
    wanted: &[String],
) -> Vec<String> {
    tagged
        .into_iter()
        .filter(|(_, tag)| wanted.iter().any(|w| w == tag))
        .map(|(token, _)| token)
        .collect()
}

fn count_frequencies(tokens: Vec<String>) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}
