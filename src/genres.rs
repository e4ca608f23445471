use std::collections::BTreeMap;

use crate::{
    models::{GenreAggregate, MovieRecord},
    stats::mean,
};

/// A record's Genre column holds at most this many comma-delimited values.
const MAX_GENRE_SLOTS: usize = 3;

/// One (record, genre slot) pair. Carries the parent record's Year, Rating
/// and Metascore unchanged so downstream grouping is a plain groupby.
#[derive(Debug, Clone)]
pub struct ExplodedGenreRow {
    pub genre: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub metascore: Option<f64>,
}

/// Splits each record's Genre string on "," into trimmed values and emits
/// one row per non-empty slot. A record with a duplicated genre value emits
/// duplicate rows; a record with no Genre emits nothing.
pub fn explode_genres(records: &[MovieRecord]) -> Vec<ExplodedGenreRow> {
    let mut rows = Vec::new();
    for record in records {
        for genre in genre_slots(record) {
            rows.push(ExplodedGenreRow {
                genre,
                year: record.year,
                rating: record.rating,
                metascore: record.metascore,
            });
        }
    }
    rows
}

pub fn genre_slots(record: &MovieRecord) -> Vec<String> {
    let Some(raw) = record.genre.as_deref() else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_GENRE_SLOTS)
        .map(str::to_string)
        .collect()
}

/// Groups the exploded rows by genre and computes occurrence count plus
/// skip-null mean Rating and Metascore. Output is sorted by genre.
pub fn aggregate_genres(rows: &[ExplodedGenreRow]) -> Vec<GenreAggregate> {
    let mut groups: BTreeMap<&str, Vec<&ExplodedGenreRow>> = BTreeMap::new();
    for row in rows {
        groups.entry(row.genre.as_str()).or_default().push(row);
    }

    groups
        .into_iter()
        .map(|(genre, members)| GenreAggregate {
            genre: genre.to_string(),
            count: members.len(),
            rating: mean(members.iter().filter_map(|r| r.rating)),
            metascore: mean(members.iter().filter_map(|r| r.metascore)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{aggregate_genres, explode_genres};
    use crate::models::MovieRecord;

    fn record(genre: Option<&str>, rating: Option<f64>, metascore: Option<f64>) -> MovieRecord {
        MovieRecord {
            title: Some("t".into()),
            cast: Some("Nicolas Cage".into()),
            genre: genre.map(Into::into),
            director: Some("d".into()),
            year: Some(2000),
            duration_min: Some(100),
            rating,
            metascore,
            description: Some("desc".into()),
            review: Some("rev".into()),
        }
    }

    #[test]
    fn duplicate_slot_counts_twice() {
        let records = vec![record(Some("Action, Comedy, Comedy"), Some(6.0), Some(50.0))];
        let rows = explode_genres(&records);
        assert_eq!(rows.len(), 3);

        let aggregates = aggregate_genres(&rows);
        let comedy = aggregates.iter().find(|a| a.genre == "Comedy").unwrap();
        assert_eq!(comedy.count, 2);
    }

    #[test]
    fn exploded_row_count_is_sum_of_slot_counts() {
        let records = vec![
            record(Some("Action"), None, None),
            record(Some("Action, Crime"), None, None),
            record(Some("Action, Crime, Thriller"), None, None),
            record(None, None, None),
        ];
        assert_eq!(explode_genres(&records).len(), 1 + 2 + 3);
    }

    #[test]
    fn group_means_skip_nulls_and_empty_groups_are_none() {
        let records = vec![
            record(Some("Drama"), Some(7.0), None),
            record(Some("Drama"), Some(9.0), None),
        ];
        let aggregates = aggregate_genres(&explode_genres(&records));
        assert_eq!(aggregates.len(), 1);
        let drama = &aggregates[0];
        assert_eq!(drama.count, 2);
        assert!((drama.rating.unwrap() - 8.0).abs() < 1e-9);
        assert!(drama.metascore.is_none());
    }

    #[test]
    fn output_is_sorted_by_genre() {
        let records = vec![record(Some("Thriller, Action, Crime"), None, None)];
        let aggregates = aggregate_genres(&explode_genres(&records));
        let names: Vec<_> = aggregates.iter().map(|a| a.genre.as_str()).collect();
        assert_eq!(names, vec!["Action", "Crime", "Thriller"]);
    }
}
