use std::collections::BTreeMap;

use crate::{
    models::{DirectorAggregate, MovieRecord},
    stats::mean,
};

/// Per-director mean Rating and Metascore, restricted to records whose raw
/// Genre string contains one of the qualifying genres. The test is a
/// case-sensitive substring match against the whole comma-joined string,
/// not against exploded rows; records failing it are excluded entirely.
/// There is no minimum sample size, a single qualifying film defines a mean.
pub fn aggregate_directors(
    records: &[MovieRecord],
    qualifying_genres: &[String],
) -> Vec<DirectorAggregate> {
    let mut groups: BTreeMap<&str, Vec<&MovieRecord>> = BTreeMap::new();
    for record in records {
        let Some(director) = record.director.as_deref() else {
            continue;
        };
        let qualifies = record
            .genre
            .as_deref()
            .is_some_and(|g| qualifying_genres.iter().any(|q| g.contains(q.as_str())));
        if qualifies {
            groups.entry(director).or_default().push(record);
        }
    }

    groups
        .into_iter()
        .map(|(director, films)| DirectorAggregate {
            director: director.to_string(),
            rating: mean(films.iter().filter_map(|r| r.rating)),
            metascore: mean(films.iter().filter_map(|r| r.metascore)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::aggregate_directors;
    use crate::models::MovieRecord;

    fn record(director: Option<&str>, genre: Option<&str>, rating: Option<f64>) -> MovieRecord {
        MovieRecord {
            title: Some("t".into()),
            cast: Some("Nicolas Cage".into()),
            genre: genre.map(Into::into),
            director: director.map(Into::into),
            year: Some(2000),
            duration_min: Some(100),
            rating,
            metascore: Some(50.0),
            description: Some("desc".into()),
            review: Some("rev".into()),
        }
    }

    fn qualifying() -> Vec<String> {
        vec!["Comedy".into(), "Drama".into(), "Romance".into()]
    }

    #[test]
    fn non_qualifying_films_are_excluded_entirely() {
        let records = vec![
            record(Some("Coen"), Some("Crime, Comedy"), Some(7.0)),
            record(Some("Coen"), Some("Crime, Thriller"), Some(9.0)),
        ];
        let aggregates = aggregate_directors(&records, &qualifying());
        assert_eq!(aggregates.len(), 1);
        // Only the Comedy film feeds the mean.
        assert!((aggregates[0].rating.unwrap() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn director_with_no_qualifying_film_is_absent() {
        let records = vec![
            record(Some("Woo"), Some("Action, Crime"), Some(7.3)),
            record(Some("Figgis"), Some("Drama, Romance"), Some(7.5)),
        ];
        let aggregates = aggregate_directors(&records, &qualifying());
        let names: Vec<_> = aggregates.iter().map(|a| a.director.as_str()).collect();
        assert_eq!(names, vec!["Figgis"]);
    }

    #[test]
    fn null_director_rows_are_skipped() {
        let records = vec![record(None, Some("Drama"), Some(7.0))];
        assert!(aggregate_directors(&records, &qualifying()).is_empty());
    }

    #[test]
    fn single_film_defines_a_mean() {
        let records = vec![record(Some("Figgis"), Some("Drama"), Some(7.5))];
        let aggregates = aggregate_directors(&records, &qualifying());
        assert!((aggregates[0].rating.unwrap() - 7.5).abs() < 1e-9);
        assert!((aggregates[0].metascore.unwrap() - 50.0).abs() < 1e-9);
    }
}
