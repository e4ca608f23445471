use crate::{
    error::PipelineError,
    models::{MovieRecord, SummaryStats},
};

/// Scalar statistics over the filtered filmography.
///
/// First/last film only consider rows complete in every column (the source
/// dropped any row with any null before sorting by year, not just rows
/// missing the year). An empty input is a typed error rather than the
/// source's crash.
pub fn summarize(records: &[MovieRecord], subject: &str) -> Result<SummaryStats, PipelineError> {
    if records.is_empty() {
        return Err(PipelineError::EmptyResult {
            subject: subject.to_string(),
        });
    }

    let total_minutes = records
        .iter()
        .filter_map(|r| r.duration_min)
        .map(u64::from)
        .sum();

    let complete: Vec<&MovieRecord> = records.iter().filter(|r| r.is_complete()).collect();
    let first = complete.iter().min_by_key(|r| r.year);
    let last = complete.iter().max_by_key(|r| r.year);

    Ok(SummaryStats {
        movie_count: records.len(),
        total_minutes,
        first_movie: first.and_then(|r| r.title.clone()),
        first_year: first.and_then(|r| r.year),
        last_movie: last.and_then(|r| r.title.clone()),
        last_year: last.and_then(|r| r.year),
        // The crossed labels are deliberate, see SummaryStats.
        highest_metascore_movie: argmax_title(records, |r| r.rating),
        highest_rating_movie: argmax_title(records, |r| r.metascore),
    })
}

/// Title of the first record attaining the maximum of `field`, ignoring
/// records where the field is null. `None` when no record has a value.
fn argmax_title<F>(records: &[MovieRecord], field: F) -> Option<String>
where
    F: Fn(&MovieRecord) -> Option<f64>,
{
    let mut best: Option<(f64, &MovieRecord)> = None;
    for record in records {
        let Some(value) = field(record) else {
            continue;
        };
        match best {
            Some((best_value, _)) if value <= best_value => {}
            _ => best = Some((value, record)),
        }
    }
    best.and_then(|(_, record)| record.title.clone())
}
