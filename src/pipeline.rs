use tracing::info;

use crate::{
    config::AnalysisConfig,
    directors::aggregate_directors,
    error::PipelineError,
    genres::{aggregate_genres, explode_genres},
    models::{AggregateBundle, MovieRecord},
    summary::summarize,
    text::build_word_frequencies,
    trend::build_trend,
};

/// Runs the whole aggregation pipeline over the filtered record set. All
/// five products are computed eagerly; the returned bundle is never mutated
/// afterwards.
pub fn build_aggregates(
    records: &[MovieRecord],
    config: &AnalysisConfig,
) -> Result<AggregateBundle, PipelineError> {
    let summary = summarize(records, &config.subject)?;
    let exploded = explode_genres(records);
    let genres = aggregate_genres(&exploded);
    let trend = build_trend(records, &exploded, config.bin_years);
    let directors = aggregate_directors(records, &config.director_genres);
    let word_frequencies = build_word_frequencies(records, config);

    info!(
        "Built aggregates: {} films, {} genres, {} periods, {} directors, {} word-frequency products",
        summary.movie_count,
        genres.len(),
        trend.len(),
        directors.len(),
        word_frequencies.len()
    );

    Ok(AggregateBundle {
        summary,
        genres,
        trend,
        directors,
        word_frequencies,
    })
}
