use std::collections::HashMap;

use crate::{
    genres::ExplodedGenreRow,
    models::{MovieRecord, PeriodTrend},
    stats::mean,
};

/// Builds the per-period trend table: mean Metascore per bucket plus the
/// dominant genre(s) of the bucket.
///
/// Buckets are `bin_years` wide, aligned down from the minimum year, and the
/// final bucket always covers the maximum year. Genre occurrences count
/// toward a bucket's maximum whether or not the parent record has a
/// Metascore, but a bucket whose mean Metascore is undefined reports no
/// genre either: trend existence is coupled to metascore existence.
pub fn build_trend(
    records: &[MovieRecord],
    exploded: &[ExplodedGenreRow],
    bin_years: i32,
) -> Vec<PeriodTrend> {
    let years: Vec<i32> = records.iter().filter_map(|r| r.year).collect();
    let (Some(&min_year), Some(&max_year)) = (years.iter().min(), years.iter().max()) else {
        return Vec::new();
    };

    let start = min_year - min_year.rem_euclid(bin_years);
    let bucket_count = ((max_year - start) / bin_years + 1) as usize;
    let bucket_of = |year: i32| ((year - start) / bin_years) as usize;

    let mut metascores: Vec<Vec<f64>> = vec![Vec::new(); bucket_count];
    for record in records {
        if let (Some(year), Some(metascore)) = (record.year, record.metascore) {
            metascores[bucket_of(year)].push(metascore);
        }
    }

    let mut genre_counts: Vec<HashMap<&str, usize>> = vec![HashMap::new(); bucket_count];
    for row in exploded {
        if let Some(year) = row.year {
            *genre_counts[bucket_of(year)]
                .entry(row.genre.as_str())
                .or_insert(0) += 1;
        }
    }

    (0..bucket_count)
        .map(|i| {
            let bucket_start = start + i as i32 * bin_years;
            let metascore = mean(metascores[i].iter().copied());
            let genres = if metascore.is_some() {
                dominant_genres(&genre_counts[i])
            } else {
                None
            };
            PeriodTrend {
                period: format!("{}-{}", bucket_start, bucket_start + bin_years - 1),
                metascore,
                genres,
            }
        })
        .collect()
}

/// All genres sharing the maximum occurrence count, joined ", " in
/// alphabetical order. No arbitrary single winner on ties.
fn dominant_genres(counts: &HashMap<&str, usize>) -> Option<String> {
    let max = counts.values().copied().max()?;
    let mut winners: Vec<&str> = counts
        .iter()
        .filter(|(_, &count)| count == max)
        .map(|(&genre, _)| genre)
        .collect();
    winners.sort_unstable();
    Some(winners.join(", "))
}
